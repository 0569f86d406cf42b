//! Repository layer for database operations.
//!
//! Repositories encapsulate the queries for each table, following the Data
//! Mapper pattern recommended by SeaORM. Entities stay pure data models; every
//! query here is scoped either by owner (`user_id`) or by primary key.

pub mod habit;
pub mod note;
pub mod task;

pub use habit::HabitRepository;
pub use note::NoteRepository;
pub use task::TaskRepository;
