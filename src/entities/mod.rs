//! SeaORM entity models for the persisted collections.
//!
//! Every table is scoped by `user_id`. Timestamps are RFC 3339 strings and tags
//! are a JSON-encoded array; the domain types in [`crate::models`] parse them.

pub mod habit;
pub mod note;
pub mod task;

pub use habit::Entity as Habit;
pub use note::Entity as Note;
pub use task::Entity as Task;
