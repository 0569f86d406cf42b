//! Domain types shared by the components, the store and the UI.
//!
//! Each type maps one-to-one onto its entity in [`crate::entities`]; the
//! `TryFrom` conversions only rename fields and parse stored strings.

pub mod habit;
pub mod note;
pub mod task;

pub use habit::{Habit, HabitCounters, StreakTier};
pub use note::Note;
pub use task::{Task, TaskStatus, UnknownStatus};
