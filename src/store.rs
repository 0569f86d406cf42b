//! Persistence abstraction consumed by the components.
//!
//! A store holds three record collections (tasks, notes, habits), each scoped
//! by an owner id. Every collection supports list-by-owner newest first,
//! insert-one returning the stored record, and update-by-id with a partial
//! patch. Ids and timestamps are assigned by the store.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::{Habit, HabitCounters, Note, Task, TaskStatus};

/// Fields supplied when creating a task.
#[derive(Clone, Debug)]
pub struct NewTask {
    pub title: String,
    pub status: TaskStatus,
}

/// Partial update of a task.
#[derive(Clone, Debug, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub status: Option<TaskStatus>,
}

/// Fields supplied when creating a note.
#[derive(Clone, Debug)]
pub struct NewNote {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

/// Partial update of a note. Any update refreshes `updated_at`.
#[derive(Clone, Debug, Default)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Fields supplied when creating a habit. Counters start at zero.
#[derive(Clone, Debug)]
pub struct NewHabit {
    pub name: String,
    pub color: String,
}

/// Partial update of a habit.
#[derive(Clone, Debug, Default)]
pub struct HabitPatch {
    pub name: Option<String>,
    pub counters: Option<HabitCounters>,
}

/// Store trait that every persistence backend implements.
#[async_trait]
pub trait Store: Send + Sync {
    // Tasks
    async fn list_tasks(&self, owner: &str) -> Result<Vec<Task>, StoreError>;
    async fn insert_task(&self, owner: &str, task: NewTask) -> Result<Task, StoreError>;
    async fn update_task(&self, id: &str, patch: TaskPatch) -> Result<Task, StoreError>;

    // Notes
    async fn list_notes(&self, owner: &str) -> Result<Vec<Note>, StoreError>;
    async fn insert_note(&self, owner: &str, note: NewNote) -> Result<Note, StoreError>;
    async fn update_note(&self, id: &str, patch: NotePatch) -> Result<Note, StoreError>;

    // Habits
    async fn list_habits(&self, owner: &str) -> Result<Vec<Habit>, StoreError>;
    async fn insert_habit(&self, owner: &str, habit: NewHabit) -> Result<Habit, StoreError>;
    async fn update_habit(&self, id: &str, patch: HabitPatch) -> Result<Habit, StoreError>;
}
