//! Local storage module backing the [`Store`] trait with SQLite through SeaORM.
//!
//! - [`db`] - Connection setup and schema creation
//! - `tasks`, `notes`, `habits` - Per-collection queries and record mapping

pub mod db;
mod habits;
mod notes;
mod tasks;

pub use db::LocalStorage;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::{Habit, Note, Task};
use crate::store::{HabitPatch, NewHabit, NewNote, NewTask, NotePatch, Store, TaskPatch};

#[async_trait]
impl Store for LocalStorage {
    async fn list_tasks(&self, owner: &str) -> Result<Vec<Task>, StoreError> {
        self.get_tasks(owner).await
    }

    async fn insert_task(&self, owner: &str, task: NewTask) -> Result<Task, StoreError> {
        self.create_task(owner, task).await
    }

    async fn update_task(&self, id: &str, patch: TaskPatch) -> Result<Task, StoreError> {
        self.patch_task(id, patch).await
    }

    async fn list_notes(&self, owner: &str) -> Result<Vec<Note>, StoreError> {
        self.get_notes(owner).await
    }

    async fn insert_note(&self, owner: &str, note: NewNote) -> Result<Note, StoreError> {
        self.create_note(owner, note).await
    }

    async fn update_note(&self, id: &str, patch: NotePatch) -> Result<Note, StoreError> {
        self.patch_note(id, patch).await
    }

    async fn list_habits(&self, owner: &str) -> Result<Vec<Habit>, StoreError> {
        self.get_habits(owner).await
    }

    async fn insert_habit(&self, owner: &str, habit: NewHabit) -> Result<Habit, StoreError> {
        self.create_habit(owner, habit).await
    }

    async fn update_habit(&self, id: &str, patch: HabitPatch) -> Result<Habit, StoreError> {
        self.patch_habit(id, patch).await
    }
}
