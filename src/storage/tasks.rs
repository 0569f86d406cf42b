use sea_orm::ActiveValue;
use uuid::Uuid;

use super::LocalStorage;
use crate::entities::task;
use crate::error::StoreError;
use crate::models::Task;
use crate::repositories::TaskRepository;
use crate::store::{NewTask, TaskPatch};
use crate::utils::datetime;

impl LocalStorage {
    /// Get the owner's tasks, newest first
    pub async fn get_tasks(&self, owner: &str) -> Result<Vec<Task>, StoreError> {
        TaskRepository::list_for_owner(&self.conn, owner)
            .await?
            .into_iter()
            .map(Task::try_from)
            .collect()
    }

    /// Store a new task with a fresh id and creation time
    pub async fn create_task(&self, owner: &str, new_task: NewTask) -> Result<Task, StoreError> {
        let model = task::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            user_id: ActiveValue::Set(owner.to_string()),
            title: ActiveValue::Set(new_task.title),
            status: ActiveValue::Set(new_task.status.as_str().to_string()),
            created_at: ActiveValue::Set(datetime::now_timestamp()),
        };

        TaskRepository::insert(&self.conn, model).await?.try_into()
    }

    /// Apply a partial update to a task
    pub async fn patch_task(&self, id: &str, patch: TaskPatch) -> Result<Task, StoreError> {
        let existing = TaskRepository::get_by_id(&self.conn, id)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("task {}", id)))?;

        let mut model: task::ActiveModel = existing.into();
        if let Some(title) = patch.title {
            model.title = ActiveValue::Set(title);
        }
        if let Some(status) = patch.status {
            model.status = ActiveValue::Set(status.as_str().to_string());
        }

        TaskRepository::update(&self.conn, model).await?.try_into()
    }
}
