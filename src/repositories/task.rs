//! Task repository for database operations.

use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::entities::task;

/// Repository for task-related database operations.
pub struct TaskRepository;

impl TaskRepository {
    /// Get all tasks of an owner, newest first.
    pub async fn list_for_owner<C>(conn: &C, user_id: &str) -> Result<Vec<task::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        task::Entity::find()
            .filter(task::Column::UserId.eq(user_id))
            .order_by_desc(task::Column::CreatedAt)
            .all(conn)
            .await
    }

    /// Get a single task by id.
    pub async fn get_by_id<C>(conn: &C, id: &str) -> Result<Option<task::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        task::Entity::find_by_id(id.to_string()).one(conn).await
    }

    /// Insert a task and return the stored row.
    pub async fn insert<C>(conn: &C, task: task::ActiveModel) -> Result<task::Model, DbErr>
    where
        C: ConnectionTrait,
    {
        task.insert(conn).await
    }

    /// Write the changed columns of a task.
    pub async fn update<C>(conn: &C, task: task::ActiveModel) -> Result<task::Model, DbErr>
    where
        C: ConnectionTrait,
    {
        task.update(conn).await
    }
}
