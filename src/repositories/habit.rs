//! Habit repository for database operations.

use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::entities::habit;

/// Repository for habit-related database operations.
pub struct HabitRepository;

impl HabitRepository {
    /// Get all habits of an owner, newest first.
    pub async fn list_for_owner<C>(conn: &C, user_id: &str) -> Result<Vec<habit::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        habit::Entity::find()
            .filter(habit::Column::UserId.eq(user_id))
            .order_by_desc(habit::Column::CreatedAt)
            .all(conn)
            .await
    }

    pub async fn get_by_id<C>(conn: &C, id: &str) -> Result<Option<habit::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        habit::Entity::find_by_id(id.to_string()).one(conn).await
    }

    pub async fn insert<C>(conn: &C, habit: habit::ActiveModel) -> Result<habit::Model, DbErr>
    where
        C: ConnectionTrait,
    {
        habit.insert(conn).await
    }

    pub async fn update<C>(conn: &C, habit: habit::ActiveModel) -> Result<habit::Model, DbErr>
    where
        C: ConnectionTrait,
    {
        habit.update(conn).await
    }
}
