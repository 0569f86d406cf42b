//! Note repository for database operations.

use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::entities::note;

/// Repository for note-related database operations.
pub struct NoteRepository;

impl NoteRepository {
    /// Get all notes of an owner, newest first.
    pub async fn list_for_owner<C>(conn: &C, user_id: &str) -> Result<Vec<note::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        note::Entity::find()
            .filter(note::Column::UserId.eq(user_id))
            .order_by_desc(note::Column::CreatedAt)
            .all(conn)
            .await
    }

    pub async fn get_by_id<C>(conn: &C, id: &str) -> Result<Option<note::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        note::Entity::find_by_id(id.to_string()).one(conn).await
    }

    pub async fn insert<C>(conn: &C, note: note::ActiveModel) -> Result<note::Model, DbErr>
    where
        C: ConnectionTrait,
    {
        note.insert(conn).await
    }

    pub async fn update<C>(conn: &C, note: note::ActiveModel) -> Result<note::Model, DbErr>
    where
        C: ConnectionTrait,
    {
        note.update(conn).await
    }
}
