use sea_orm::ActiveValue;
use uuid::Uuid;

use super::LocalStorage;
use crate::entities::note;
use crate::error::StoreError;
use crate::models::note::encode_tags;
use crate::models::Note;
use crate::repositories::NoteRepository;
use crate::store::{NewNote, NotePatch};
use crate::utils::datetime;

impl LocalStorage {
    /// Get the owner's notes, newest first
    pub async fn get_notes(&self, owner: &str) -> Result<Vec<Note>, StoreError> {
        NoteRepository::list_for_owner(&self.conn, owner)
            .await?
            .into_iter()
            .map(Note::try_from)
            .collect()
    }

    /// Store a new note; `created_at` and `updated_at` start equal
    pub async fn create_note(&self, owner: &str, new_note: NewNote) -> Result<Note, StoreError> {
        let now = datetime::now_timestamp();
        let model = note::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            user_id: ActiveValue::Set(owner.to_string()),
            title: ActiveValue::Set(new_note.title),
            content: ActiveValue::Set(new_note.content),
            tags: ActiveValue::Set(encode_tags(&new_note.tags)?),
            created_at: ActiveValue::Set(now.clone()),
            updated_at: ActiveValue::Set(now),
        };

        NoteRepository::insert(&self.conn, model).await?.try_into()
    }

    /// Apply a partial update to a note and refresh `updated_at`
    pub async fn patch_note(&self, id: &str, patch: NotePatch) -> Result<Note, StoreError> {
        let existing = NoteRepository::get_by_id(&self.conn, id)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("note {}", id)))?;

        let mut model: note::ActiveModel = existing.into();
        if let Some(title) = patch.title {
            model.title = ActiveValue::Set(title);
        }
        if let Some(content) = patch.content {
            model.content = ActiveValue::Set(content);
        }
        if let Some(tags) = patch.tags {
            model.tags = ActiveValue::Set(encode_tags(&tags)?);
        }
        model.updated_at = ActiveValue::Set(datetime::now_timestamp());

        NoteRepository::update(&self.conn, model).await?.try_into()
    }
}
