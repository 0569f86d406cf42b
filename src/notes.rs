//! Notes editor: a note collection, a selection and a transient edit buffer.
//!
//! Edits go to the [`EditBuffer`] and reach the committed note only through
//! [`NotesEditor::save`]. Selecting another note reseeds the buffer, which
//! discards unsaved changes without a prompt.

use std::sync::Arc;

use crate::constants::{SUCCESS_NOTE_CREATED, SUCCESS_NOTE_SAVED, TOAST_TITLE_ERROR, TOAST_TITLE_SUCCESS, UNTITLED_NOTE_TITLE};
use crate::error::{EntityKind, PersistenceError};
use crate::identity::User;
use crate::models::Note;
use crate::notify::{Notifier, Severity};
use crate::store::{NewNote, NotePatch, Store};

/// Unsaved copy of a note's editable fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuffer {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    /// Text typed into the "add tag" field
    pub new_tag: String,
}

impl EditBuffer {
    pub fn from_note(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            content: note.content.clone(),
            tags: note.tags.clone(),
            new_tag: String::new(),
        }
    }

    /// Insert a tag, keeping insertion order. Blank and duplicate tags are ignored.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }

    /// Add whatever is in the tag field, then clear the field
    pub fn commit_new_tag(&mut self) -> bool {
        let tag = std::mem::take(&mut self.new_tag);
        self.add_tag(&tag)
    }
}

pub struct NotesEditor {
    notes: Vec<Note>,
    selected: Option<String>,
    editing: bool,
    buffer: EditBuffer,
    loading: bool,
    user: Option<User>,
    store: Arc<dyn Store>,
    notifier: Arc<dyn Notifier>,
}

impl NotesEditor {
    pub fn new(store: Arc<dyn Store>, user: Option<User>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            notes: Vec::new(),
            selected: None,
            editing: false,
            buffer: EditBuffer::default(),
            loading: true,
            user,
            store,
            notifier,
        }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn selected(&self) -> Option<&Note> {
        self.selected.as_deref().and_then(|id| self.get(id))
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn buffer(&self) -> &EditBuffer {
        &self.buffer
    }

    /// Mutable access to the edit buffer. Changes stay local until [`NotesEditor::save`].
    pub fn buffer_mut(&mut self) -> &mut EditBuffer {
        &mut self.buffer
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn set_user(&mut self, user: Option<User>) {
        if self.user != user {
            self.notes.clear();
            self.selected = None;
            self.editing = false;
            self.buffer = EditBuffer::default();
            self.loading = true;
        }
        self.user = user;
    }

    /// Fetch the owner's notes, newest first. Does nothing without a user.
    pub async fn load(&mut self) -> bool {
        let Some(owner) = self.user.as_ref().map(|u| u.id.clone()) else {
            log::debug!("Notes: no user, skipping load");
            return false;
        };

        match self
            .store
            .list_notes(&owner)
            .await
            .map_err(PersistenceError::fetch(EntityKind::Note))
        {
            Ok(notes) => {
                log::info!("Notes: loaded {} notes", notes.len());
                self.notes = notes;
                if self.selected.as_deref().is_some_and(|id| self.get(id).is_none()) {
                    self.selected = None;
                    self.editing = false;
                }
                self.loading = false;
                true
            }
            Err(e) => {
                self.report(&e);
                false
            }
        }
    }

    /// Create an untitled note, select it and open it for editing.
    /// Returns the new note's id.
    pub async fn create(&mut self) -> Option<String> {
        let Some(owner) = self.user.as_ref().map(|u| u.id.clone()) else {
            log::warn!("Notes: cannot create a note without a user");
            return None;
        };

        let new_note = NewNote {
            title: UNTITLED_NOTE_TITLE.to_string(),
            content: String::new(),
            tags: Vec::new(),
        };
        match self
            .store
            .insert_note(&owner, new_note)
            .await
            .map_err(PersistenceError::add(EntityKind::Note))
        {
            Ok(note) => {
                log::info!("Notes: created note {}", note.id);
                let id = note.id.clone();
                self.buffer = EditBuffer::from_note(&note);
                self.notes.insert(0, note);
                self.selected = Some(id.clone());
                self.editing = true;
                self.notifier.notify(TOAST_TITLE_SUCCESS, SUCCESS_NOTE_CREATED, Severity::Info);
                Some(id)
            }
            Err(e) => {
                self.report(&e);
                None
            }
        }
    }

    /// Select a note and leave edit mode, discarding any unsaved buffer
    pub fn select(&mut self, id: &str) -> bool {
        let Some(fresh) = self.get(id).map(EditBuffer::from_note) else {
            return false;
        };
        if self.editing && self.buffer != fresh {
            log::debug!("Notes: discarding unsaved edits");
        }
        self.buffer = fresh;
        self.selected = Some(id.to_string());
        self.editing = false;
        true
    }

    /// Enter edit mode for the selected note
    pub fn start_editing(&mut self) -> bool {
        let Some(fresh) = self.selected().map(EditBuffer::from_note) else {
            return false;
        };
        if !self.editing {
            self.buffer = fresh;
            self.editing = true;
        }
        true
    }

    /// Leave edit mode and reset the buffer to the committed note
    pub fn cancel_editing(&mut self) {
        if let Some(fresh) = self.selected().map(EditBuffer::from_note) {
            self.buffer = fresh;
        }
        self.editing = false;
    }

    pub fn add_tag(&mut self, tag: &str) -> bool {
        self.buffer.add_tag(tag)
    }

    pub fn remove_tag(&mut self, tag: &str) -> bool {
        self.buffer.remove_tag(tag)
    }

    /// Persist the buffer onto the selected note and leave edit mode
    pub async fn save(&mut self) -> bool {
        let Some(id) = self.selected.clone() else {
            return false;
        };

        let patch = NotePatch {
            title: Some(self.buffer.title.clone()),
            content: Some(self.buffer.content.clone()),
            tags: Some(self.buffer.tags.clone()),
        };
        match self
            .store
            .update_note(&id, patch)
            .await
            .map_err(PersistenceError::update(EntityKind::Note))
        {
            Ok(stored) => {
                log::info!("Notes: saved note {}", id);
                if let Some(note) = self.notes.iter_mut().find(|n| n.id == id) {
                    note.title = stored.title;
                    note.content = stored.content;
                    note.tags = stored.tags;
                    note.updated_at = stored.updated_at;
                }
                self.editing = false;
                self.notifier.notify(TOAST_TITLE_SUCCESS, SUCCESS_NOTE_SAVED, Severity::Info);
                true
            }
            Err(e) => {
                self.report(&e);
                false
            }
        }
    }

    fn report(&self, error: &PersistenceError) {
        log::error!("Notes: {}: {}", error, error.source);
        self.notifier.notify(TOAST_TITLE_ERROR, &error.to_string(), Severity::Error);
    }
}
