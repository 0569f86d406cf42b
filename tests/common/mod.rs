//! Shared helpers: a notifier that records calls and stores that fail on purpose.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use focusdeck::error::StoreError;
use focusdeck::identity::User;
use focusdeck::models::{Habit, HabitCounters, Note, Task};
use focusdeck::notify::{Notifier, Severity};
use focusdeck::storage::LocalStorage;
use focusdeck::store::{HabitPatch, NewHabit, NewNote, NewTask, NotePatch, Store, TaskPatch};

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

#[derive(Default)]
pub struct RecordingNotifier {
    events: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<Notification> {
        self.events.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.with_severity(Severity::Error)
    }

    pub fn successes(&self) -> Vec<String> {
        self.with_severity(Severity::Info)
    }

    fn with_severity(&self, severity: Severity) -> Vec<String> {
        self.events()
            .into_iter()
            .filter(|n| n.severity == severity)
            .map(|n| n.description)
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, title: &str, description: &str, severity: Severity) {
        self.events.lock().unwrap().push(Notification {
            title: title.to_string(),
            description: description.to_string(),
            severity,
        });
    }
}

fn offline() -> StoreError {
    StoreError::InvalidData("store offline".to_string())
}

/// Every call fails
pub struct FailingStore;

#[async_trait]
impl Store for FailingStore {
    async fn list_tasks(&self, _owner: &str) -> Result<Vec<Task>, StoreError> {
        Err(offline())
    }
    async fn insert_task(&self, _owner: &str, _task: NewTask) -> Result<Task, StoreError> {
        Err(offline())
    }
    async fn update_task(&self, _id: &str, _patch: TaskPatch) -> Result<Task, StoreError> {
        Err(offline())
    }
    async fn list_notes(&self, _owner: &str) -> Result<Vec<Note>, StoreError> {
        Err(offline())
    }
    async fn insert_note(&self, _owner: &str, _note: NewNote) -> Result<Note, StoreError> {
        Err(offline())
    }
    async fn update_note(&self, _id: &str, _patch: NotePatch) -> Result<Note, StoreError> {
        Err(offline())
    }
    async fn list_habits(&self, _owner: &str) -> Result<Vec<Habit>, StoreError> {
        Err(offline())
    }
    async fn insert_habit(&self, _owner: &str, _habit: NewHabit) -> Result<Habit, StoreError> {
        Err(offline())
    }
    async fn update_habit(&self, _id: &str, _patch: HabitPatch) -> Result<Habit, StoreError> {
        Err(offline())
    }
}

/// Reads and inserts reach a real store, updates fail
pub struct ReadOnlyStore {
    pub inner: Arc<LocalStorage>,
}

#[async_trait]
impl Store for ReadOnlyStore {
    async fn list_tasks(&self, owner: &str) -> Result<Vec<Task>, StoreError> {
        self.inner.list_tasks(owner).await
    }
    async fn insert_task(&self, owner: &str, task: NewTask) -> Result<Task, StoreError> {
        self.inner.insert_task(owner, task).await
    }
    async fn update_task(&self, _id: &str, _patch: TaskPatch) -> Result<Task, StoreError> {
        Err(offline())
    }
    async fn list_notes(&self, owner: &str) -> Result<Vec<Note>, StoreError> {
        self.inner.list_notes(owner).await
    }
    async fn insert_note(&self, owner: &str, note: NewNote) -> Result<Note, StoreError> {
        self.inner.insert_note(owner, note).await
    }
    async fn update_note(&self, _id: &str, _patch: NotePatch) -> Result<Note, StoreError> {
        Err(offline())
    }
    async fn list_habits(&self, owner: &str) -> Result<Vec<Habit>, StoreError> {
        self.inner.list_habits(owner).await
    }
    async fn insert_habit(&self, owner: &str, habit: NewHabit) -> Result<Habit, StoreError> {
        self.inner.insert_habit(owner, habit).await
    }
    async fn update_habit(&self, _id: &str, _patch: HabitPatch) -> Result<Habit, StoreError> {
        Err(offline())
    }
}

pub fn alice() -> User {
    User::from_email("alice@example.com").unwrap()
}

pub fn bob() -> User {
    User::from_email("bob@example.com").unwrap()
}

pub async fn storage() -> Arc<LocalStorage> {
    Arc::new(LocalStorage::in_memory().await.expect("in-memory storage"))
}

pub async fn seed_task(storage: &LocalStorage, owner: &str, title: &str, status: focusdeck::models::TaskStatus) -> Task {
    storage
        .insert_task(
            owner,
            NewTask {
                title: title.to_string(),
                status,
            },
        )
        .await
        .unwrap()
}

/// Insert a habit and overwrite its counters
pub async fn seed_habit(storage: &LocalStorage, owner: &str, name: &str, counters: HabitCounters) -> Habit {
    let habit = storage
        .insert_habit(
            owner,
            NewHabit {
                name: name.to_string(),
                color: "primary".to_string(),
            },
        )
        .await
        .unwrap();
    storage
        .update_habit(
            &habit.id,
            HabitPatch {
                counters: Some(counters),
                ..Default::default()
            },
        )
        .await
        .unwrap()
}
