//! Task board: three status lanes over one ordered task collection.
//!
//! The board owns its tasks and writes through to the [`Store`] on every
//! mutation. Local state changes only after the store confirms the write; a
//! failed call is logged, reported through the [`Notifier`] and leaves the
//! collection untouched.
//!
//! Moving a task between lanes is expressed as a [`RelocationEvent`]. Mouse
//! drags and keyboard move mode both produce one, so the board doesn't care
//! which gesture moved the task.

use std::sync::Arc;

use crate::constants::{SUCCESS_TASK_ADDED, SUCCESS_TASK_UPDATED, TOAST_TITLE_ERROR, TOAST_TITLE_SUCCESS};
use crate::error::{EntityKind, PersistenceError};
use crate::identity::User;
use crate::models::{Task, TaskStatus};
use crate::notify::{Notifier, Severity};
use crate::store::{NewTask, Store, TaskPatch};

/// A slot on the board: a lane and a position within it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanePosition {
    pub lane: TaskStatus,
    pub index: usize,
}

impl LanePosition {
    pub fn new(lane: TaskStatus, index: usize) -> Self {
        Self { lane, index }
    }
}

/// Result of a drag: where the task came from and where it was dropped.
///
/// `destination` is `None` when the drag was cancelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelocationEvent {
    pub task_id: String,
    pub source: LanePosition,
    pub destination: Option<LanePosition>,
}

impl RelocationEvent {
    /// The status the moved task should take, if the drop changes anything.
    ///
    /// Reordering inside a lane is not persisted, so only a drop into another
    /// lane (or the same lane at another index) yields a status.
    pub fn target_status(&self) -> Option<TaskStatus> {
        let destination = self.destination?;
        if destination == self.source {
            return None;
        }
        Some(destination.lane)
    }
}

pub struct TaskBoard {
    tasks: Vec<Task>,
    loading: bool,
    user: Option<User>,
    store: Arc<dyn Store>,
    notifier: Arc<dyn Notifier>,
}

impl TaskBoard {
    pub fn new(store: Arc<dyn Store>, user: Option<User>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            tasks: Vec::new(),
            loading: true,
            user,
            store,
            notifier,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// True until the first successful load
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Replace the current user. Call [`TaskBoard::load`] afterwards to fetch
    /// the new owner's tasks.
    pub fn set_user(&mut self, user: Option<User>) {
        if self.user != user {
            self.tasks.clear();
            self.loading = true;
        }
        self.user = user;
    }

    /// Fetch the owner's tasks, newest first. Does nothing without a user.
    pub async fn load(&mut self) -> bool {
        let Some(owner) = self.user.as_ref().map(|u| u.id.clone()) else {
            log::debug!("Board: no user, skipping load");
            return false;
        };

        match self
            .store
            .list_tasks(&owner)
            .await
            .map_err(PersistenceError::fetch(EntityKind::Task))
        {
            Ok(tasks) => {
                log::info!("Board: loaded {} tasks", tasks.len());
                self.tasks = tasks;
                self.loading = false;
                true
            }
            Err(e) => {
                self.report(&e);
                false
            }
        }
    }

    /// Create a pending task and put it at the head of the board.
    ///
    /// Blank titles are ignored. Returns the new task's id.
    pub async fn add(&mut self, title: &str) -> Option<String> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        let Some(owner) = self.user.as_ref().map(|u| u.id.clone()) else {
            log::warn!("Board: cannot add task '{}' without a user", title);
            return None;
        };

        let new_task = NewTask {
            title: title.to_string(),
            status: TaskStatus::Pending,
        };
        match self
            .store
            .insert_task(&owner, new_task)
            .await
            .map_err(PersistenceError::add(EntityKind::Task))
        {
            Ok(task) => {
                log::info!("Board: added task {} '{}'", task.id, task.title);
                let id = task.id.clone();
                self.tasks.insert(0, task);
                self.notifier.notify(TOAST_TITLE_SUCCESS, SUCCESS_TASK_ADDED, Severity::Info);
                Some(id)
            }
            Err(e) => {
                self.report(&e);
                None
            }
        }
    }

    /// Move a task to `status`. Unknown ids and unchanged statuses are no-ops.
    pub async fn set_status(&mut self, id: &str, status: TaskStatus) -> bool {
        let Some(position) = self.tasks.iter().position(|t| t.id == id) else {
            log::debug!("Board: task {} not found", id);
            return false;
        };
        if self.tasks[position].status == status {
            return false;
        }

        let patch = TaskPatch {
            status: Some(status),
            ..Default::default()
        };
        match self
            .store
            .update_task(id, patch)
            .await
            .map_err(PersistenceError::update(EntityKind::Task))
        {
            Ok(_) => {
                log::info!(
                    "Board: task {} {} -> {}",
                    id,
                    self.tasks[position].status,
                    status
                );
                self.tasks[position].status = status;
                self.notifier.notify(TOAST_TITLE_SUCCESS, SUCCESS_TASK_UPDATED, Severity::Info);
                true
            }
            Err(e) => {
                self.report(&e);
                false
            }
        }
    }

    /// Apply a drag result. Cancelled drags and drops onto the source slot do nothing.
    pub async fn relocate(&mut self, event: &RelocationEvent) -> bool {
        match event.target_status() {
            Some(status) => self.set_status(&event.task_id, status).await,
            None => {
                log::debug!("Board: relocation of {} is a no-op", event.task_id);
                false
            }
        }
    }

    /// Tasks in one lane, in board order
    pub fn lane(&self, status: TaskStatus) -> Vec<&Task> {
        lane_tasks(&self.tasks, status)
    }

    /// All three lanes, left to right
    pub fn lanes(&self) -> [(TaskStatus, Vec<&Task>); 3] {
        TaskStatus::ALL.map(|status| (status, self.lane(status)))
    }

    /// Where a task currently sits on the board
    pub fn position_of(&self, id: &str) -> Option<LanePosition> {
        lane_position(&self.tasks, id)
    }

    fn report(&self, error: &PersistenceError) {
        log::error!("Board: {}: {}", error, error.source);
        self.notifier.notify(TOAST_TITLE_ERROR, &error.to_string(), Severity::Error);
    }
}

/// Tasks of `tasks` with the given status, keeping their order
pub fn lane_tasks(tasks: &[Task], status: TaskStatus) -> Vec<&Task> {
    tasks.iter().filter(|t| t.status == status).collect()
}

/// Lane and index of a task within `tasks`
pub fn lane_position(tasks: &[Task], id: &str) -> Option<LanePosition> {
    let task = tasks.iter().find(|t| t.id == id)?;
    let index = lane_tasks(tasks, task.status).iter().position(|t| t.id == id)?;
    Some(LanePosition::new(task.status, index))
}

/// Statuses a task can be moved to with a button: every status except its current one
pub fn available_transitions(current: TaskStatus) -> Vec<TaskStatus> {
    TaskStatus::ALL.into_iter().filter(|s| *s != current).collect()
}
