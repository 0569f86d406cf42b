//! Error types for persistence operations.
//!
//! [`StoreError`] is what a [`crate::store::Store`] implementation reports.
//! Components wrap it in a [`PersistenceError`], the single error kind the rest
//! of the application deals with.

use std::fmt;

/// Errors raised by a store implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// The persistence operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Fetch,
    Add,
    Update,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Operation::Fetch => "fetch",
            Operation::Add => "add",
            Operation::Update => "update",
        };
        f.write_str(verb)
    }
}

/// The record collection an operation targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Task,
    Note,
    Habit,
}

impl EntityKind {
    pub fn singular(&self) -> &'static str {
        match self {
            EntityKind::Task => "task",
            EntityKind::Note => "note",
            EntityKind::Habit => "habit",
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            EntityKind::Task => "tasks",
            EntityKind::Note => "notes",
            EntityKind::Habit => "habits",
        }
    }
}

/// A failed fetch, insert or update against the store.
///
/// The `Display` output is the generic message shown to the user, e.g.
/// "Failed to fetch tasks" or "Failed to update habit".
#[derive(Debug, thiserror::Error)]
#[error("Failed to {operation} {noun}")]
pub struct PersistenceError {
    pub operation: Operation,
    pub entity: EntityKind,
    noun: &'static str,
    #[source]
    pub source: StoreError,
}

impl PersistenceError {
    pub fn new(operation: Operation, entity: EntityKind, source: StoreError) -> Self {
        let noun = match operation {
            Operation::Fetch => entity.plural(),
            Operation::Add | Operation::Update => entity.singular(),
        };
        Self {
            operation,
            entity,
            noun,
            source,
        }
    }

    pub fn fetch(entity: EntityKind) -> impl FnOnce(StoreError) -> Self {
        move |source| Self::new(Operation::Fetch, entity, source)
    }

    pub fn add(entity: EntityKind) -> impl FnOnce(StoreError) -> Self {
        move |source| Self::new(Operation::Add, entity, source)
    }

    pub fn update(entity: EntityKind) -> impl FnOnce(StoreError) -> Self {
        move |source| Self::new(Operation::Update, entity, source)
    }
}
