//! focusdeck - a terminal productivity dashboard
//!
//! A task board with three status lanes, a notes editor with tags and a
//! daily habit tracker, shown in one TUI and persisted per user to SQLite.
//!
//! # Modules
//!
//! * [`board`], [`notes`], [`habits`] - the three components and their operations
//! * [`dashboard`] - the shell that owns the components and the active view
//! * [`store`] - the persistence seam the components write through
//! * [`storage`] - the SQLite implementation of [`store::Store`]
//! * [`config`] - application configuration management
//! * [`ui`] - terminal user interface components and rendering

/// Task board with status lanes and the relocation protocol
pub mod board;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Dashboard shell and active-view selection
pub mod dashboard;

/// SeaORM entity models for database tables
pub mod entities;

/// Persistence error types
pub mod error;

/// Habit tracker and derived statistics
pub mod habits;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Current-user resolution
pub mod identity;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Domain models
pub mod models;

/// Notes editor with its edit buffer
pub mod notes;

/// User notifications (toasts)
pub mod notify;

/// Repository layer for database operations
pub mod repositories;

/// Local SQLite storage
pub mod storage;

/// Persistence trait and write payloads
pub mod store;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling
pub mod utils;
