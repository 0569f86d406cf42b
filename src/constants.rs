//! Constants used throughout the application
//!
//! This module centralizes notification text, placeholder values, thresholds
//! and layout limits so the components and the UI agree on them.

// Placeholders for newly created records
pub const UNTITLED_NOTE_TITLE: &str = "Untitled Note";
pub const DEFAULT_HABIT_COLOR: &str = "primary";

// Success notifications
pub const SUCCESS_TASK_ADDED: &str = "Task added";
pub const SUCCESS_TASK_UPDATED: &str = "Task updated";
pub const SUCCESS_NOTE_CREATED: &str = "Note created";
pub const SUCCESS_NOTE_SAVED: &str = "Note saved";
pub const SUCCESS_HABIT_ADDED: &str = "Habit added";
pub const SUCCESS_HABIT_UPDATED: &str = "Habit updated";

// Notification titles
pub const TOAST_TITLE_SUCCESS: &str = "Success";
pub const TOAST_TITLE_ERROR: &str = "Error";

// Habit streak tiers
pub const STREAK_HIGH_THRESHOLD: u32 = 7;
pub const STREAK_MID_THRESHOLD: u32 = 3;

// Note list display
pub const NOTE_PREVIEW_LINES: usize = 2;
pub const NOTE_EMPTY_PREVIEW: &str = "No content";
pub const NOTE_EMPTY_BODY: &str = "This note is empty. Press 'e' to add content.";
pub const DEFAULT_MAX_VISIBLE_TAGS: usize = 2;

// Toasts
pub const TOAST_CAPACITY: usize = 5;
pub const TOAST_TTL_SECS: i64 = 4;

// In-memory log buffer shown in the logs dialog
pub const LOG_BUFFER_CAPACITY: usize = 1000;

// Identity
pub const DEFAULT_USER_ENV: &str = "FOCUSDECK_USER";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const NO_USER_MESSAGE: &str = "No user signed in. Set FOCUSDECK_USER or identity.email to load your data.";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc', 'G' or 'q' to close";
pub const DIALOG_TITLE_HELP: &str = "❓ Help - Press 'Esc' or '?' to close";

// UI Layout Constants
/// Minimum sidebar width in columns
pub const SIDEBAR_MIN_WIDTH: u16 = 15;
/// Maximum sidebar width in columns
pub const SIDEBAR_MAX_WIDTH: u16 = 40;
/// Default sidebar width in columns
pub const SIDEBAR_DEFAULT_WIDTH: u16 = 22;
