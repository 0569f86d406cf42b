//! User notifications.
//!
//! Components report the outcome of every persistence call through a
//! [`Notifier`]. The TUI uses [`ToastQueue`], which keeps the most recent
//! notifications until they expire and renders them as toasts.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// A single notification
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub created_at: DateTime<Utc>,
}

/// Fire-and-forget notification sink
pub trait Notifier: Send + Sync {
    fn notify(&self, title: &str, description: &str, severity: Severity);
}

/// Bounded, shared queue of toasts
#[derive(Clone)]
pub struct ToastQueue {
    toasts: Arc<Mutex<VecDeque<Toast>>>,
    capacity: usize,
}

impl ToastQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            toasts: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity: capacity.max(1),
        }
    }

    /// Toasts younger than `ttl_secs` at `now`, oldest first
    pub fn active(&self, now: DateTime<Utc>, ttl_secs: i64) -> Vec<Toast> {
        let ttl = Duration::seconds(ttl_secs);
        if let Ok(toasts) = self.toasts.lock() {
            toasts.iter().filter(|t| now - t.created_at < ttl).cloned().collect()
        } else {
            Vec::new()
        }
    }

    /// Drop expired toasts; returns true when something was removed
    pub fn expire(&self, now: DateTime<Utc>, ttl_secs: i64) -> bool {
        let ttl = Duration::seconds(ttl_secs);
        if let Ok(mut toasts) = self.toasts.lock() {
            let before = toasts.len();
            toasts.retain(|t| now - t.created_at < ttl);
            toasts.len() != before
        } else {
            false
        }
    }

    /// All queued toasts, oldest first
    pub fn snapshot(&self) -> Vec<Toast> {
        self.toasts
            .lock()
            .map(|toasts| toasts.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.toasts.lock().map(|t| t.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut toasts) = self.toasts.lock() {
            toasts.clear();
        }
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(crate::constants::TOAST_CAPACITY)
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, title: &str, description: &str, severity: Severity) {
        if let Ok(mut toasts) = self.toasts.lock() {
            while toasts.len() >= self.capacity {
                toasts.pop_front();
            }
            toasts.push_back(Toast {
                title: title.to_string(),
                description: description.to_string(),
                severity,
                created_at: Utc::now(),
            });
        }
    }
}
