//! Utility modules for focusdeck.
//!
//! - [`datetime`] - Timestamp storage format, parsing and human-readable formatting

pub mod datetime;
