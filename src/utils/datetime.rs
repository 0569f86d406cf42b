//! Date and time utility functions
//!
//! Records are persisted with RFC 3339 timestamps in UTC. This module converts
//! between that storage form and `DateTime<Utc>`, and renders the
//! relative/absolute labels shown next to notes.

use chrono::{DateTime, Local, SecondsFormat, Utc};

/// Absolute date prefix used when a timestamp is too old for a relative label
pub const ABSOLUTE_DATE_FORMAT: &str = "%b %d";

/// Default time-of-day format
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M";

/// Format a timestamp for storage.
///
/// Nanosecond precision keeps lexicographic order equal to chronological
/// order, which the stores rely on when sorting by `created_at`.
pub fn format_timestamp(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

/// Parse a stored RFC 3339 timestamp
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(value).map(|dt| dt.with_timezone(&Utc))
}

/// Current time in storage format
pub fn now_timestamp() -> String {
    format_timestamp(Utc::now())
}

/// Format a timestamp as `Mon DD, <time>` in local time
pub fn format_absolute(dt: DateTime<Utc>, time_format: &str) -> String {
    let local = dt.with_timezone(&Local);
    format!("{}, {}", local.format(ABSOLUTE_DATE_FORMAT), local.format(time_format))
}

/// Format a timestamp relative to `now`
///
/// # Returns
/// * `"just now"` under a minute, `"N minutes ago"`, `"N hours ago"`,
///   `"yesterday"`, `"N days ago"` within a week, otherwise the absolute form.
///   Timestamps in the future fall back to the absolute form.
pub fn format_relative(dt: DateTime<Utc>, now: DateTime<Utc>, time_format: &str) -> String {
    let elapsed = now - dt;

    if elapsed.num_seconds() < 0 {
        return format_absolute(dt, time_format);
    }

    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    match (days, hours, minutes) {
        (_, _, 0) => "just now".to_string(),
        (_, 0, 1) => "1 minute ago".to_string(),
        (_, 0, m) => format!("{} minutes ago", m),
        (0, 1, _) => "1 hour ago".to_string(),
        (0, h, _) => format!("{} hours ago", h),
        (1, _, _) => "yesterday".to_string(),
        (d, _, _) if d < 7 => format!("{} days ago", d),
        _ => format_absolute(dt, time_format),
    }
}
