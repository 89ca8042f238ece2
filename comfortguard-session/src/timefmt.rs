//! Timestamp text in session records
//!
//! Records carry RFC 3339 UTC strings with millisecond precision
//! (`2024-03-01T09:30:00.250Z`). Older dashboards wrote local
//! `YYYY-MM-DD HH:MM:SS` strings without an offset; those and other naive
//! ISO-8601 forms are read as UTC.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use comfortguard_core::Timestamp;

use crate::errors::{SessionError, SessionResult};

/// Naive layouts accepted on load, tried in order
const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M"];

/// Render ms since the Unix epoch as RFC 3339 UTC
pub fn format_timestamp(ms: Timestamp) -> SessionResult<String> {
    let millis = i64::try_from(ms).map_err(|_| SessionError::Timestamp { value: ms })?;
    let datetime = DateTime::<Utc>::from_timestamp_millis(millis).ok_or(SessionError::Timestamp { value: ms })?;
    Ok(datetime.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Parse a record timestamp back into ms since the Unix epoch
///
/// Returns `None` for unparseable text and for instants before 1970.
pub fn parse_timestamp(text: &str) -> Option<Timestamp> {
    let text = text.trim();
    let millis = match DateTime::parse_from_rfc3339(text) {
        Ok(datetime) => datetime.timestamp_millis(),
        Err(_) => NAIVE_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())?
            .and_utc()
            .timestamp_millis(),
    };
    u64::try_from(millis).ok()
}
