//! Time-Related Constants

/// Milliseconds per second.
pub const MS_PER_SECOND: u64 = 1000;

/// Seconds per minute.
pub const SECONDS_PER_MINUTE: u64 = 60;

/// Seconds per hour.
pub const SECONDS_PER_HOUR: u64 = 3600;

/// Default number of samples kept in the history window.
///
/// Matches the 30-reading window shown by the dashboard charts.
pub const DEFAULT_HISTORY_CAPACITY: usize = 30;

/// Largest history window a restored session may ask for.
///
/// One day of one-second readings. Session records above this are rejected
/// rather than trusted.
pub const MAX_HISTORY_CAPACITY: usize = 86_400;
