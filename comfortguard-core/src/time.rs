//! Time sources for stamping history samples
//!
//! The core never reads a clock on its own. Callers hand a timestamp to
//! [`ComfortMonitor::evaluate`](crate::monitor::ComfortMonitor::evaluate) or
//! pass a [`TimeSource`] to `evaluate_next`:
//! - System clock (when `std` is available)
//! - Fixed/stepped time (tests, replay of recorded data)

use crate::constants::time::{MS_PER_SECOND, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

/// Timestamp in milliseconds since the Unix epoch
pub type Timestamp = u64;

/// Source of time for the monitor
pub trait TimeSource {
    /// Get current timestamp in milliseconds
    fn now(&self) -> Timestamp;

    /// Check if this source provides wall clock time (vs replayed/fixed)
    fn is_wall_clock(&self) -> bool;
}

/// System time source (requires std)
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl TimeSource for SystemClock {
    fn now(&self) -> Timestamp {
        use std::time::{SystemTime, UNIX_EPOCH};

        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as Timestamp
    }

    fn is_wall_clock(&self) -> bool {
        true
    }
}

/// Fixed time source for testing and replay
#[derive(Debug, Clone)]
pub struct FixedTime {
    timestamp: Timestamp,
}

impl FixedTime {
    /// Start at the given timestamp
    pub fn new(timestamp: Timestamp) -> Self {
        Self { timestamp }
    }

    /// Jump to a timestamp
    pub fn set(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    /// Move forward by `ms` milliseconds
    pub fn advance(&mut self, ms: u64) {
        self.timestamp = self.timestamp.saturating_add(ms);
    }
}

impl TimeSource for FixedTime {
    fn now(&self) -> Timestamp {
        self.timestamp
    }

    fn is_wall_clock(&self) -> bool {
        false
    }
}

/// Format an elapsed duration as `H:MM:SS`
///
/// Used for the "session duration" readout. Sub-second remainders are
/// dropped; a `later` before `earlier` yields `0:00:00`.
pub fn format_elapsed(earlier: Timestamp, later: Timestamp) -> alloc::string::String {
    let total_secs = later.saturating_sub(earlier) / MS_PER_SECOND;
    let hours = total_secs / SECONDS_PER_HOUR;
    let minutes = (total_secs % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let seconds = total_secs % SECONDS_PER_MINUTE;
    alloc::format!("{}:{:02}:{:02}", hours, minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_time_advances() {
        let mut time = FixedTime::new(1000);
        assert_eq!(time.now(), 1000);

        time.advance(500);
        assert_eq!(time.now(), 1500);
        assert!(!time.is_wall_clock());
    }

    #[test]
    fn elapsed_formatting() {
        assert_eq!(format_elapsed(0, 999), "0:00:00");
        assert_eq!(format_elapsed(0, 61_000), "0:01:01");
        assert_eq!(format_elapsed(1_000, 3_726_000), "1:02:05");
        assert_eq!(format_elapsed(5_000, 1_000), "0:00:00");
    }

    #[cfg(feature = "std")]
    #[test]
    fn system_clock_is_past_2020() {
        // 2020-01-01T00:00:00Z
        assert!(SystemClock.now() > 1_577_836_800_000);
    }
}
