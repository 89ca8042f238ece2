//! Core thermal comfort engine for ComfortGuard
//!
//! Turns six physical inputs into the ISO 7730:2005 comfort indices
//! (PMV and PPD), classifies them against configurable thresholds and keeps
//! a bounded history of the results.
//!
//! Data flow:
//! - [`guard`]: checks inputs against declared physical bounds (policy driven)
//! - [`solver`]: iterative heat-balance solve producing a [`ComfortResult`]
//! - [`classifier`]: comfort state plus ordered recommendations
//! - [`history`]: FIFO window of samples with statistics and segmentation
//! - [`monitor`]: the explicit `evaluate(input)` entry point tying them together
//!
//! ```rust
//! use comfortguard_core::{ComfortMonitor, EnvironmentalInput, MonitorConfig};
//!
//! let mut monitor = ComfortMonitor::new(MonitorConfig::default());
//! let input = EnvironmentalInput::new(23.5, 25.5, 0.1, 60.0, 1.2, 0.5);
//!
//! let evaluation = monitor.evaluate(input, 1_000)?;
//! assert!(evaluation.result.is_valid());
//! assert_eq!(monitor.history().len(), 1);
//! # Ok::<(), comfortguard_core::GuardError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

// Macros for optional logging
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

pub mod buffer;
pub mod classifier;
pub mod constants;
pub mod display;
pub mod errors;
pub mod feedback;
pub mod guard;
pub mod history;
pub mod input;
pub mod monitor;
pub mod solver;
pub mod time;
pub mod traits;

// Public API
pub use classifier::{classify, ComfortState, ComfortThresholds, Recommendation, Recommendations};
pub use errors::{AggregatorError, AggregatorResult, GuardError, GuardResult, SolverError};
pub use feedback::{FeedbackTally, FeedbackVote};
pub use guard::{BoundsProfile, FieldBounds, GuardPolicy, InputBounds, InputGuard};
pub use history::{ComfortRatio, ComfortSegment, HistoryAggregator, HistorySample, HistoryStatistics, SeriesStatistics};
pub use input::{EnvironmentalInput, FixedInput, InputField, SimulatedInput};
pub use monitor::{ComfortMonitor, Evaluation, MonitorConfig};
pub use solver::{solve, solve_with, ComfortIndices, ComfortResult, SolverSettings};
pub use time::{FixedTime, TimeSource, Timestamp};
pub use traits::InputSource;

#[cfg(feature = "std")]
pub use time::SystemClock;

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
