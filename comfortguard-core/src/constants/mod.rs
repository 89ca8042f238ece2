//! Constants for ComfortGuard Core
//!
//! Every numeric value used by the guard, the solver and the history lives
//! here with its unit and source. Names carry their unit as a suffix.
//!
//! Constants are grouped by domain:
//! - **Physics**: ISO 7730:2005 model coefficients and unit conversions
//! - **Comfort**: declared input bounds and default comfort thresholds
//! - **Time**: time unit conversions and history defaults

/// ISO 7730 model coefficients and unit conversions.
pub mod physics;

/// Declared input bounds and default comfort thresholds.
pub mod comfort;

/// Time unit conversions and history sizing.
pub mod time;

// Re-export commonly used constants for convenience
pub use physics::{
    CLO_TO_M2K_PER_W, MET_TO_W_PER_M2, KELVIN_OFFSET,
    DEFAULT_CONVERGENCE_TOLERANCE_C, DEFAULT_MAX_ITERATIONS,
};

pub use comfort::{
    DEFAULT_PMV_MIN, DEFAULT_PMV_MAX, DEFAULT_PPD_MAX,
    ISO_PMV_APPLICABILITY_LIMIT,
};

pub use time::{MS_PER_SECOND, DEFAULT_HISTORY_CAPACITY, MAX_HISTORY_CAPACITY};
