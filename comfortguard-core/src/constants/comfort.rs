//! Comfort Bounds and Thresholds
//!
//! Declared physical bounds of the six inputs and the default comfort band.
//! The ISO bounds restrict evaluation to the range documented for the
//! analytical model; the exploratory range widens temperatures for
//! simulation work.

// ===== DEFAULT COMFORT BAND =====

/// Lower bound of the comfortable PMV band.
///
/// Source: ISO 7730:2005, Table A.1 (category B)
pub const DEFAULT_PMV_MIN: f64 = -0.5;

/// Upper bound of the comfortable PMV band.
///
/// Source: ISO 7730:2005, Table A.1 (category B)
pub const DEFAULT_PMV_MAX: f64 = 0.5;

/// Maximum acceptable PPD (%).
///
/// Source: ISO 7730:2005, Table A.1 (category B)
pub const DEFAULT_PPD_MAX: f64 = 10.0;

/// |PMV| beyond which ISO 7730 no longer recommends using the index.
pub const ISO_PMV_APPLICABILITY_LIMIT: f64 = 2.0;

// ===== ISO INPUT BOUNDS (inclusive) =====

/// Air and mean radiant temperature range for ISO evaluation (°C).
pub const ISO_TEMP_MIN_C: f64 = 15.0;
/// See [`ISO_TEMP_MIN_C`].
pub const ISO_TEMP_MAX_C: f64 = 30.0;

/// Relative humidity range (%).
pub const ISO_HUMIDITY_MIN_PCT: f64 = 10.0;
/// See [`ISO_HUMIDITY_MIN_PCT`].
pub const ISO_HUMIDITY_MAX_PCT: f64 = 90.0;

/// Relative air velocity range (m/s).
pub const ISO_VELOCITY_MIN_M_PER_S: f64 = 0.05;
/// See [`ISO_VELOCITY_MIN_M_PER_S`].
pub const ISO_VELOCITY_MAX_M_PER_S: f64 = 1.0;

/// Metabolic rate range (met).
pub const ISO_MET_MIN: f64 = 0.8;
/// See [`ISO_MET_MIN`].
pub const ISO_MET_MAX: f64 = 2.0;

/// Clothing insulation range (clo).
pub const ISO_CLO_MIN: f64 = 0.3;
/// See [`ISO_CLO_MIN`].
pub const ISO_CLO_MAX: f64 = 1.5;

// ===== EXPLORATORY INPUT BOUNDS =====

/// Widened temperature range for exploratory simulation (°C).
pub const EXPLORATORY_TEMP_MIN_C: f64 = 10.0;
/// See [`EXPLORATORY_TEMP_MIN_C`].
pub const EXPLORATORY_TEMP_MAX_C: f64 = 40.0;

// ===== DEFAULT OPERATING POINT =====

/// Default air and mean radiant temperature (°C).
pub const DEFAULT_AIR_TEMP_C: f64 = 25.0;

/// Default relative humidity (%).
pub const DEFAULT_HUMIDITY_PCT: f64 = 50.0;

/// Default relative air velocity (m/s).
pub const DEFAULT_VELOCITY_M_PER_S: f64 = 0.1;

/// Seated, relaxed office activity (met).
pub const DEFAULT_MET: f64 = 1.2;

/// Light summer clothing (clo).
pub const DEFAULT_CLO: f64 = 0.5;
