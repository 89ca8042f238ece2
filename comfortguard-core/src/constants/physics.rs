//! Physical Constants for the PMV/PPD Model
//!
//! Coefficients of the ISO 7730:2005 analytical procedure (Annex D) and the
//! unit conversions feeding it. The solver works in SI units internally:
//! W/m² for heat flows, m²·K/W for clothing insulation, kelvin for the
//! radiative terms.

// ===== UNIT CONVERSIONS =====

/// Metabolic rate of one met (W/m²).
///
/// ISO 7730 quotes 58.2 W/m²; the Annex D reference program and the
/// published table values use 58.15 W/m².
///
/// Source: ISO 7730:2005, Annex D
pub const MET_TO_W_PER_M2: f64 = 58.15;

/// Thermal insulation of one clo (m²·K/W).
///
/// Source: ISO 7730:2005, Section 3
pub const CLO_TO_M2K_PER_W: f64 = 0.155;

/// Offset between Celsius and kelvin as used by the ISO program.
///
/// The reference procedure uses 273 rather than 273.15. Keeping the same
/// offset reproduces the published table values.
pub const KELVIN_OFFSET: f64 = 273.0;

// ===== SOLVER CONTROL =====

/// Convergence tolerance on the clothing surface temperature (°C).
pub const DEFAULT_CONVERGENCE_TOLERANCE_C: f64 = 1e-5;

/// Iteration cap for the clothing surface temperature solve.
///
/// Inputs within the ISO domain settle in under 30 iterations.
pub const DEFAULT_MAX_ITERATIONS: u32 = 150;

// ===== HEAT BALANCE COEFFICIENTS =====

/// Clothing insulation (m²·K/W) below which the area factor uses the
/// light-clothing slope.
pub const CLOTHING_AREA_BREAKPOINT_M2K_PER_W: f64 = 0.078;

/// Forced convection coefficient factor, multiplied by sqrt(var).
pub const FORCED_CONVECTION_FACTOR: f64 = 12.1;

/// Natural convection coefficient factor, multiplied by |tcl - ta|^0.25.
pub const NATURAL_CONVECTION_FACTOR: f64 = 2.38;

/// Radiative exchange factor: emissivity × Stefan-Boltzmann constant × 1e8
/// with the effective radiation area ratio folded in.
pub const RADIATION_FACTOR: f64 = 3.96;

/// Mean skin temperature used for the first surface temperature guess (°C).
pub const SKIN_TEMPERATURE_GUESS_C: f64 = 35.5;

/// Constant term of the clothing heat balance (°C).
pub const CLOTHING_BALANCE_BASE_C: f64 = 308.7;

/// Magnus-type coefficients for the water vapour partial pressure (Pa).
pub const VAPOUR_PRESSURE_A: f64 = 16.6536;
/// See [`VAPOUR_PRESSURE_A`].
pub const VAPOUR_PRESSURE_B: f64 = 4030.183;
/// See [`VAPOUR_PRESSURE_A`].
pub const VAPOUR_PRESSURE_C: f64 = 235.0;

/// PPD exponential coefficients: `100 - 95·exp(-a·pmv⁴ - b·pmv²)`.
pub const PPD_QUARTIC_COEFFICIENT: f64 = 0.03353;
/// See [`PPD_QUARTIC_COEFFICIENT`].
pub const PPD_QUADRATIC_COEFFICIENT: f64 = 0.2179;
