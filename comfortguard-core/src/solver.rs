//! PMV/PPD Solver (ISO 7730:2005 analytical procedure)
//!
//! ## Physics Background
//!
//! PMV predicts the mean thermal sensation vote of a large group on the
//! seven-point scale (-3 cold ... +3 hot) from the imbalance between the heat
//! a body produces and the heat it loses to its environment:
//!
//! ```text
//! PMV = ts × (M - W - E_diff - E_sw - E_res,lat - C_res,dry - R - C)
//! ts  = 0.303·exp(-0.036·M) + 0.028
//! ```
//!
//! Radiative (R) and convective (C) losses depend on the clothing surface
//! temperature tcl, which itself appears on both sides of the clothing heat
//! balance:
//!
//! ```text
//! tcl = 35.7 - 0.028·(M-W) - Icl·{ 3.96e-8·fcl·[(tcl+273)⁴ - (tr+273)⁴]
//!                                  + fcl·hc·(tcl - ta) }
//! ```
//!
//! and hc switches between forced (12.1·√var) and natural
//! (2.38·|tcl-ta|^0.25) convection. The solver finds tcl by damped successive
//! substitution, working on tcl/100 in kelvin as the reference program does.
//!
//! PPD follows from PMV in closed form:
//!
//! ```text
//! PPD = 100 - 95·exp(-0.03353·PMV⁴ - 0.2179·PMV²)
//! ```
//!
//! ## Failure Modes
//!
//! - Iteration cap reached → [`SolverError::NonConvergence`]
//! - Non-finite intermediate (negative air velocity under the square root,
//!   zero clothing resistance denominator, NaN inputs) or an absolute
//!   temperature at or below zero → [`SolverError::DomainError`]
//!
//! Neither is a panic: both come back as [`ComfortResult::Invalid`].
//!
//! ## Precision
//!
//! Everything runs in f64 and results are returned at full precision.
//! Rounding to 2 (PMV) and 1 (PPD) decimals is a display concern, see
//! [`crate::display`].

use libm::{exp, fabs, pow, sqrt};

use crate::constants::physics::{
    CLOTHING_AREA_BREAKPOINT_M2K_PER_W, CLOTHING_BALANCE_BASE_C, CLO_TO_M2K_PER_W,
    DEFAULT_CONVERGENCE_TOLERANCE_C, DEFAULT_MAX_ITERATIONS, FORCED_CONVECTION_FACTOR, KELVIN_OFFSET,
    MET_TO_W_PER_M2, NATURAL_CONVECTION_FACTOR, PPD_QUADRATIC_COEFFICIENT, PPD_QUARTIC_COEFFICIENT,
    RADIATION_FACTOR, SKIN_TEMPERATURE_GUESS_C, VAPOUR_PRESSURE_A, VAPOUR_PRESSURE_B,
    VAPOUR_PRESSURE_C,
};
use crate::constants::comfort::ISO_PMV_APPLICABILITY_LIMIT;
use crate::errors::SolverError;
use crate::input::EnvironmentalInput;

/// Iteration control for the surface temperature solve
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverSettings {
    /// Stop once successive surface temperatures differ by at most this (°C);
    /// must be finite and positive or every solve is a `DomainError`
    pub tolerance_c: f64,

    /// Give up after this many iterations
    pub max_iterations: u32,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            tolerance_c: DEFAULT_CONVERGENCE_TOLERANCE_C,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// PMV and PPD at full precision
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComfortIndices {
    /// Predicted Mean Vote
    pub pmv: f64,
    /// Predicted Percentage of Dissatisfied (%)
    pub ppd: f64,
}

impl ComfortIndices {
    /// Build indices from a PMV, deriving PPD from the closed form
    pub fn from_pmv(pmv: f64) -> Self {
        Self { pmv, ppd: ppd_from_pmv(pmv) }
    }

    /// Whether |PMV| lies in the range ISO 7730 recommends the index for
    pub fn within_iso_range(&self) -> bool {
        fabs(self.pmv) <= ISO_PMV_APPLICABILITY_LIMIT
    }
}

/// Outcome of one solve
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ComfortResult {
    /// Converged; both indices are finite
    Valid(ComfortIndices),
    /// No indices could be produced for these inputs
    Invalid(SolverError),
}

impl ComfortResult {
    /// True for the `Valid` variant
    pub fn is_valid(&self) -> bool {
        matches!(self, ComfortResult::Valid(_))
    }

    /// The indices, if valid
    pub fn indices(&self) -> Option<&ComfortIndices> {
        match self {
            ComfortResult::Valid(indices) => Some(indices),
            ComfortResult::Invalid(_) => None,
        }
    }

    /// Convert into a `Result`, for callers that prefer `?`
    pub fn into_result(self) -> Result<ComfortIndices, SolverError> {
        match self {
            ComfortResult::Valid(indices) => Ok(indices),
            ComfortResult::Invalid(reason) => Err(reason),
        }
    }
}

/// PPD from PMV: `100 - 95·exp(-0.03353·pmv⁴ - 0.2179·pmv²)`
pub fn ppd_from_pmv(pmv: f64) -> f64 {
    let pmv2 = pmv * pmv;
    100.0 - 95.0 * exp(-PPD_QUARTIC_COEFFICIENT * pmv2 * pmv2 - PPD_QUADRATIC_COEFFICIENT * pmv2)
}

/// Solve with default settings
pub fn solve(input: &EnvironmentalInput) -> ComfortResult {
    solve_with(input, &SolverSettings::default())
}

/// Solve with explicit iteration control
pub fn solve_with(input: &EnvironmentalInput, settings: &SolverSettings) -> ComfortResult {
    match pmv(input, settings) {
        Ok(pmv) => {
            let indices = ComfortIndices::from_pmv(pmv);
            if indices.ppd.is_finite() {
                ComfortResult::Valid(indices)
            } else {
                log_warn!("PPD not finite for pmv={} ({:?})", pmv, input);
                ComfortResult::Invalid(SolverError::DomainError)
            }
        }
        Err(reason) => {
            log_warn!("PMV solve failed ({}) for {:?}", reason, input);
            ComfortResult::Invalid(reason)
        }
    }
}

/// Fourth power without `powi` (not available in `core`)
#[inline]
fn pow4(x: f64) -> f64 {
    let x2 = x * x;
    x2 * x2
}

/// Reject NaN and infinities as domain errors
#[inline]
fn finite(x: f64) -> Result<f64, SolverError> {
    if x.is_finite() {
        Ok(x)
    } else {
        Err(SolverError::DomainError)
    }
}

/// Heat-balance PMV (no external work)
fn pmv(input: &EnvironmentalInput, settings: &SolverSettings) -> Result<f64, SolverError> {
    if !(settings.tolerance_c.is_finite() && settings.tolerance_c > 0.0) {
        return Err(SolverError::DomainError);
    }

    let ta = input.air_temperature;
    let tr = input.mean_radiant_temp;

    // Water vapour partial pressure (Pa)
    let pa = finite(
        input.relative_humidity * 10.0 * exp(VAPOUR_PRESSURE_A - VAPOUR_PRESSURE_B / (ta + VAPOUR_PRESSURE_C)),
    )?;

    let icl = finite(CLO_TO_M2K_PER_W * input.clo)?;
    let m = finite(input.met * MET_TO_W_PER_M2)?;
    // External work is taken as zero
    let mw = m;

    // Clothing area factor
    let fcl = if icl <= CLOTHING_AREA_BREAKPOINT_M2K_PER_W {
        1.0 + 1.29 * icl
    } else {
        1.05 + 0.645 * icl
    };

    // Forced convection coefficient
    let hcf = finite(FORCED_CONVECTION_FACTOR * sqrt(input.air_velocity))?;

    let taa = ta + KELVIN_OFFSET;
    let tra = tr + KELVIN_OFFSET;
    if taa <= 0.0 || tra <= 0.0 {
        return Err(SolverError::DomainError);
    }

    // First guess for the clothing surface temperature (K)
    let tcla = finite(taa + (SKIN_TEMPERATURE_GUESS_C - ta) / (3.5 * icl + 0.1))?;

    let p1 = icl * fcl;
    let p2 = p1 * RADIATION_FACTOR;
    let p3 = p1 * 100.0;
    let p4 = p1 * taa;
    let p5 = CLOTHING_BALANCE_BASE_C - 0.028 * mw + p2 * pow4(tra / 100.0);

    // Work on tcl/100 to keep the fourth powers small
    let tolerance = settings.tolerance_c / 100.0;
    let mut xn = tcla / 100.0;
    let mut xf = tcla / 50.0;
    let mut hc;
    let mut iterations = 0u32;

    // At least one step; a NaN difference never counts as converged
    loop {
        if iterations >= settings.max_iterations {
            return Err(SolverError::NonConvergence);
        }
        xf = (xf + xn) / 2.0;
        let hcn = NATURAL_CONVECTION_FACTOR * pow(fabs(100.0 * xf - taa), 0.25);
        hc = if hcf > hcn { hcf } else { hcn };
        xn = finite((p5 + p4 * hc - p2 * pow4(xf)) / (100.0 + p3 * hc))?;
        iterations += 1;
        if fabs(xn - xf) <= tolerance {
            break;
        }
    }

    if xn <= 0.0 {
        return Err(SolverError::DomainError);
    }
    let tcl = 100.0 * xn - KELVIN_OFFSET;

    // Heat loss by water vapour diffusion through the skin
    let hl1 = 3.05e-3 * (5733.0 - 6.99 * mw - pa);
    // Heat loss by sweating (comfort)
    let hl2 = if mw > MET_TO_W_PER_M2 { 0.42 * (mw - MET_TO_W_PER_M2) } else { 0.0 };
    // Latent respiration heat loss
    let hl3 = 1.7e-5 * m * (5867.0 - pa);
    // Dry respiration heat loss
    let hl4 = 0.0014 * m * (34.0 - ta);
    // Heat loss by radiation
    let hl5 = RADIATION_FACTOR * fcl * (pow4(xn) - pow4(tra / 100.0));
    // Heat loss by convection
    let hl6 = fcl * hc * (tcl - ta);

    // Thermal sensation transfer coefficient
    let ts = 0.303 * exp(-0.036 * m) + 0.028;

    finite(ts * (mw - hl1 - hl2 - hl3 - hl4 - hl5 - hl6))
}
