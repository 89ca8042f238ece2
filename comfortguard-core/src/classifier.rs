//! Comfort Classifier
//!
//! Maps valid comfort indices onto a discrete state using a configurable
//! comfort band. Discomfort means any of:
//!
//! ```text
//! pmv < pmv_min  OR  pmv > pmv_max  OR  ppd > ppd_max
//! ```
//!
//! On discomfort the classifier lists corrective actions in a fixed order:
//!
//! | Condition        | Recommendations (in order)                          |
//! |------------------|-----------------------------------------------------|
//! | `pmv < pmv_min`  | `IncreaseTempOrInsulation`, `ReduceAirSpeed`        |
//! | `pmv > pmv_max`  | `DecreaseTempOrInsulation`, `IncreaseAirSpeed`      |
//! | `ppd > ppd_max`  | `AdjustHumidity` (appended after any PMV advice)    |
//!
//! The two PMV rows cannot both fire. Only [`ComfortIndices`] are accepted,
//! so an invalid solver result cannot reach the classifier by construction.

use core::fmt;

use heapless::Vec as HVec;

use crate::constants::comfort::{DEFAULT_PMV_MAX, DEFAULT_PMV_MIN, DEFAULT_PPD_MAX};
use crate::solver::ComfortIndices;

/// Most recommendations a single classification can produce
pub const MAX_RECOMMENDATIONS: usize = 3;

/// Ordered recommendation list
pub type Recommendations = HVec<Recommendation, MAX_RECOMMENDATIONS>;

/// Comfort band configuration, read-only during an evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComfortThresholds {
    /// Lower PMV bound of the comfort band
    pub pmv_min: f64,
    /// Upper PMV bound of the comfort band
    pub pmv_max: f64,
    /// Highest acceptable PPD (%)
    pub ppd_max: f64,
}

impl Default for ComfortThresholds {
    fn default() -> Self {
        Self {
            pmv_min: DEFAULT_PMV_MIN,
            pmv_max: DEFAULT_PMV_MAX,
            ppd_max: DEFAULT_PPD_MAX,
        }
    }
}

/// Corrective action codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Recommendation {
    /// Warm the space up or add clothing
    IncreaseTempOrInsulation,
    /// Cut draughts
    ReduceAirSpeed,
    /// Cool the space down or remove clothing
    DecreaseTempOrInsulation,
    /// Add air movement
    IncreaseAirSpeed,
    /// Bring humidity back into a comfortable range
    AdjustHumidity,
}

impl Recommendation {
    /// Human-readable advice for dashboards
    pub const fn message(&self) -> &'static str {
        match self {
            Recommendation::IncreaseTempOrInsulation => "Increase air temperature or clothing insulation",
            Recommendation::ReduceAirSpeed => "Reduce air speed",
            Recommendation::DecreaseTempOrInsulation => "Decrease air temperature or clothing insulation",
            Recommendation::IncreaseAirSpeed => "Increase air speed",
            Recommendation::AdjustHumidity => "Adjust humidity levels if possible",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Discrete comfort state
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "state", rename_all = "snake_case"))]
pub enum ComfortState {
    /// Inside the comfort band
    Comfortable,
    /// Outside the band, with what to do about it
    Discomfort {
        /// Ordered corrective actions (never empty)
        recommendations: Recommendations,
    },
}

impl ComfortState {
    /// True for `Comfortable`
    pub fn is_comfortable(&self) -> bool {
        matches!(self, ComfortState::Comfortable)
    }

    /// Recommendations; empty when comfortable
    pub fn recommendations(&self) -> &[Recommendation] {
        match self {
            ComfortState::Comfortable => &[],
            ComfortState::Discomfort { recommendations } => recommendations,
        }
    }
}

/// Classify indices against a comfort band
///
/// Pure: the same inputs always give the same state and the same
/// recommendation order.
pub fn classify(indices: &ComfortIndices, thresholds: &ComfortThresholds) -> ComfortState {
    let mut recommendations = Recommendations::new();

    // Pushes cannot fail: at most three codes are ever emitted
    if indices.pmv < thresholds.pmv_min {
        let _ = recommendations.push(Recommendation::IncreaseTempOrInsulation);
        let _ = recommendations.push(Recommendation::ReduceAirSpeed);
    } else if indices.pmv > thresholds.pmv_max {
        let _ = recommendations.push(Recommendation::DecreaseTempOrInsulation);
        let _ = recommendations.push(Recommendation::IncreaseAirSpeed);
    }
    if indices.ppd > thresholds.ppd_max {
        let _ = recommendations.push(Recommendation::AdjustHumidity);
    }

    if recommendations.is_empty() {
        ComfortState::Comfortable
    } else {
        ComfortState::Discomfort { recommendations }
    }
}
