//! The portable session document
//!
//! ## Layout
//!
//! A flat JSON object. History is stored column-wise so spreadsheet tools and
//! the dashboard charts can read it directly:
//!
//! ```json
//! {
//!   "pmv_history": [0.08, 0.38],
//!   "ppd_history": [5.14, 8.05],
//!   "timestamp_history": ["2024-03-01T09:30:00.000Z", "2024-03-01T09:30:02.000Z"],
//!   "comfort_history": [{"state": "comfortable"}, {"state": "comfortable"}],
//!   "notes": "North wing, blinds down",
//!   "session_start": "2024-03-01T09:29:58.000Z",
//!   "history_capacity": 30,
//!   "comfort_pmv_min": -0.5,
//!   "comfort_pmv_max": 0.5,
//!   "comfort_ppd_max": 10.0,
//!   "guard_policy": "pass_through",
//!   "bounds_profile": "iso",
//!   "air_temperature": 25.0,
//!   "feedback_counts": {"Too Cold": 0, "Comfortable": 3, "Too Hot": 1},
//!   "dashboard_title": "Thermal Comfort Dashboard"
//! }
//! ```
//!
//! Every field is optional on load and takes its default when absent. Keys
//! the engine does not know (display customisation such as titles and tag
//! colours) are kept in [`SessionRecord::extra`] and written back unchanged.

use std::collections::BTreeMap;

use comfortguard_core::constants::comfort::{
    DEFAULT_AIR_TEMP_C, DEFAULT_CLO, DEFAULT_HUMIDITY_PCT, DEFAULT_MET, DEFAULT_VELOCITY_M_PER_S,
};
use comfortguard_core::constants::{
    DEFAULT_CONVERGENCE_TOLERANCE_C, DEFAULT_HISTORY_CAPACITY, DEFAULT_MAX_ITERATIONS, DEFAULT_PMV_MAX,
    DEFAULT_PMV_MIN, DEFAULT_PPD_MAX,
};
use comfortguard_core::{BoundsProfile, ComfortState, GuardPolicy};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{SessionError, SessionResult};

/// Keys with a fixed meaning; anything else is carried opaquely
pub const RESERVED_KEYS: [&str; 21] = [
    "pmv_history",
    "ppd_history",
    "timestamp_history",
    "comfort_history",
    "notes",
    "session_start",
    "history_capacity",
    "comfort_pmv_min",
    "comfort_pmv_max",
    "comfort_ppd_max",
    "guard_policy",
    "bounds_profile",
    "solver_tolerance_c",
    "solver_max_iterations",
    "air_temperature",
    "mean_radiant_temp",
    "air_velocity",
    "relative_humidity",
    "met",
    "clo",
    "feedback_counts",
];

/// Serialized session snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionRecord {
    /// PMV per sample, oldest first
    pub pmv_history: Vec<f64>,
    /// PPD per sample (%), index-aligned with `pmv_history`
    pub ppd_history: Vec<f64>,
    /// Sample times as RFC 3339 strings, index-aligned with `pmv_history`
    pub timestamp_history: Vec<String>,
    /// Comfort state per sample; re-derived from the thresholds when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comfort_history: Option<Vec<ComfortState>>,

    /// Free-form session notes
    pub notes: String,
    /// When the session started
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_start: Option<String>,

    /// History window length
    pub history_capacity: usize,
    /// Lower PMV bound of the comfort band
    pub comfort_pmv_min: f64,
    /// Upper PMV bound of the comfort band
    pub comfort_pmv_max: f64,
    /// Highest acceptable PPD (%)
    pub comfort_ppd_max: f64,
    /// Guard policy
    pub guard_policy: GuardPolicy,
    /// Guard bounds preset
    pub bounds_profile: BoundsProfile,
    /// Solver convergence tolerance (°C)
    pub solver_tolerance_c: f64,
    /// Solver iteration cap
    pub solver_max_iterations: u32,

    /// Default air temperature (°C)
    pub air_temperature: f64,
    /// Default mean radiant temperature (°C)
    pub mean_radiant_temp: f64,
    /// Default air velocity (m/s)
    pub air_velocity: f64,
    /// Default relative humidity (%)
    pub relative_humidity: f64,
    /// Default metabolic rate (met)
    pub met: f64,
    /// Default clothing insulation (clo)
    pub clo: f64,

    /// Occupant votes keyed by label ("Too Cold", "Comfortable", "Too Hot")
    pub feedback_counts: BTreeMap<String, u32>,

    /// Display settings and any other keys, preserved as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for SessionRecord {
    fn default() -> Self {
        Self {
            pmv_history: Vec::new(),
            ppd_history: Vec::new(),
            timestamp_history: Vec::new(),
            comfort_history: None,
            notes: String::new(),
            session_start: None,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            comfort_pmv_min: DEFAULT_PMV_MIN,
            comfort_pmv_max: DEFAULT_PMV_MAX,
            comfort_ppd_max: DEFAULT_PPD_MAX,
            guard_policy: GuardPolicy::default(),
            bounds_profile: BoundsProfile::default(),
            solver_tolerance_c: DEFAULT_CONVERGENCE_TOLERANCE_C,
            solver_max_iterations: DEFAULT_MAX_ITERATIONS,
            air_temperature: DEFAULT_AIR_TEMP_C,
            mean_radiant_temp: DEFAULT_AIR_TEMP_C,
            air_velocity: DEFAULT_VELOCITY_M_PER_S,
            relative_humidity: DEFAULT_HUMIDITY_PCT,
            met: DEFAULT_MET,
            clo: DEFAULT_CLO,
            feedback_counts: BTreeMap::new(),
            extra: Map::new(),
        }
    }
}

impl SessionRecord {
    /// Parse a JSON document
    ///
    /// Shape errors (a list where a number belongs, a non-object document)
    /// fail here; cross-field checks happen when the record is turned into
    /// a session.
    pub fn from_json(json: &str) -> SessionResult<Self> {
        serde_json::from_str(json).map_err(|e| SessionError::malformed(e.to_string()))
    }

    /// Pretty-printed JSON document
    pub fn to_json(&self) -> SessionResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| SessionError::malformed(e.to_string()))
    }

    /// Number of history samples, if the three history lists agree
    pub fn sample_count(&self) -> SessionResult<usize> {
        let count = self.pmv_history.len();
        if self.ppd_history.len() != count {
            return Err(SessionError::malformed(format!(
                "pmv_history has {} entries, ppd_history has {}",
                count,
                self.ppd_history.len()
            )));
        }
        if self.timestamp_history.len() != count {
            return Err(SessionError::malformed(format!(
                "pmv_history has {} entries, timestamp_history has {}",
                count,
                self.timestamp_history.len()
            )));
        }
        if let Some(states) = &self.comfort_history {
            if states.len() != count {
                return Err(SessionError::malformed(format!(
                    "pmv_history has {} entries, comfort_history has {}",
                    count,
                    states.len()
                )));
            }
        }
        Ok(count)
    }
}
