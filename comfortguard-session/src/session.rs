//! In-memory session state and its conversion to and from records
//!
//! A [`SessionState`] is everything one dashboard session owns: the monitor
//! (configuration plus history window), the default inputs shown on the
//! controls, notes, occupant feedback and display settings.
//!
//! [`serialize`] and [`deserialize`] are exact inverses for valid states:
//! history samples, their comfort states, configuration, notes and display
//! keys all survive a round trip unchanged.

use comfortguard_core::constants::MAX_HISTORY_CAPACITY;
use comfortguard_core::time::format_elapsed;
use comfortguard_core::{
    classify, ComfortIndices, ComfortMonitor, ComfortState, ComfortThresholds, EnvironmentalInput,
    FeedbackTally, FeedbackVote, HistoryAggregator, HistorySample, MonitorConfig, SolverSettings,
    TimeSource, Timestamp,
};
use serde_json::{Map, Value};

use crate::errors::{SessionError, SessionResult};
use crate::record::{SessionRecord, RESERVED_KEYS};
use crate::timefmt::{format_timestamp, parse_timestamp};

/// One user session
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    /// Evaluation pipeline and history window
    pub monitor: ComfortMonitor,
    /// Values the input controls start from
    pub defaults: EnvironmentalInput,
    /// Free-form notes
    pub notes: String,
    /// Occupant votes
    pub feedback: FeedbackTally,
    /// When the session started (ms since Unix epoch)
    pub started_at: Option<Timestamp>,
    /// Display customisation, carried without interpretation
    pub display: Map<String, Value>,
}

impl SessionState {
    /// Fresh session started at `clock.now()`
    pub fn start<T: TimeSource + ?Sized>(config: MonitorConfig, clock: &T) -> Self {
        Self {
            monitor: ComfortMonitor::new(config),
            started_at: Some(clock.now()),
            ..Self::default()
        }
    }

    /// Elapsed session time as `H:MM:SS`, `None` if the start is unknown
    pub fn duration(&self, now: Timestamp) -> Option<String> {
        self.started_at.map(|start| format_elapsed(start, now))
    }

    /// JSON document for this state
    pub fn to_json(&self) -> SessionResult<String> {
        serialize(self)?.to_json()
    }

    /// Parse a JSON document into a new state
    pub fn from_json(json: &str) -> SessionResult<Self> {
        deserialize(SessionRecord::from_json(json)?)
    }

    /// Replace this state with the one in `json`
    ///
    /// Total overwrite on success; on failure `self` is left as it was.
    pub fn restore_json(&mut self, json: &str) -> SessionResult<()> {
        let restored = Self::from_json(json)?;
        *self = restored;
        Ok(())
    }
}

/// Snapshot a session as a record
pub fn serialize(state: &SessionState) -> SessionResult<SessionRecord> {
    let config = state.monitor.config();
    let history = state.monitor.history();

    let mut record = SessionRecord {
        pmv_history: Vec::with_capacity(history.len()),
        ppd_history: Vec::with_capacity(history.len()),
        timestamp_history: Vec::with_capacity(history.len()),
        notes: state.notes.clone(),
        session_start: state.started_at.map(format_timestamp).transpose()?,
        history_capacity: history.capacity(),
        comfort_pmv_min: config.thresholds.pmv_min,
        comfort_pmv_max: config.thresholds.pmv_max,
        comfort_ppd_max: config.thresholds.ppd_max,
        guard_policy: config.policy,
        bounds_profile: config.bounds_profile,
        solver_tolerance_c: config.solver.tolerance_c,
        solver_max_iterations: config.solver.max_iterations,
        air_temperature: state.defaults.air_temperature,
        mean_radiant_temp: state.defaults.mean_radiant_temp,
        air_velocity: state.defaults.air_velocity,
        relative_humidity: state.defaults.relative_humidity,
        met: state.defaults.met,
        clo: state.defaults.clo,
        feedback_counts: state
            .feedback
            .counts()
            .into_iter()
            .map(|(vote, count)| (vote.label().to_string(), count))
            .collect(),
        ..SessionRecord::default()
    };

    let mut states = Vec::with_capacity(history.len());
    for sample in history.window() {
        record.pmv_history.push(sample.pmv);
        record.ppd_history.push(sample.ppd);
        record.timestamp_history.push(format_timestamp(sample.timestamp)?);
        states.push(sample.state.clone());
    }
    record.comfort_history = Some(states);

    for (key, value) in &state.display {
        if RESERVED_KEYS.contains(&key.as_str()) {
            log::warn!("display key {:?} shadows a session field, not saved", key);
            continue;
        }
        record.extra.insert(key.clone(), value.clone());
    }

    Ok(record)
}

/// Rebuild a session from a record
///
/// Fails with [`SessionError::MalformedRecord`] when the record cannot
/// describe a valid session; nothing is partially applied.
pub fn deserialize(record: SessionRecord) -> SessionResult<SessionState> {
    let count = record.sample_count()?;

    if record.history_capacity == 0 || record.history_capacity > MAX_HISTORY_CAPACITY {
        return Err(SessionError::malformed(format!(
            "history_capacity {} outside 1..={}",
            record.history_capacity, MAX_HISTORY_CAPACITY
        )));
    }

    let thresholds = ComfortThresholds {
        pmv_min: finite("comfort_pmv_min", record.comfort_pmv_min)?,
        pmv_max: finite("comfort_pmv_max", record.comfort_pmv_max)?,
        ppd_max: finite("comfort_ppd_max", record.comfort_ppd_max)?,
    };
    if thresholds.pmv_min > thresholds.pmv_max {
        return Err(SessionError::malformed(format!(
            "comfort_pmv_min {} exceeds comfort_pmv_max {}",
            thresholds.pmv_min, thresholds.pmv_max
        )));
    }

    let tolerance_c = finite("solver_tolerance_c", record.solver_tolerance_c)?;
    if tolerance_c <= 0.0 {
        return Err(SessionError::malformed("solver_tolerance_c must be positive"));
    }

    let config = MonitorConfig {
        thresholds,
        policy: record.guard_policy,
        bounds_profile: record.bounds_profile,
        solver: SolverSettings {
            tolerance_c,
            max_iterations: record.solver_max_iterations,
        },
        history_capacity: record.history_capacity,
    };

    let defaults = EnvironmentalInput {
        air_temperature: finite("air_temperature", record.air_temperature)?,
        mean_radiant_temp: finite("mean_radiant_temp", record.mean_radiant_temp)?,
        air_velocity: finite("air_velocity", record.air_velocity)?,
        relative_humidity: finite("relative_humidity", record.relative_humidity)?,
        met: finite("met", record.met)?,
        clo: finite("clo", record.clo)?,
    };

    let mut history = HistoryAggregator::with_capacity(record.history_capacity);
    let mut stored_states = record.comfort_history.map(Vec::into_iter);
    for i in 0..count {
        let pmv = finite_at("pmv_history", i, record.pmv_history[i])?;
        let ppd = finite_at("ppd_history", i, record.ppd_history[i])?;
        let timestamp = parse_timestamp(&record.timestamp_history[i]).ok_or_else(|| {
            SessionError::malformed(format!(
                "timestamp_history[{}]: unrecognised timestamp {:?}",
                i, record.timestamp_history[i]
            ))
        })?;

        let indices = ComfortIndices { pmv, ppd };
        let state = match stored_states.as_mut().and_then(Iterator::next) {
            Some(state) => check_state(i, state)?,
            None => classify(&indices, &thresholds),
        };

        // Older samples beyond the capacity fall out here
        history.append(HistorySample::new(timestamp, indices, state));
    }

    let mut feedback = FeedbackTally::default();
    for (label, count) in &record.feedback_counts {
        let vote = FeedbackVote::from_label(label)
            .ok_or_else(|| SessionError::malformed(format!("feedback_counts: unknown vote {:?}", label)))?;
        feedback.set(vote, *count);
    }

    let started_at = match &record.session_start {
        Some(text) => Some(parse_timestamp(text).ok_or_else(|| {
            SessionError::malformed(format!("session_start: unrecognised timestamp {:?}", text))
        })?),
        None => None,
    };

    if count > history.len() {
        log::info!(
            "session record holds {} samples, kept newest {} (capacity)",
            count,
            history.len()
        );
    }

    Ok(SessionState {
        monitor: ComfortMonitor::with_history(config, history),
        defaults,
        notes: record.notes,
        feedback,
        started_at,
        display: record.extra,
    })
}

fn finite(field: &str, value: f64) -> SessionResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SessionError::malformed(format!("{} is not a finite number", field)))
    }
}

fn finite_at(field: &str, index: usize, value: f64) -> SessionResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SessionError::malformed(format!("{}[{}] is not a finite number", field, index)))
    }
}

/// Stored states must be something `classify` could have produced
fn check_state(index: usize, state: ComfortState) -> SessionResult<ComfortState> {
    use comfortguard_core::Recommendation::*;

    let ComfortState::Discomfort { recommendations } = &state else {
        return Ok(state);
    };
    let valid = matches!(
        recommendations.as_slice(),
        [IncreaseTempOrInsulation, ReduceAirSpeed]
            | [DecreaseTempOrInsulation, IncreaseAirSpeed]
            | [AdjustHumidity]
            | [IncreaseTempOrInsulation, ReduceAirSpeed, AdjustHumidity]
            | [DecreaseTempOrInsulation, IncreaseAirSpeed, AdjustHumidity]
    );
    if valid {
        Ok(state)
    } else {
        Err(SessionError::malformed(format!(
            "comfort_history[{}]: {:?} is not a possible recommendation set",
            index,
            recommendations.as_slice()
        )))
    }
}
