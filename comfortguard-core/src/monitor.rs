//! Comfort Monitor
//!
//! ## Overview
//!
//! The single entry point a host calls whenever it has new inputs: a button
//! press, a timer tick, a sensor message. One call runs the whole pipeline:
//!
//! ```text
//! EnvironmentalInput
//!        │
//!        ▼
//!   InputGuard ──Err(OutOfRange)──► caller
//!        │
//!        ▼
//!     solve() ──Invalid──► Evaluation { state: None }   (not recorded)
//!        │
//!        ▼ Valid
//!    classify()
//!        │
//!        ▼
//! HistoryAggregator::append ──► Evaluation { state: Some(..) }
//! ```
//!
//! The monitor owns its history. Create one per user session and pass it by
//! `&mut` to whatever drives evaluations; there is no shared global state and
//! no internal locking.
//!
//! ## Usage Example
//!
//! ```rust
//! use comfortguard_core::{ComfortMonitor, FixedTime, MonitorConfig, SimulatedInput};
//!
//! let mut monitor = ComfortMonitor::new(MonitorConfig::default());
//! let mut sensor = SimulatedInput::new(7).take_readings(5);
//! let mut clock = FixedTime::new(0);
//!
//! while let Some(outcome) = monitor.evaluate_next(&mut sensor, &clock) {
//!     let evaluation = outcome?;
//!     if let Some(state) = &evaluation.state {
//!         let _ = state.recommendations();
//!     }
//!     clock.advance(1_000);
//! }
//!
//! assert!(monitor.history().len() <= 5);
//! # Ok::<(), comfortguard_core::GuardError>(())
//! ```

use crate::classifier::{classify, ComfortState, ComfortThresholds};
use crate::constants::time::DEFAULT_HISTORY_CAPACITY;
use crate::errors::GuardResult;
use crate::guard::{BoundsProfile, GuardPolicy, InputGuard};
use crate::history::{HistoryAggregator, HistorySample};
use crate::input::EnvironmentalInput;
use crate::solver::{solve_with, ComfortResult, SolverSettings};
use crate::time::{TimeSource, Timestamp};
use crate::traits::InputSource;

/// Everything that shapes an evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonitorConfig {
    /// Comfort band used by the classifier
    pub thresholds: ComfortThresholds,
    /// What the guard does with out-of-range inputs
    pub policy: GuardPolicy,
    /// Which declared bounds the guard checks against
    pub bounds_profile: BoundsProfile,
    /// Solver iteration control
    pub solver: SolverSettings,
    /// History window length
    pub history_capacity: usize,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            thresholds: ComfortThresholds::default(),
            policy: GuardPolicy::default(),
            bounds_profile: BoundsProfile::default(),
            solver: SolverSettings::default(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl MonitorConfig {
    /// Guard built from the policy and bounds profile
    pub fn guard(&self) -> InputGuard {
        InputGuard::new(self.policy, self.bounds_profile.bounds())
    }
}

/// Outcome of one evaluation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluation {
    /// The input as it reached the solver
    pub input: EnvironmentalInput,
    /// Solver outcome
    pub result: ComfortResult,
    /// Classification; `None` exactly when `result` is invalid
    pub state: Option<ComfortState>,
}

/// Per-session evaluation pipeline with its own history
#[derive(Debug, Clone, PartialEq)]
pub struct ComfortMonitor {
    config: MonitorConfig,
    guard: InputGuard,
    history: HistoryAggregator,
}

impl Default for ComfortMonitor {
    fn default() -> Self {
        Self::new(MonitorConfig::default())
    }
}

impl ComfortMonitor {
    /// Monitor with an empty history sized from `config`
    pub fn new(config: MonitorConfig) -> Self {
        Self::with_history(config, HistoryAggregator::with_capacity(config.history_capacity))
    }

    /// Monitor continuing an existing history (restored sessions)
    ///
    /// The history keeps its own capacity; `config.history_capacity` is
    /// updated to match it.
    pub fn with_history(mut config: MonitorConfig, history: HistoryAggregator) -> Self {
        config.history_capacity = history.capacity();
        Self {
            guard: config.guard(),
            config,
            history,
        }
    }

    /// Guard, solve, classify and record one input
    ///
    /// Only `Valid` results are appended to the history. An `Invalid`
    /// result is still returned so the caller can show it.
    pub fn evaluate(&mut self, input: EnvironmentalInput, timestamp: Timestamp) -> GuardResult<Evaluation> {
        let input = self.guard.validate(input)?;
        let result = solve_with(&input, &self.config.solver);

        let state = match result {
            ComfortResult::Valid(indices) => {
                let state = classify(&indices, &self.config.thresholds);
                log_debug!(
                    "evaluated pmv={} ppd={} comfortable={} at {}",
                    indices.pmv,
                    indices.ppd,
                    state.is_comfortable(),
                    timestamp
                );
                self.history.append(HistorySample::new(timestamp, indices, state.clone()));
                Some(state)
            }
            ComfortResult::Invalid(reason) => {
                log_warn!("evaluation at {} produced invalid result: {}", timestamp, reason);
                None
            }
        };

        Ok(Evaluation { input, result, state })
    }

    /// Pull the next reading from `source` and evaluate it at `clock.now()`
    ///
    /// Returns `None` when the source has nothing to offer.
    pub fn evaluate_next<S, T>(&mut self, source: &mut S, clock: &T) -> Option<GuardResult<Evaluation>>
    where
        S: InputSource + ?Sized,
        T: TimeSource + ?Sized,
    {
        let input = source.next_input()?;
        Some(self.evaluate(input, clock.now()))
    }

    /// Recorded history
    pub fn history(&self) -> &HistoryAggregator {
        &self.history
    }

    /// Mutable history (clearing, restoring)
    pub fn history_mut(&mut self) -> &mut HistoryAggregator {
        &mut self.history
    }

    /// Active configuration
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Active comfort band
    pub fn thresholds(&self) -> &ComfortThresholds {
        &self.config.thresholds
    }

    /// Change the comfort band for subsequent evaluations
    ///
    /// Samples already recorded keep the state they were classified with.
    pub fn set_thresholds(&mut self, thresholds: ComfortThresholds) {
        self.config.thresholds = thresholds;
    }

    /// Change guard policy and bounds for subsequent evaluations
    pub fn set_guard(&mut self, policy: GuardPolicy, bounds_profile: BoundsProfile) {
        self.config.policy = policy;
        self.config.bounds_profile = bounds_profile;
        self.guard = self.config.guard();
    }

    /// Split into configuration and history
    pub fn into_parts(self) -> (MonitorConfig, HistoryAggregator) {
        (self.config, self.history)
    }
}
