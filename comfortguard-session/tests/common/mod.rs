//! Shared fixtures for session tests

#![allow(dead_code)]

use comfortguard_core::{EnvironmentalInput, FixedTime, MonitorConfig, TimeSource};
use comfortguard_session::SessionState;

/// 2024-03-01T09:30:00Z
pub const SESSION_START_MS: u64 = 1_709_285_400_000;

/// Session with `readings` evaluations two seconds apart
pub fn recorded_session(config: MonitorConfig, readings: &[EnvironmentalInput]) -> SessionState {
    let mut clock = FixedTime::new(SESSION_START_MS);
    let mut session = SessionState::start(config, &clock);
    for input in readings {
        clock.advance(2_000);
        session
            .monitor
            .evaluate(*input, clock.now())
            .expect("fixture inputs pass the guard");
    }
    session
}

/// Office readings warming up through the afternoon
pub fn warming_office() -> Vec<EnvironmentalInput> {
    [22.0, 23.0, 24.0, 25.0, 26.0, 27.0, 28.0]
        .into_iter()
        .map(|t| EnvironmentalInput::new(t, t, 0.1, 50.0, 1.2, 0.5))
        .collect()
}
