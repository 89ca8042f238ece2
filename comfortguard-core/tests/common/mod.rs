//! Shared fixtures for the integration tests
//!
//! Reference inputs from ISO 7730:2005 Annex D (Table D.1) together with the
//! indices the analytical procedure yields for them, plus small helpers for
//! building samples and comparing floats.

#![allow(dead_code)]

use comfortguard_core::{ComfortIndices, ComfortResult, EnvironmentalInput};

/// One reference input with its expected indices
pub struct ReferenceCase {
    pub name: &'static str,
    pub input: EnvironmentalInput,
    pub pmv: f64,
    pub ppd: f64,
}

/// Tolerance on PMV against the tabulated values (table is printed to 2 dp)
pub const PMV_TOLERANCE: f64 = 0.01;

/// Tolerance on PPD against the tabulated values (table is printed to 1 dp)
pub const PPD_TOLERANCE: f64 = 0.1;

/// ISO 7730 Table D.1 rows plus neighbouring office conditions
pub fn reference_cases() -> Vec<ReferenceCase> {
    vec![
        ReferenceCase {
            name: "table_d1_row1_cool",
            input: EnvironmentalInput::new(22.0, 22.0, 0.1, 60.0, 1.2, 0.5),
            pmv: -0.75,
            ppd: 16.9,
        },
        ReferenceCase {
            name: "table_d1_row2_warm",
            input: EnvironmentalInput::new(27.0, 27.0, 0.1, 60.0, 1.2, 0.5),
            pmv: 0.76,
            ppd: 17.3,
        },
        ReferenceCase {
            name: "table_d1_row4_neutral",
            input: EnvironmentalInput::new(23.5, 25.5, 0.1, 60.0, 1.2, 0.5),
            pmv: -0.01,
            ppd: 5.0,
        },
        ReferenceCase {
            name: "table_d1_row5_winter_clothing",
            input: EnvironmentalInput::new(19.0, 19.0, 0.1, 40.0, 1.2, 1.0),
            pmv: -0.60,
            ppd: 12.6,
        },
        ReferenceCase {
            name: "office_24c",
            input: EnvironmentalInput::new(24.0, 24.0, 0.1, 50.0, 1.2, 0.5),
            pmv: -0.21,
            ppd: 6.0,
        },
        ReferenceCase {
            name: "office_25c_default_point",
            input: EnvironmentalInput::new(25.0, 25.0, 0.1, 50.0, 1.2, 0.5),
            pmv: 0.08,
            ppd: 5.1,
        },
        ReferenceCase {
            name: "office_26c",
            input: EnvironmentalInput::new(26.0, 26.0, 0.1, 50.0, 1.2, 0.5),
            pmv: 0.38,
            ppd: 8.0,
        },
        ReferenceCase {
            name: "summer_27c_dry",
            input: EnvironmentalInput::new(27.0, 27.0, 0.1, 50.0, 1.2, 0.5),
            pmv: 0.68,
            ppd: 14.8,
        },
    ]
}

/// Indices of a result that must be valid
pub fn expect_valid(result: ComfortResult, context: &str) -> ComfortIndices {
    match result {
        ComfortResult::Valid(indices) => indices,
        ComfortResult::Invalid(reason) => panic!("{context}: expected valid result, got {reason}"),
    }
}

/// Assert `|actual - expected| <= tolerance` with a readable message
pub fn assert_close(actual: f64, expected: f64, tolerance: f64, context: &str) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "{context}: expected {expected} ± {tolerance}, got {actual}"
    );
}

/// Xorshift generator for reproducible test data
pub struct TestRng {
    state: u32,
}

impl TestRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }

    /// Uniform value in `[min, max)`
    pub fn range(&mut self, min: f64, max: f64) -> f64 {
        let unit = (self.next_u32() >> 8) as f64 / 16_777_216.0;
        min + unit * (max - min)
    }
}
