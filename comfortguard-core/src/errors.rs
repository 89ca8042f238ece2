//! Error Types for the Comfort Engine
//!
//! ## Error Categories
//!
//! ### Input Policy Violations
//! - `GuardError::OutOfRange`: a field lies outside its declared physical bound
//!   while the guard runs with the `Reject` policy.
//!
//! ### Model Failures
//! - `SolverError::NonConvergence`: the clothing surface temperature iteration
//!   hit its iteration cap.
//! - `SolverError::DomainError`: an intermediate quantity went non-finite or an
//!   absolute temperature dropped to zero or below.
//!
//! Solver errors are expected outcomes for implausible inputs. They are never
//! returned through `Err`: they travel inside [`ComfortResult::Invalid`] so
//! callers branch on the result variant and keep running.
//!
//! ### History Queries
//! - `AggregatorError::EmptyWindow`: statistics requested with no samples.
//!
//! ## Handling Strategy
//!
//! ```rust
//! use comfortguard_core::{ComfortResult, EnvironmentalInput, GuardError, InputGuard, GuardPolicy, InputBounds, solve};
//!
//! let guard = InputGuard::new(GuardPolicy::Reject, InputBounds::iso());
//! let input = EnvironmentalInput::new(35.0, 35.0, 0.1, 80.0, 1.2, 0.5);
//!
//! match guard.validate(input) {
//!     Ok(checked) => match solve(&checked) {
//!         ComfortResult::Valid(indices) => { let _ = indices.pmv; }
//!         ComfortResult::Invalid(reason) => { let _ = reason; } // show "Invalid input"
//!     },
//!     Err(GuardError::OutOfRange { field, .. }) => {
//!         // highlight the offending control
//!         let _ = field;
//!     }
//! }
//! ```
//!
//! [`ComfortResult::Invalid`]: crate::solver::ComfortResult::Invalid

use thiserror_no_std::Error;

use crate::input::InputField;

/// Result type for guard operations
pub type GuardResult<T> = Result<T, GuardError>;

/// Result type for history queries
pub type AggregatorResult<T> = Result<T, AggregatorError>;

/// Input rejected by the guard
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GuardError {
    /// Field outside its declared physical bound
    #[error("{field} {value} outside range [{min}, {max}]")]
    OutOfRange {
        /// Which input failed
        field: InputField,
        /// The value supplied by the caller
        value: f64,
        /// Inclusive lower bound
        min: f64,
        /// Inclusive upper bound
        max: f64,
    },
}

impl GuardError {
    /// The input field that caused the rejection
    pub fn field(&self) -> InputField {
        match self {
            Self::OutOfRange { field, .. } => *field,
        }
    }
}

/// Why the solver could not produce comfort indices
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SolverError {
    /// Surface temperature iteration did not settle within the iteration cap
    #[error("non-convergence")]
    NonConvergence,

    /// Inputs drove an intermediate quantity outside the model's numeric domain
    #[error("domain-error")]
    DomainError,
}

/// History query failures
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregatorError {
    /// The window holds no samples
    #[error("history window is empty")]
    EmptyWindow,
}

#[cfg(feature = "defmt")]
impl defmt::Format for GuardError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::OutOfRange { field, value, min, max } =>
                defmt::write!(fmt, "{} {} outside [{}, {}]", field.name(), value, min, max),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SolverError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::NonConvergence => defmt::write!(fmt, "non-convergence"),
            Self::DomainError => defmt::write!(fmt, "domain-error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn solver_error_messages_are_stable() {
        assert_eq!(SolverError::NonConvergence.to_string(), "non-convergence");
        assert_eq!(SolverError::DomainError.to_string(), "domain-error");
    }

    #[test]
    fn guard_error_names_field() {
        let err = GuardError::OutOfRange {
            field: InputField::RelativeHumidity,
            value: 95.0,
            min: 10.0,
            max: 90.0,
        };
        assert_eq!(err.field(), InputField::RelativeHumidity);
        assert_eq!(err.to_string(), "relative_humidity 95 outside range [10, 90]");
    }
}
