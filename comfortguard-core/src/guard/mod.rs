//! Units & Validity Guard
//!
//! ## Overview
//!
//! The guard sits in front of the solver and applies a configured policy to
//! raw inputs:
//!
//! - [`GuardPolicy::Reject`]: any field outside its declared bound fails with
//!   [`GuardError::OutOfRange`] naming that field.
//! - [`GuardPolicy::PassThrough`]: the input is forwarded unchanged and the
//!   solver's own numeric checks decide whether a result can be produced.
//!
//! The guard never mutates values. Clamping is a caller decision made with
//! [`EnvironmentalInput::clamped_to`] before calling the guard.
//!
//! Fields are checked in declaration order (air temperature, radiant
//! temperature, velocity, humidity, met, clo); the first violation is
//! reported. NaN is outside every range.
//!
//! ## Usage Example
//!
//! ```rust
//! use comfortguard_core::{EnvironmentalInput, GuardPolicy, InputBounds, InputGuard, InputField};
//!
//! let strict = InputGuard::new(GuardPolicy::Reject, InputBounds::iso());
//! let hot = EnvironmentalInput::new(35.0, 35.0, 0.1, 80.0, 1.2, 0.5);
//!
//! let err = strict.validate(hot).unwrap_err();
//! assert_eq!(err.field(), InputField::AirTemperature);
//!
//! // Same input under pass-through reaches the solver untouched
//! let lenient = InputGuard::new(GuardPolicy::PassThrough, InputBounds::iso());
//! assert_eq!(lenient.validate(hot), Ok(hot));
//! ```

mod bounds;
mod utils;

pub use bounds::{BoundsProfile, FieldBounds, InputBounds};

use heapless::Vec as HVec;

use crate::errors::{GuardError, GuardResult};
use crate::input::EnvironmentalInput;

/// What the guard does with out-of-range inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GuardPolicy {
    /// Fail with `OutOfRange` on the first field outside its bound
    Reject,
    /// Forward unchanged; the solver reports numeric failures
    #[default]
    PassThrough,
}

/// Policy-driven input validation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputGuard {
    policy: GuardPolicy,
    bounds: InputBounds,
}

impl InputGuard {
    /// Guard with an explicit policy and bounds
    pub fn new(policy: GuardPolicy, bounds: InputBounds) -> Self {
        Self { policy, bounds }
    }

    /// ISO bounds, rejecting anything outside them
    pub fn iso_strict() -> Self {
        Self::new(GuardPolicy::Reject, InputBounds::iso())
    }

    /// Active policy
    pub fn policy(&self) -> GuardPolicy {
        self.policy
    }

    /// Declared bounds
    pub fn bounds(&self) -> &InputBounds {
        &self.bounds
    }

    /// Apply the policy to `input`
    ///
    /// Returns the input unchanged on success.
    pub fn validate(&self, input: EnvironmentalInput) -> GuardResult<EnvironmentalInput> {
        match self.policy {
            GuardPolicy::PassThrough => Ok(input),
            GuardPolicy::Reject => {
                for (field, value) in input.fields() {
                    if let Err(err) = utils::check_field(field, value, self.bounds.get(field)) {
                        log_debug!("guard rejected {}={} under reject policy", field, value);
                        return Err(err);
                    }
                }
                Ok(input)
            }
        }
    }

    /// Every field outside its bound, regardless of policy
    ///
    /// Lets a UI flag all offending controls at once instead of only the
    /// first one `validate` stops at.
    pub fn violations(&self, input: &EnvironmentalInput) -> HVec<GuardError, 6> {
        let mut found = HVec::new();
        for (field, value) in input.fields() {
            if let Err(err) = utils::check_field(field, value, self.bounds.get(field)) {
                // Capacity equals the field count
                let _ = found.push(err);
            }
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputField;

    fn nominal() -> EnvironmentalInput {
        EnvironmentalInput::new(23.5, 25.5, 0.1, 60.0, 1.2, 0.5)
    }

    #[test]
    fn reject_accepts_in_range() {
        let guard = InputGuard::iso_strict();
        assert_eq!(guard.validate(nominal()), Ok(nominal()));
    }

    #[test]
    fn reject_reports_first_offending_field() {
        let guard = InputGuard::iso_strict();
        let mut input = nominal();
        input.relative_humidity = 95.0;
        input.clo = 3.0;

        let err = guard.validate(input).unwrap_err();
        assert_eq!(
            err,
            GuardError::OutOfRange {
                field: InputField::RelativeHumidity,
                value: 95.0,
                min: 10.0,
                max: 90.0,
            }
        );
    }

    #[test]
    fn reject_accepts_inclusive_edges() {
        let guard = InputGuard::iso_strict();
        let low = EnvironmentalInput::new(15.0, 15.0, 0.05, 10.0, 0.8, 0.3);
        let high = EnvironmentalInput::new(30.0, 30.0, 1.0, 90.0, 2.0, 1.5);
        assert!(guard.validate(low).is_ok());
        assert!(guard.validate(high).is_ok());
    }

    #[test]
    fn reject_catches_nan() {
        let guard = InputGuard::iso_strict();
        let mut input = nominal();
        input.met = f64::NAN;
        assert_eq!(guard.validate(input).unwrap_err().field(), InputField::Met);
    }

    #[test]
    fn pass_through_never_mutates() {
        let guard = InputGuard::new(GuardPolicy::PassThrough, InputBounds::iso());
        let wild = EnvironmentalInput::new(-50.0, 80.0, 5.0, 150.0, 9.0, 4.0);
        assert_eq!(guard.validate(wild), Ok(wild));
        assert_eq!(guard.violations(&wild).len(), 6);
    }

    #[test]
    fn exploratory_bounds_accept_hot_room() {
        let guard = InputGuard::new(GuardPolicy::Reject, InputBounds::exploratory());
        let hot = EnvironmentalInput::new(35.0, 35.0, 0.1, 80.0, 1.2, 0.5);
        assert!(guard.validate(hot).is_ok());
        assert!(InputGuard::iso_strict().validate(hot).is_err());
    }

    #[test]
    fn violations_lists_every_field_in_order() {
        let guard = InputGuard::iso_strict();
        let input = EnvironmentalInput::new(35.0, 25.0, 0.1, 95.0, 1.2, 0.5);
        let fields: alloc::vec::Vec<_> = guard.violations(&input).iter().map(|e| e.field()).collect();
        assert_eq!(fields, [InputField::AirTemperature, InputField::RelativeHumidity]);
    }
}
