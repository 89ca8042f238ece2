//! Range checks shared by the guard

use crate::errors::{GuardError, GuardResult};
use crate::guard::FieldBounds;
use crate::input::InputField;

/// Check that `value` lies within `bounds` (inclusive)
///
/// NaN fails: it compares false against both limits.
pub fn check_field(field: InputField, value: f64, bounds: FieldBounds) -> GuardResult<()> {
    if bounds.contains(value) {
        Ok(())
    } else {
        Err(GuardError::OutOfRange {
            field,
            value,
            min: bounds.min,
            max: bounds.max,
        })
    }
}
