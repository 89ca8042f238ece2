//! Presentation formatting
//!
//! The solver keeps full precision; rounding happens here, at the boundary
//! to whatever renders the numbers. PMV is shown with two decimals, PPD with
//! one, and an invalid result shows as `"Invalid input"` in both slots.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::classifier::ComfortState;
use crate::solver::ComfortResult;

/// Text shown in place of the indices when the solver gave up
pub const INVALID_INPUT: &str = "Invalid input";

/// Bullet prefix for recommendation lines
pub const RECOMMENDATION_BULLET: &str = "• ";

/// PMV rounded to two decimals
pub fn format_pmv(pmv: f64) -> String {
    format!("{:.2}", pmv)
}

/// PPD rounded to one decimal
pub fn format_ppd(ppd: f64) -> String {
    format!("{:.1}", ppd)
}

/// `(pmv, ppd)` display strings for a solver result
pub fn format_result(result: &ComfortResult) -> (String, String) {
    match result.indices() {
        Some(indices) => (format_pmv(indices.pmv), format_ppd(indices.ppd)),
        None => (String::from(INVALID_INPUT), String::from(INVALID_INPUT)),
    }
}

/// Bulleted recommendation sentences, empty when comfortable
pub fn recommendation_lines(state: &ComfortState) -> Vec<String> {
    state
        .recommendations()
        .iter()
        .map(|rec| format!("{}{}", RECOMMENDATION_BULLET, rec.message()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{classify, ComfortThresholds};
    use crate::errors::SolverError;
    use crate::solver::ComfortIndices;

    #[test]
    fn rounds_to_display_precision() {
        assert_eq!(format_pmv(-0.7531), "-0.75");
        assert_eq!(format_ppd(16.94), "16.9");
        assert_eq!(format_pmv(0.0), "0.00");
    }

    #[test]
    fn invalid_result_shows_placeholder() {
        let (pmv, ppd) = format_result(&ComfortResult::Invalid(SolverError::DomainError));
        assert_eq!(pmv, "Invalid input");
        assert_eq!(ppd, "Invalid input");
    }

    #[test]
    fn valid_result_formats_both() {
        let (pmv, ppd) = format_result(&ComfortResult::Valid(ComfortIndices { pmv: 0.7639, ppd: 17.29 }));
        assert_eq!((pmv.as_str(), ppd.as_str()), ("0.76", "17.3"));
    }

    #[test]
    fn recommendation_lines_are_bulleted() {
        let state = classify(&ComfortIndices { pmv: 1.0, ppd: 26.0 }, &ComfortThresholds::default());
        assert_eq!(
            recommendation_lines(&state),
            [
                "• Decrease air temperature or clothing insulation",
                "• Increase air speed",
                "• Adjust humidity levels if possible",
            ]
        );
        assert!(recommendation_lines(&ComfortState::Comfortable).is_empty());
    }
}
