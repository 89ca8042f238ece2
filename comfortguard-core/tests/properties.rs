//! Property tests for the solver, classifier and history window

mod common;

use comfortguard_core::solver::ppd_from_pmv;
use comfortguard_core::{
    classify, solve, ComfortIndices, ComfortResult, ComfortState, ComfortThresholds, EnvironmentalInput,
    HistoryAggregator, HistorySample,
};
use proptest::prelude::*;

fn iso_input() -> impl Strategy<Value = EnvironmentalInput> {
    (15.0..=30.0f64, 15.0..=30.0f64, 0.05..=1.0f64, 10.0..=90.0f64, 0.8..=2.0f64, 0.3..=1.5f64)
        .prop_map(|(tdb, tr, vr, rh, met, clo)| EnvironmentalInput::new(tdb, tr, vr, rh, met, clo))
}

fn thresholds() -> impl Strategy<Value = ComfortThresholds> {
    (-2.0..0.0f64, 0.0..2.0f64, 5.0..50.0f64)
        .prop_map(|(pmv_min, pmv_max, ppd_max)| ComfortThresholds { pmv_min, pmv_max, ppd_max })
}

proptest! {
    #[test]
    fn iso_domain_converges_with_consistent_ppd(input in iso_input()) {
        match solve(&input) {
            ComfortResult::Valid(indices) => {
                prop_assert!(indices.pmv.is_finite());
                prop_assert!((indices.ppd - ppd_from_pmv(indices.pmv)).abs() < 1e-6);
                prop_assert!((5.0 - 1e-9..=100.0).contains(&indices.ppd));
            }
            ComfortResult::Invalid(reason) => prop_assert!(false, "{:?} -> {}", input, reason),
        }
    }

    #[test]
    fn ppd_grows_with_distance_from_neutral(a in -3.0..3.0f64, b in -3.0..3.0f64) {
        let (near, far) = if a.abs() <= b.abs() { (a, b) } else { (b, a) };
        prop_assert!(ppd_from_pmv(near) <= ppd_from_pmv(far) + 1e-12);
        prop_assert!((ppd_from_pmv(a) - ppd_from_pmv(-a)).abs() < 1e-12);
    }

    #[test]
    fn warmer_air_never_lowers_pmv(input in iso_input(), delta in 0.1..3.0f64) {
        let warmer = EnvironmentalInput { air_temperature: input.air_temperature + delta, ..input };
        if let (ComfortResult::Valid(base), ComfortResult::Valid(warm)) = (solve(&input), solve(&warmer)) {
            prop_assert!(warm.pmv >= base.pmv - 1e-6, "{} -> {}", base.pmv, warm.pmv);
        }
    }

    #[test]
    fn classify_is_pure(pmv in -3.0..3.0f64, t in thresholds()) {
        let indices = ComfortIndices::from_pmv(pmv);
        let first = classify(&indices, &t);
        let second = classify(&indices, &t);
        prop_assert_eq!(&first, &second);

        let outside = pmv < t.pmv_min || pmv > t.pmv_max || indices.ppd > t.ppd_max;
        prop_assert_eq!(first.is_comfortable(), !outside);
        if let ComfortState::Discomfort { recommendations } = &first {
            prop_assert!(!recommendations.is_empty());
        }
    }

    #[test]
    fn window_is_fifo(capacity in 1usize..40, count in 0usize..100) {
        let mut history = HistoryAggregator::with_capacity(capacity);
        for ts in 0..count as u64 {
            history.append(HistorySample::new(ts, ComfortIndices::from_pmv(0.0), ComfortState::Comfortable));
        }

        let expected: Vec<u64> = (count.saturating_sub(capacity) as u64..count as u64).collect();
        let actual: Vec<u64> = history.window().map(|s| s.timestamp).collect();
        prop_assert_eq!(actual, expected);
    }
}
