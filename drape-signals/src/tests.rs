//! Unit coverage for smoothing and stress helpers.
#![forbid(unsafe_code)]

use std::num::NonZeroUsize;

use drape_core::UserBaseline;
use drape_core::test_support::samples_with_rmssd;
use rstest::rstest;

use crate::smoothing::mean;
use crate::{
    STRESS_SMOOTHING_WINDOW, StressCalculator, StressError, compute_stress_index, derive_sample,
    moving_average, rmssd,
};

fn window(width: usize) -> NonZeroUsize {
    NonZeroUsize::new(width).expect("non-zero window")
}

#[rstest]
fn moving_average_uses_valid_windows() {
    let smoothed = moving_average(&[1.0, 2.0, 3.0, 4.0, 5.0], window(3));
    assert_eq!(smoothed, vec![2.0, 3.0, 4.0]);
}

#[rstest]
#[case(&[], 1)]
#[case(&[1.0, 2.0], 3)]
fn moving_average_is_empty_when_window_does_not_fit(#[case] series: &[f64], #[case] width: usize) {
    assert!(moving_average(series, window(width)).is_empty());
}

#[rstest]
fn moving_average_with_full_window_is_the_mean() {
    let series = [2.0, 4.0, 6.0, 8.0];
    assert_eq!(moving_average(&series, window(4)), vec![5.0]);
}

#[rstest]
fn mean_of_empty_slice_is_none() {
    assert_eq!(mean(&[]), None);
}

#[rstest]
#[expect(
    clippy::float_arithmetic,
    reason = "test uses float maths for assertions"
)]
fn baseline_scenario_yields_six() {
    let samples = samples_with_rmssd(&[45.0, 46.0, 47.0, 48.0, 49.0]);
    let stress =
        compute_stress_index(&samples, UserBaseline::new(60.0, 50.0)).expect("stress index");
    assert!((stress - 6.0).abs() < 1e-9, "expected 6.0, got {stress}");
}

#[rstest]
#[case(0.0)]
#[case(-12.0)]
#[case(f64::NAN)]
#[case(f64::INFINITY)]
fn unusable_baseline_is_rejected_even_without_samples(#[case] mean_rmssd: f64) {
    let err = compute_stress_index(&[], UserBaseline::new(50.0, mean_rmssd))
        .expect_err("invalid baseline");
    assert!(matches!(err, StressError::InvalidBaseline { .. }));
}

#[rstest]
fn too_few_samples_is_insufficient_data() {
    let samples = samples_with_rmssd(&[40.0, 41.0, 42.0, 43.0]);
    let err = compute_stress_index(&samples, UserBaseline::new(60.0, 50.0))
        .expect_err("four samples cannot fill the window");
    assert_eq!(
        err,
        StressError::InsufficientData {
            required: STRESS_SMOOTHING_WINDOW.get(),
            available: 4,
        }
    );
}

#[rstest]
fn non_finite_rmssd_is_reported_with_its_position() {
    let samples = samples_with_rmssd(&[40.0, 41.0, f64::NAN, 43.0, 44.0]);
    let err = compute_stress_index(&samples, UserBaseline::new(60.0, 50.0))
        .expect_err("NaN must not propagate");
    assert_eq!(err, StressError::NonFiniteSample { index: 2 });
}

#[rstest]
#[case(80.0, 0.0)]
#[case(50.0, 0.0)]
#[case(25.0, 50.0)]
#[case(0.0, 100.0)]
#[case(-10.0, 100.0)]
fn index_is_clamped_to_percentage_range(#[case] mean_rmssd: f64, #[case] expected: f64) {
    let calculator = StressCalculator::new(UserBaseline::new(60.0, 50.0)).expect("valid baseline");
    assert_eq!(calculator.index_for_mean(mean_rmssd), Ok(expected));
}

#[rstest]
#[case(f64::NAN)]
#[case(f64::INFINITY)]
#[case(f64::NEG_INFINITY)]
fn non_finite_mean_is_an_error_not_zero_stress(#[case] mean_rmssd: f64) {
    let calculator = StressCalculator::new(UserBaseline::new(60.0, 50.0)).expect("valid baseline");
    let err = calculator
        .index_for_mean(mean_rmssd)
        .expect_err("non-finite mean must not map to an index");
    assert!(matches!(err, StressError::NonFiniteMean { .. }), "found {err:?}");
}

#[rstest]
fn rmssd_needs_two_intervals() {
    let err = rmssd(&[812.0]).expect_err("single interval");
    assert_eq!(
        err,
        StressError::InsufficientData {
            required: 2,
            available: 1,
        }
    );
}

#[rstest]
#[case(&[800.0, 0.0], 1)]
#[case(&[f64::INFINITY, 800.0], 0)]
fn rmssd_rejects_invalid_intervals(#[case] intervals: &[f64], #[case] expected_index: usize) {
    let err = rmssd(intervals).expect_err("invalid interval");
    assert!(matches!(err, StressError::InvalidInterval { index, .. } if index == expected_index));
}

#[rstest]
fn rmssd_of_constant_rhythm_is_zero() {
    assert_eq!(rmssd(&[900.0, 900.0, 900.0, 900.0]), Ok(0.0));
}

#[rstest]
#[expect(
    clippy::float_arithmetic,
    reason = "test uses float maths for assertions"
)]
fn derived_sample_reports_rate_and_variability() {
    let sample = derive_sample(&[750.0, 850.0], 7).expect("derive sample");
    assert!((sample.heart_rate - 75.0).abs() < 1e-9);
    assert!((sample.hrv - 50.0).abs() < 1e-9);
    assert!((sample.rmssd - 100.0).abs() < 1e-9);
    assert_eq!(sample.timestamp, 7);
}
