//! Property-based tests for smoothing and stress calculation.
//!
//! # Invariants tested
//!
//! - **Window fit:** a window longer than the series yields no output.
//! - **Identity:** a window of one reproduces the series.
//! - **Length:** valid windows yield `len - window + 1` values.
//! - **Clamping:** stress indices always lie in `0.0..=100.0`.
//! - **Monotonicity:** stress never rises as mean RMSSD rises.

use std::num::NonZeroUsize;

use drape_core::UserBaseline;
use drape_core::test_support::samples_with_rmssd;
use drape_signals::{STRESS_INDEX_MAX, StressCalculator, moving_average};
use proptest::prelude::*;

fn series_strategy(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1_000.0_f64..1_000.0, 0..max_len)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn oversized_window_yields_nothing(series in series_strategy(16), extra in 1_usize..8) {
        let window = NonZeroUsize::new(series.len() + extra).expect("non-zero window");
        prop_assert!(moving_average(&series, window).is_empty());
    }

    #[test]
    fn unit_window_is_identity(series in series_strategy(32)) {
        prop_assert_eq!(moving_average(&series, NonZeroUsize::MIN), series);
    }

    #[test]
    fn output_length_matches_valid_windows(
        series in prop::collection::vec(0.0_f64..200.0, 1..40),
        width in 1_usize..40,
    ) {
        prop_assume!(width <= series.len());
        let window = NonZeroUsize::new(width).expect("non-zero window");
        prop_assert_eq!(moving_average(&series, window).len(), series.len() - width + 1);
    }

    #[test]
    fn stress_index_is_clamped(
        rmssd in prop::collection::vec(0.0_f64..400.0, 5..30),
        baseline in 1.0_f64..200.0,
    ) {
        let calculator = StressCalculator::new(UserBaseline::new(50.0, baseline))
            .expect("positive baseline");
        let stress = calculator
            .compute(&samples_with_rmssd(&rmssd))
            .expect("enough samples");
        prop_assert!((0.0..=STRESS_INDEX_MAX).contains(&stress));
    }

    #[test]
    fn stress_is_non_increasing_in_mean_rmssd(
        low in 0.0_f64..300.0,
        delta in 0.0_f64..300.0,
        baseline in 1.0_f64..200.0,
    ) {
        let calculator = StressCalculator::new(UserBaseline::new(50.0, baseline))
            .expect("positive baseline");
        let high = low + delta;
        let high_index = calculator.index_for_mean(high).expect("finite mean");
        let low_index = calculator.index_for_mean(low).expect("finite mean");
        prop_assert!(high_index <= low_index);
    }
}
