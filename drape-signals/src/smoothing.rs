//! Sliding-window smoothing.

use std::num::NonZeroUsize;

/// Smooth `series` with a simple moving average.
///
/// Performs a "valid" convolution: the output holds one mean per window that
/// fits entirely inside the input, so its length is
/// `series.len() - window + 1`. When the window is longer than the series no
/// window fits and the result is empty; callers treat that as insufficient
/// data rather than an error.
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
/// use drape_signals::moving_average;
///
/// let window = NonZeroUsize::new(2).unwrap();
/// assert_eq!(moving_average(&[1.0, 3.0, 5.0], window), vec![2.0, 4.0]);
/// assert!(moving_average(&[1.0], window).is_empty());
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "averaging divides each window sum by its length"
)]
pub fn moving_average(series: &[f64], window: NonZeroUsize) -> Vec<f64> {
    let width = window.get();
    let divisor = len_as_f64(width);
    series
        .windows(width)
        .map(|values| values.iter().sum::<f64>() / divisor)
        .collect()
}

/// Arithmetic mean, or `None` for an empty slice.
#[expect(
    clippy::float_arithmetic,
    reason = "the mean divides the sum by the element count"
)]
pub(crate) fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / len_as_f64(values.len()))
}

#[expect(
    clippy::cast_precision_loss,
    reason = "sample counts stay far below 2^52"
)]
pub(crate) const fn len_as_f64(len: usize) -> f64 {
    len as f64
}
