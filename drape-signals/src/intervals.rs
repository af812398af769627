//! Variability metrics computed from raw RR intervals.

use drape_core::PhysiologicalSample;

use crate::StressError;
use crate::smoothing::{len_as_f64, mean};

const MIN_INTERVALS: usize = 2;
const MS_PER_MINUTE: f64 = 60_000.0;

/// Root mean square of successive differences between RR intervals.
///
/// `rmssd = sqrt(mean((x[i] - x[i-1])^2))` for `i` in `1..n`.
///
/// # Errors
/// - [`StressError::InsufficientData`] for fewer than two intervals.
/// - [`StressError::InvalidInterval`] for a non-finite or non-positive
///   interval.
///
/// # Examples
/// ```
/// use drape_signals::rmssd;
///
/// let value = rmssd(&[800.0, 810.0, 790.0]).unwrap();
/// assert!((value - 250.0_f64.sqrt()).abs() < 1e-9);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "RMSSD squares successive differences"
)]
pub fn rmssd(intervals: &[f64]) -> Result<f64, StressError> {
    validate_intervals(intervals)?;
    let squared: Vec<f64> = intervals
        .windows(2)
        .filter_map(|pair| match pair {
            [previous, current] => Some((current - previous).powi(2)),
            _ => None,
        })
        .collect();
    let mean_square = mean(&squared).ok_or(StressError::InsufficientData {
        required: MIN_INTERVALS,
        available: intervals.len(),
    })?;
    Ok(mean_square.sqrt())
}

/// Build a [`PhysiologicalSample`] from a window of RR intervals.
///
/// Heart rate is `60000 / mean(interval)` beats per minute, HRV is the SDNN
/// (population standard deviation of the intervals) and RMSSD comes from
/// [`rmssd`]. Intervals are in milliseconds.
///
/// # Errors
/// Propagates the errors of [`rmssd`].
///
/// # Examples
/// ```
/// use drape_signals::derive_sample;
///
/// let sample = derive_sample(&[1000.0, 1000.0, 1000.0], 42).unwrap();
/// assert_eq!(sample.heart_rate, 60.0);
/// assert_eq!(sample.hrv, 0.0);
/// assert_eq!(sample.timestamp, 42);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "heart rate and SDNN are derived from interval statistics"
)]
pub fn derive_sample(intervals: &[f64], timestamp: u64) -> Result<PhysiologicalSample, StressError> {
    let successive = rmssd(intervals)?;
    let mean_interval = mean(intervals).ok_or(StressError::InsufficientData {
        required: MIN_INTERVALS,
        available: intervals.len(),
    })?;
    let variance = intervals
        .iter()
        .map(|interval| (interval - mean_interval).powi(2))
        .sum::<f64>()
        / len_as_f64(intervals.len());
    Ok(PhysiologicalSample::new(
        MS_PER_MINUTE / mean_interval,
        variance.sqrt(),
        successive,
        timestamp,
    ))
}

fn validate_intervals(intervals: &[f64]) -> Result<(), StressError> {
    if intervals.len() < MIN_INTERVALS {
        return Err(StressError::InsufficientData {
            required: MIN_INTERVALS,
            available: intervals.len(),
        });
    }
    if let Some((index, &value)) = intervals
        .iter()
        .enumerate()
        .find(|(_, value)| !value.is_finite() || **value <= 0.0)
    {
        return Err(StressError::InvalidInterval { index, value });
    }
    Ok(())
}
