//! Baseline-relative stress index.
//!
//! RMSSD falls under acute stress, so the index measures how far the smoothed
//! RMSSD has dropped below the user's resting mean, as a percentage clamped
//! into `0.0..=100.0`.

use std::num::NonZeroUsize;

use drape_core::{PhysiologicalSample, UserBaseline};
use log::debug;

use crate::StressError;
use crate::smoothing::{mean, moving_average};

/// Window used to smooth per-sample RMSSD before averaging.
pub const STRESS_SMOOTHING_WINDOW: NonZeroUsize = match NonZeroUsize::new(5) {
    Some(window) => window,
    None => NonZeroUsize::MIN,
};

/// Upper bound of the stress index.
pub const STRESS_INDEX_MAX: f64 = 100.0;

/// Computes stress indices against one user's baseline.
///
/// The baseline is validated once on construction and then held immutably
/// for every calculation made through this value.
///
/// # Examples
/// ```
/// use drape_core::{PhysiologicalSample, UserBaseline};
/// use drape_signals::{StressCalculator, StressError};
///
/// let calculator = StressCalculator::new(UserBaseline::new(60.0, 40.0))?;
/// let samples: Vec<_> = (0..5)
///     .map(|t| PhysiologicalSample::new(80.0, 30.0, 20.0, t))
///     .collect();
/// assert_eq!(calculator.compute(&samples)?, 50.0);
/// assert!(matches!(
///     calculator.compute(&samples[..3]),
///     Err(StressError::InsufficientData { required: 5, available: 3 })
/// ));
/// # Ok::<(), StressError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StressCalculator {
    baseline: UserBaseline,
}

impl StressCalculator {
    /// Validate `baseline` and build a calculator around it.
    ///
    /// # Errors
    /// Returns [`StressError::InvalidBaseline`] when the baseline RMSSD is
    /// zero, negative or not finite.
    pub const fn new(baseline: UserBaseline) -> Result<Self, StressError> {
        if !baseline.has_valid_rmssd() {
            return Err(StressError::InvalidBaseline {
                mean_rmssd: baseline.mean_rmssd,
            });
        }
        Ok(Self { baseline })
    }

    /// The baseline this calculator measures against.
    #[must_use]
    pub const fn baseline(&self) -> UserBaseline {
        self.baseline
    }

    /// Compute the stress index for a session's samples.
    ///
    /// Extracts each sample's RMSSD, smooths it with
    /// [`STRESS_SMOOTHING_WINDOW`], and converts the mean of the smoothed
    /// series with [`StressCalculator::index_for_mean`].
    ///
    /// # Errors
    /// - [`StressError::NonFiniteSample`] when a sample's RMSSD is NaN or
    ///   infinite.
    /// - [`StressError::InsufficientData`] when fewer samples than the window
    ///   length are supplied.
    pub fn compute(&self, samples: &[PhysiologicalSample]) -> Result<f64, StressError> {
        let rmssd = extract_rmssd(samples)?;
        let smoothed = moving_average(&rmssd, STRESS_SMOOTHING_WINDOW);
        let smoothed_mean = mean(&smoothed).ok_or(StressError::InsufficientData {
            required: STRESS_SMOOTHING_WINDOW.get(),
            available: samples.len(),
        })?;
        let index = self.index_for_mean(smoothed_mean)?;
        debug!(
            "stress index {index:.2} from {} samples (smoothed RMSSD mean {smoothed_mean:.2}, baseline {:.2})",
            samples.len(),
            self.baseline.mean_rmssd
        );
        Ok(index)
    }

    /// Convert a mean RMSSD into a clamped stress index.
    ///
    /// The result is non-increasing in `mean_rmssd`: values at or above the
    /// baseline give `0.0`; a mean of zero gives [`STRESS_INDEX_MAX`].
    ///
    /// # Errors
    /// Returns [`StressError::NonFiniteMean`] when `mean_rmssd` is NaN or
    /// infinite.
    #[expect(
        clippy::float_arithmetic,
        reason = "the index is a percentage deviation from the baseline"
    )]
    pub fn index_for_mean(&self, mean_rmssd: f64) -> Result<f64, StressError> {
        if !mean_rmssd.is_finite() {
            return Err(StressError::NonFiniteMean { mean_rmssd });
        }
        let reference = self.baseline.mean_rmssd;
        let deviation = STRESS_INDEX_MAX * (reference - mean_rmssd) / reference;
        Ok(deviation.clamp(0.0, STRESS_INDEX_MAX))
    }
}

/// Compute a stress index for `samples` against `baseline`.
///
/// The baseline is checked before the samples, so an unusable baseline is
/// reported for any input, including an empty one.
///
/// # Errors
/// Returns [`StressError::InvalidBaseline`],
/// [`StressError::NonFiniteSample`] or [`StressError::InsufficientData`].
pub fn compute_stress_index(
    samples: &[PhysiologicalSample],
    baseline: UserBaseline,
) -> Result<f64, StressError> {
    StressCalculator::new(baseline)?.compute(samples)
}

fn extract_rmssd(samples: &[PhysiologicalSample]) -> Result<Vec<f64>, StressError> {
    samples
        .iter()
        .enumerate()
        .map(|(index, sample)| {
            if sample.rmssd.is_finite() {
                Ok(sample.rmssd)
            } else {
                Err(StressError::NonFiniteSample { index })
            }
        })
        .collect()
}
