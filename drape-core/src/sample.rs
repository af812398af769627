//! Physiological samples and the append-only series that holds them.

use thiserror::Error;

/// A single reading from a biometric source.
///
/// Timestamps are opaque Unix-epoch seconds; the core never interprets them
/// beyond checking ordering inside a [`SampleSeries`].
///
/// # Examples
/// ```
/// use drape_core::PhysiologicalSample;
///
/// let sample = PhysiologicalSample::new(72.0, 48.0, 41.5, 1_700_000_000);
/// assert_eq!(sample.rmssd, 41.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhysiologicalSample {
    /// Beats per minute.
    pub heart_rate: f64,
    /// Heart-rate variability (SDNN, milliseconds).
    pub hrv: f64,
    /// Root mean square of successive RR differences, milliseconds.
    pub rmssd: f64,
    /// Capture time in Unix-epoch seconds.
    pub timestamp: u64,
}

impl PhysiologicalSample {
    /// Construct a sample from its raw fields.
    #[must_use]
    pub const fn new(heart_rate: f64, hrv: f64, rmssd: f64, timestamp: u64) -> Self {
        Self {
            heart_rate,
            hrv,
            rmssd,
            timestamp,
        }
    }
}

/// Errors returned when a sample would break time ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SampleOrderError {
    /// The sample predates the most recent entry in the series.
    #[error("sample at {offending} precedes the previous sample at {previous}")]
    OutOfOrder {
        /// Timestamp of the last accepted sample.
        previous: u64,
        /// Timestamp of the rejected sample.
        offending: u64,
    },
}

/// An append-only, time-ordered sequence of samples for one session.
///
/// Samples sharing a timestamp are accepted; earlier timestamps are not.
///
/// # Examples
/// ```
/// use drape_core::{PhysiologicalSample, SampleSeries};
///
/// # fn main() -> Result<(), drape_core::SampleOrderError> {
/// let mut series = SampleSeries::new();
/// series.push(PhysiologicalSample::new(70.0, 50.0, 45.0, 10))?;
/// series.push(PhysiologicalSample::new(71.0, 49.0, 44.0, 20))?;
/// assert_eq!(series.len(), 2);
/// assert!(series.push(PhysiologicalSample::new(71.0, 49.0, 44.0, 5)).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SampleSeries {
    samples: Vec<PhysiologicalSample>,
}

impl SampleSeries {
    /// Construct an empty series.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            samples: Vec::new(),
        }
    }

    /// Build a series from an existing sequence, validating its ordering.
    ///
    /// # Errors
    /// Returns [`SampleOrderError::OutOfOrder`] for the first sample that
    /// precedes its predecessor.
    pub fn from_samples<I>(samples: I) -> Result<Self, SampleOrderError>
    where
        I: IntoIterator<Item = PhysiologicalSample>,
    {
        let mut series = Self::new();
        for sample in samples {
            series.push(sample)?;
        }
        Ok(series)
    }

    /// Append a sample to the end of the series.
    ///
    /// # Errors
    /// Returns [`SampleOrderError::OutOfOrder`] when `sample` is older than
    /// the last accepted sample. The series is left unchanged.
    pub fn push(&mut self, sample: PhysiologicalSample) -> Result<(), SampleOrderError> {
        if let Some(last) = self.samples.last()
            && sample.timestamp < last.timestamp
        {
            return Err(SampleOrderError::OutOfOrder {
                previous: last.timestamp,
                offending: sample.timestamp,
            });
        }
        self.samples.push(sample);
        Ok(())
    }

    /// Borrow the samples in capture order.
    #[must_use]
    pub fn as_slice(&self) -> &[PhysiologicalSample] {
        &self.samples
    }

    /// Number of samples recorded.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.samples.len()
    }

    /// Report whether the series holds no samples.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Consume the series and return the underlying samples.
    #[must_use]
    pub fn into_inner(self) -> Vec<PhysiologicalSample> {
        self.samples
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SampleSeries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let samples = Vec::<PhysiologicalSample>::deserialize(deserializer)?;
        Self::from_samples(samples).map_err(serde::de::Error::custom)
    }
}
