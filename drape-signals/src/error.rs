//! Error types raised while deriving stress metrics.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised by stress and variability calculations.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum StressError {
    /// Too few values to fill the required window or derivative.
    #[error("insufficient data: {required} values required, {available} available")]
    InsufficientData {
        /// Minimum number of values needed.
        required: usize,
        /// Number of values supplied.
        available: usize,
    },
    /// The baseline RMSSD cannot be used as a denominator.
    #[error("baseline mean RMSSD {mean_rmssd} must be finite and positive")]
    InvalidBaseline {
        /// Offending baseline value.
        mean_rmssd: f64,
    },
    /// A sample carried a NaN or infinite RMSSD.
    #[error("sample {index} has a non-finite RMSSD")]
    NonFiniteSample {
        /// Position of the sample in the input.
        index: usize,
    },
    /// A mean RMSSD handed to the index conversion was NaN or infinite.
    #[error("mean RMSSD {mean_rmssd} must be finite")]
    NonFiniteMean {
        /// Offending mean.
        mean_rmssd: f64,
    },
    /// An RR interval was non-finite or not positive.
    #[error("RR interval {index} ({value} ms) must be finite and positive")]
    InvalidInterval {
        /// Position of the interval in the input.
        index: usize,
        /// Offending interval length.
        value: f64,
    },
}
