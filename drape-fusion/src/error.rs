//! Error types raised while fusing signals.
#![forbid(unsafe_code)]

use drape_core::{UnknownConditionError, UnknownMoodError, WeatherSnapshotError};
use thiserror::Error;

/// Errors raised by [`fuse`](crate::fuse) and [`fuse_raw`](crate::fuse_raw).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FusionError {
    /// A raw mood matched no known mood and the policy rejects unknowns.
    #[error(transparent)]
    UnknownMood(#[from] UnknownMoodError),
    /// A raw weather condition matched no known condition and the policy
    /// rejects unknowns.
    #[error(transparent)]
    UnknownCondition(#[from] UnknownConditionError),
    /// Raw weather readings were physically impossible.
    #[error("invalid weather snapshot: {0}")]
    InvalidWeather(#[from] WeatherSnapshotError),
    /// The stress index was non-finite or outside `0.0..=100.0`.
    #[error("stress index {value} must lie between 0 and 100")]
    StressIndexOutOfRange {
        /// Value supplied.
        value: f64,
    },
    /// The temperature could not be normalised.
    #[error("temperature {value} K is not finite")]
    NonFiniteTemperature {
        /// Value supplied.
        value: f64,
    },
    /// Fusion weights were unusable.
    #[error("fusion weights must be finite and non-negative")]
    InvalidWeights,
}
