//! Relative importance of each signal source.

use serde::{Deserialize, Serialize};

use crate::FusionError;

/// Per-source multipliers applied when fusing normalised signals.
///
/// Weights are supplied by the caller on every request; the engine reads no
/// global configuration. A zero total is permitted and produces a zero
/// vector.
///
/// # Examples
/// ```
/// use drape_fusion::FusionWeights;
///
/// let weights = FusionWeights::default();
/// assert_eq!(weights.weather, 0.4);
/// assert!(FusionWeights { mood: -1.0, ..weights }.validate().is_err());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FusionWeights {
    /// Weight of the physiological stress signal.
    pub stress: f64,
    /// Weight of the weather signal.
    pub weather: f64,
    /// Weight of the upcoming-event signal.
    pub event: f64,
    /// Weight of the self-reported mood.
    pub mood: f64,
}

impl FusionWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`FusionError::InvalidWeights`] when any weight is negative,
    /// NaN or infinite.
    pub fn validate(self) -> Result<Self, FusionError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(FusionError::InvalidWeights)
        }
    }

    const fn is_valid(self) -> bool {
        self.has_finite_values() && self.has_non_negative_values()
    }

    const fn has_finite_values(self) -> bool {
        self.stress.is_finite()
            && self.weather.is_finite()
            && self.event.is_finite()
            && self.mood.is_finite()
    }

    const fn has_non_negative_values(self) -> bool {
        self.stress >= 0.0 && self.weather >= 0.0 && self.event >= 0.0 && self.mood >= 0.0
    }
}

impl Default for FusionWeights {
    fn default() -> Self {
        Self {
            stress: 0.3,
            weather: 0.4,
            event: 0.2,
            mood: 0.1,
        }
    }
}
