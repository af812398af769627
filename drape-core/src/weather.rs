//! Point-in-time weather facts.

use thiserror::Error;

use crate::UnknownInputPolicy;

/// Coarse weather conditions reported by a weather source.
///
/// # Examples
/// ```
/// use drape_core::WeatherCondition;
///
/// assert!(WeatherCondition::Snow.is_precipitation());
/// assert!(!WeatherCondition::Mist.is_precipitation());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeatherCondition {
    /// Clear sky. Used as the fallback for unknown conditions.
    #[default]
    Clear,
    /// Overcast or partly cloudy.
    Clouds,
    /// Rain of any intensity.
    Rain,
    /// Snowfall.
    Snow,
    /// Mist, fog or haze.
    Mist,
}

/// A raw condition string matched no [`WeatherCondition`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown weather condition '{raw}'")]
pub struct UnknownConditionError {
    /// The unrecognised input.
    pub raw: String,
}

impl WeatherCondition {
    /// Return the condition name as reported by weather providers.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::Clouds => "Clouds",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
            Self::Mist => "Mist",
        }
    }

    /// Report whether the condition counts as precipitation.
    #[must_use]
    pub const fn is_precipitation(self) -> bool {
        matches!(self, Self::Rain | Self::Snow)
    }

    /// Resolve raw input, applying `policy` to unrecognised values.
    ///
    /// Unknown conditions fall back to [`WeatherCondition::Clear`].
    ///
    /// # Errors
    /// Returns [`UnknownConditionError`] when `raw` is unrecognised and
    /// `policy` is [`UnknownInputPolicy::Reject`].
    pub fn resolve(raw: &str, policy: UnknownInputPolicy) -> Result<Self, UnknownConditionError> {
        match (raw.parse::<Self>(), policy) {
            (Ok(condition), _) => Ok(condition),
            (Err(_), UnknownInputPolicy::Fallback) => Ok(Self::Clear),
            (Err(err), UnknownInputPolicy::Reject) => Err(err),
        }
    }
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for WeatherCondition {
    type Err = UnknownConditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "clear" => Ok(Self::Clear),
            "clouds" | "cloudy" => Ok(Self::Clouds),
            "rain" => Ok(Self::Rain),
            "snow" => Ok(Self::Snow),
            "mist" | "fog" | "haze" => Ok(Self::Mist),
            _ => Err(UnknownConditionError { raw: s.to_owned() }),
        }
    }
}

/// Errors returned by [`WeatherSnapshot::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum WeatherSnapshotError {
    /// Temperature was not finite or below absolute zero.
    #[error("temperature {0} K is not a valid absolute temperature")]
    InvalidTemperature(f64),
    /// Relative humidity fell outside `0..=100`.
    #[error("humidity {0} must be a percentage between 0 and 100")]
    InvalidHumidity(f64),
    /// UV index was negative or not finite.
    #[error("UV index {0} must be a finite, non-negative value")]
    InvalidUvIndex(f64),
}

/// Weather at the time of the request.
///
/// # Examples
/// ```
/// use drape_core::{WeatherCondition, WeatherSnapshot};
///
/// # fn main() -> Result<(), drape_core::WeatherSnapshotError> {
/// let weather = WeatherSnapshot::new(288.15, 60.0, WeatherCondition::Rain, 2.0)?;
/// assert!(weather.conditions.is_precipitation());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeatherSnapshot {
    /// Air temperature in Kelvin.
    pub temperature_kelvin: f64,
    /// Relative humidity as a percentage.
    pub humidity: f64,
    /// Reported conditions.
    pub conditions: WeatherCondition,
    /// UV index.
    pub uv_index: f64,
}

impl WeatherSnapshot {
    /// Validates and constructs a [`WeatherSnapshot`].
    ///
    /// # Errors
    /// Returns [`WeatherSnapshotError`] for non-finite or physically
    /// impossible readings.
    pub fn new(
        temperature_kelvin: f64,
        humidity: f64,
        conditions: WeatherCondition,
        uv_index: f64,
    ) -> Result<Self, WeatherSnapshotError> {
        if !temperature_kelvin.is_finite() || temperature_kelvin < 0.0 {
            return Err(WeatherSnapshotError::InvalidTemperature(temperature_kelvin));
        }
        if !(0.0..=100.0).contains(&humidity) {
            return Err(WeatherSnapshotError::InvalidHumidity(humidity));
        }
        if !uv_index.is_finite() || uv_index < 0.0 {
            return Err(WeatherSnapshotError::InvalidUvIndex(uv_index));
        }
        Ok(Self {
            temperature_kelvin,
            humidity,
            conditions,
            uv_index,
        })
    }
}
