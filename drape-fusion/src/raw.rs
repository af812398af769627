//! Signals as they arrive from external collaborators, before enum
//! resolution.

use drape_core::{
    CalendarEvent, MoodState, UnknownInputPolicy, WeatherCondition, WeatherSnapshot,
};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::FusionError;

/// Weather readings with the condition still a provider string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawWeather {
    /// Air temperature in Kelvin.
    pub temperature_kelvin: f64,
    /// Relative humidity as a percentage.
    pub humidity: f64,
    /// Provider condition name, e.g. `"Rain"`.
    pub conditions: String,
    /// UV index.
    pub uv_index: f64,
}

impl RawWeather {
    /// Resolve the condition and validate the readings.
    ///
    /// # Errors
    /// Returns [`FusionError::UnknownCondition`] under
    /// [`UnknownInputPolicy::Reject`] and [`FusionError::InvalidWeather`] for
    /// impossible readings.
    pub fn resolve(&self, policy: UnknownInputPolicy) -> Result<WeatherSnapshot, FusionError> {
        if policy == UnknownInputPolicy::Fallback
            && let Err(err) = self.conditions.parse::<WeatherCondition>()
        {
            warn!("{err}; treating conditions as clear");
        }
        let conditions = WeatherCondition::resolve(&self.conditions, policy)?;
        Ok(WeatherSnapshot::new(
            self.temperature_kelvin,
            self.humidity,
            conditions,
            self.uv_index,
        )?)
    }
}

/// The complete, unresolved input of one fusion request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSignals {
    /// Stress index in `0.0..=100.0`.
    pub stress_index: f64,
    /// Current weather.
    pub weather: RawWeather,
    /// Upcoming events; may be empty.
    #[serde(default)]
    pub events: Vec<CalendarEvent>,
    /// Self-reported mood as typed by the user.
    pub mood: String,
}

/// Resolve a raw mood string, logging when the fallback is used.
///
/// # Errors
/// Returns [`FusionError::UnknownMood`] under
/// [`UnknownInputPolicy::Reject`].
pub fn resolve_mood(raw: &str, policy: UnknownInputPolicy) -> Result<MoodState, FusionError> {
    if policy == UnknownInputPolicy::Fallback
        && let Err(err) = raw.parse::<MoodState>()
    {
        warn!("{err}; treating mood as neutral");
    }
    Ok(MoodState::resolve(raw, policy)?)
}
