//! Map heterogeneous raw signals onto comparable scales.
//!
//! Normalisation never looks at [`FusionWeights`](crate::FusionWeights), so
//! changing the weights alters only the weighted sums built on top of these
//! values.

use drape_core::{CalendarEvent, EventKind, MoodState, WeatherSnapshot};

use crate::FusionError;

/// Formality assumed when no event is scheduled or a kind has no entry.
pub const NEUTRAL_FORMALITY: f64 = 0.5;

/// Kelvin temperature mapped to zero by [`normalise`].
pub const TEMPERATURE_ORIGIN_KELVIN: f64 = 273.0;

/// Kelvin span mapped to one unit by [`normalise`].
pub const TEMPERATURE_SPAN_KELVIN: f64 = 40.0;

/// Signals on the scales used by the fusion sums.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalisedSignals {
    /// Stress index scaled into `0.0..=1.0`.
    pub stress: f64,
    /// Temperature relative to freezing, in 40 K units. Unbounded.
    pub temperature: f64,
    /// `1.0` when it rains or snows, otherwise `0.0`.
    pub precipitation: f64,
    /// Formality of the most formal upcoming event.
    pub formality: f64,
    /// Mood scaled into `0.0..=1.0`.
    pub mood: f64,
}

/// Normalise the inputs of one fusion request.
///
/// # Errors
/// - [`FusionError::StressIndexOutOfRange`] when `stress_index` is not a
///   finite value in `0.0..=100.0`.
/// - [`FusionError::NonFiniteTemperature`] when the weather temperature is
///   NaN or infinite.
///
/// # Examples
/// ```
/// use drape_core::{MoodState, WeatherCondition, WeatherSnapshot};
/// use drape_fusion::normalise;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let weather = WeatherSnapshot::new(293.0, 40.0, WeatherCondition::Snow, 1.0)?;
/// let signals = normalise(25.0, &weather, &[], MoodState::Happy)?;
/// assert_eq!(signals.stress, 0.25);
/// assert_eq!(signals.temperature, 0.5);
/// assert_eq!(signals.precipitation, 1.0);
/// assert_eq!(signals.formality, 0.5);
/// # Ok(())
/// # }
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "normalisation rescales stress and temperature"
)]
pub fn normalise(
    stress_index: f64,
    weather: &WeatherSnapshot,
    events: &[CalendarEvent],
    mood: MoodState,
) -> Result<NormalisedSignals, FusionError> {
    if !(0.0..=100.0).contains(&stress_index) {
        return Err(FusionError::StressIndexOutOfRange {
            value: stress_index,
        });
    }
    if !weather.temperature_kelvin.is_finite() {
        return Err(FusionError::NonFiniteTemperature {
            value: weather.temperature_kelvin,
        });
    }
    Ok(NormalisedSignals {
        stress: stress_index / 100.0,
        temperature: (weather.temperature_kelvin - TEMPERATURE_ORIGIN_KELVIN)
            / TEMPERATURE_SPAN_KELVIN,
        precipitation: if weather.conditions.is_precipitation() {
            1.0
        } else {
            0.0
        },
        formality: event_formality(events),
        mood: mood_score(mood),
    })
}

/// Formality demanded by a list of upcoming events.
///
/// The single most formal event dominates. An empty list is neutral.
///
/// # Examples
/// ```
/// use drape_core::{CalendarEvent, EventKind};
/// use drape_fusion::event_formality;
///
/// assert_eq!(event_formality(&[]), 0.5);
/// let events = [
///     CalendarEvent::new("Pitch", EventKind::Business, 0),
///     CalendarEvent::new("Drinks", EventKind::Casual, 10),
/// ];
/// assert_eq!(event_formality(&events), 1.0);
/// ```
#[must_use]
pub fn event_formality(events: &[CalendarEvent]) -> f64 {
    events
        .iter()
        .map(|event| kind_formality(event.kind))
        .reduce(f64::max)
        .unwrap_or(NEUTRAL_FORMALITY)
}

/// Formality of a single event kind.
#[must_use]
pub const fn kind_formality(kind: EventKind) -> f64 {
    match kind {
        EventKind::Business => 1.0,
        EventKind::Formal => 0.9,
        EventKind::Special => 0.8,
        EventKind::Casual => 0.3,
        EventKind::Other => NEUTRAL_FORMALITY,
    }
}

/// Score a mood on the `0.0..=1.0` scale.
#[must_use]
pub const fn mood_score(mood: MoodState) -> f64 {
    match mood {
        MoodState::Sad => 0.0,
        MoodState::Neutral => 0.5,
        MoodState::Happy => 0.8,
        MoodState::Excited => 1.0,
    }
}
