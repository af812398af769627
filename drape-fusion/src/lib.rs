//! Multi-source signal fusion for the Drape engine.
//!
//! [`fuse`] combines a stress index, a weather snapshot, upcoming calendar
//! events and the user's mood into a [`StyleVector`]. Inputs are first put on
//! comparable scales by [`normalise`]; the vector components are then
//! weighted sums:
//!
//! - `color_palette = stress·s + weather·p + mood·m`
//! - `formality_level = event·f + stress·(1 − s)`
//! - `fabric_weight = weather·t + mood·m`
//!
//! where `s`, `t`, `p`, `f` and `m` are the normalised stress, temperature,
//! precipitation, event formality and mood. The weights come from a
//! [`FusionWeights`] value passed on every call.
//!
//! The result is not clamped; see [`StyleVector::clamped`].
//!
//! # Examples
//!
//! ```
//! use drape_core::{MoodState, WeatherCondition, WeatherSnapshot};
//! use drape_fusion::{FusionWeights, fuse};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let weather = WeatherSnapshot::new(273.0, 50.0, WeatherCondition::Clear, 0.0)?;
//! let style = fuse(0.0, &weather, &[], MoodState::Excited, FusionWeights::default())?;
//! assert!((style.color_palette - 0.1).abs() < 1e-12);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use drape_core::{CalendarEvent, MoodState, StyleVector, UnknownInputPolicy, WeatherSnapshot};
use log::debug;

mod error;
mod normalise;
mod raw;
mod weights;

pub use error::FusionError;
pub use normalise::{
    NEUTRAL_FORMALITY, NormalisedSignals, TEMPERATURE_ORIGIN_KELVIN, TEMPERATURE_SPAN_KELVIN,
    event_formality, kind_formality, mood_score, normalise,
};
pub use raw::{RawSignals, RawWeather, resolve_mood};
pub use weights::FusionWeights;

/// Fuse one request's signals into a style vector.
///
/// # Errors
/// Returns [`FusionError::InvalidWeights`] for unusable weights and
/// propagates the errors of [`normalise`].
pub fn fuse(
    stress_index: f64,
    weather: &WeatherSnapshot,
    events: &[CalendarEvent],
    mood: MoodState,
    weights: FusionWeights,
) -> Result<StyleVector, FusionError> {
    let validated = weights.validate()?;
    let signals = normalise(stress_index, weather, events, mood)?;
    let style = combine(&signals, validated);
    debug!(
        "fused style vector {style:?} from {} events with mood {mood}",
        events.len()
    );
    Ok(style)
}

/// Resolve raw enum inputs under `policy`, then [`fuse`] them.
///
/// # Errors
/// Returns [`FusionError::UnknownMood`] or [`FusionError::UnknownCondition`]
/// for unrecognised input under [`UnknownInputPolicy::Reject`], plus every
/// error [`fuse`] can return.
pub fn fuse_raw(
    raw: &RawSignals,
    weights: FusionWeights,
    policy: UnknownInputPolicy,
) -> Result<StyleVector, FusionError> {
    let weather = raw.weather.resolve(policy)?;
    let mood = resolve_mood(&raw.mood, policy)?;
    fuse(raw.stress_index, &weather, &raw.events, mood, weights)
}

/// Apply the weighted sums to already-normalised signals.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "fusion is a set of weighted sums"
)]
pub fn combine(signals: &NormalisedSignals, weights: FusionWeights) -> StyleVector {
    StyleVector::new(
        weights.stress * signals.stress
            + weights.weather * signals.precipitation
            + weights.mood * signals.mood,
        weights.event * signals.formality + weights.stress * (1.0 - signals.stress),
        weights.weather * signals.temperature + weights.mood * signals.mood,
    )
}
