//! Property-based tests for signal fusion.
//!
//! # Invariants tested
//!
//! - **Weight independence:** normalised inputs do not depend on weights.
//! - **Determinism:** identical inputs always fuse to identical vectors.
//! - **Zero weights:** all-zero weights fuse to the zero vector.
//! - **Formality bounds:** event formality lies in `0.3..=1.0`.

use drape_core::{
    CalendarEvent, EventKind, MoodState, StyleVector, WeatherCondition, WeatherSnapshot,
};
use drape_fusion::{FusionWeights, event_formality, fuse, normalise};
use proptest::prelude::*;

fn weather_strategy() -> impl Strategy<Value = WeatherSnapshot> {
    (
        200.0_f64..340.0,
        0.0_f64..=100.0,
        prop_oneof![
            Just(WeatherCondition::Clear),
            Just(WeatherCondition::Clouds),
            Just(WeatherCondition::Rain),
            Just(WeatherCondition::Snow),
            Just(WeatherCondition::Mist),
        ],
        0.0_f64..12.0,
    )
        .prop_map(|(kelvin, humidity, conditions, uv)| WeatherSnapshot {
            temperature_kelvin: kelvin,
            humidity,
            conditions,
            uv_index: uv,
        })
}

fn mood_strategy() -> impl Strategy<Value = MoodState> {
    prop_oneof![
        Just(MoodState::Sad),
        Just(MoodState::Neutral),
        Just(MoodState::Happy),
        Just(MoodState::Excited),
    ]
}

fn events_strategy() -> impl Strategy<Value = Vec<CalendarEvent>> {
    prop::collection::vec(
        prop_oneof![
            Just(EventKind::Business),
            Just(EventKind::Formal),
            Just(EventKind::Special),
            Just(EventKind::Casual),
            Just(EventKind::Other),
        ]
        .prop_map(|kind| CalendarEvent::new("event", kind, 0)),
        0..6,
    )
}

fn weights_strategy() -> impl Strategy<Value = FusionWeights> {
    (0.0_f64..2.0, 0.0_f64..2.0, 0.0_f64..2.0, 0.0_f64..2.0).prop_map(
        |(stress, weather, event, mood)| FusionWeights {
            stress,
            weather,
            event,
            mood,
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn normalisation_is_independent_of_weights(
        stress in 0.0_f64..=100.0,
        weather in weather_strategy(),
        events in events_strategy(),
        mood in mood_strategy(),
        first in weights_strategy(),
        second in weights_strategy(),
    ) {
        let before = normalise(stress, &weather, &events, mood).expect("normalise");
        fuse(stress, &weather, &events, mood, first).expect("fuse with first weights");
        fuse(stress, &weather, &events, mood, second).expect("fuse with second weights");
        let after = normalise(stress, &weather, &events, mood).expect("normalise");
        prop_assert_eq!(before, after);
    }

    #[test]
    fn fusion_is_deterministic(
        stress in 0.0_f64..=100.0,
        weather in weather_strategy(),
        events in events_strategy(),
        mood in mood_strategy(),
        weights in weights_strategy(),
    ) {
        let first = fuse(stress, &weather, &events, mood, weights).expect("fuse");
        let second = fuse(stress, &weather, &events, mood, weights).expect("fuse");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn zero_weights_fuse_to_zero_vector(
        stress in 0.0_f64..=100.0,
        weather in weather_strategy(),
        events in events_strategy(),
        mood in mood_strategy(),
    ) {
        let zero = FusionWeights { stress: 0.0, weather: 0.0, event: 0.0, mood: 0.0 };
        let style = fuse(stress, &weather, &events, mood, zero).expect("fuse");
        prop_assert_eq!(style, StyleVector::default());
    }

    #[test]
    fn event_formality_is_bounded(events in events_strategy()) {
        let formality = event_formality(&events);
        prop_assert!((0.3..=1.0).contains(&formality));
    }
}
