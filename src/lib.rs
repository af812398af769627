//! Facade crate for the Drape recommendation engine.
//!
//! This crate re-exports the core domain types, the stress and fusion stages,
//! and the default compatibility ranker behind the `ranker` feature.
//!
//! # Examples
//! ```
//! use std::num::NonZeroUsize;
//! use drape_engine::{
//!     ClothingItem, FusionWeights, MoodState, Ranker, UserBaseline, WeatherCondition,
//!     WeatherSnapshot, CompatibilityRanker, compute_stress_index, fuse,
//! };
//! use drape_engine::PhysiologicalSample;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let samples: Vec<_> = [45.0, 46.0, 47.0, 48.0, 49.0]
//!     .into_iter()
//!     .zip(0_u64..)
//!     .map(|(rmssd, ts)| PhysiologicalSample::new(72.0, 50.0, rmssd, ts))
//!     .collect();
//! let stress = compute_stress_index(&samples, UserBaseline::new(60.0, 50.0))?;
//! let weather = WeatherSnapshot::new(283.0, 80.0, WeatherCondition::Rain, 1.0)?;
//! let style = fuse(stress, &weather, &[], MoodState::Happy, FusionWeights::default())?;
//! let catalog = vec![ClothingItem::new("rain-shell", 0.5, 0.3, 0.5, "Packable shell")?];
//! let ranker: CompatibilityRanker = CompatibilityRanker::default();
//! let ranked = ranker.rank(&catalog, &style, NonZeroUsize::MIN);
//! assert_eq!(ranked.len(), 1);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub use drape_core::{
    CalendarEvent, ClothingItem, ClothingItemError, EventKind, MoodState, PhysiologicalSample,
    RankedItem, Ranker, SampleOrderError, SampleSeries, Scorer, StyleVector,
    UnknownConditionError, UnknownInputPolicy, UnknownMoodError, UserBaseline, WeatherCondition,
    WeatherSnapshot, WeatherSnapshotError,
};

pub use drape_signals::{
    STRESS_INDEX_MAX, STRESS_SMOOTHING_WINDOW, StressCalculator, StressError,
    compute_stress_index, derive_sample, moving_average, rmssd,
};

pub use drape_fusion::{
    FusionError, FusionWeights, NormalisedSignals, RawSignals, RawWeather, fuse, fuse_raw,
};

#[cfg(feature = "ranker")]
pub use drape_ranker::{CompatibilityRanker, CompatibilityScorer, CompatibilityWeights, rank};
