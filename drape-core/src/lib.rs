//! Core domain types for the Drape engine.
//!
//! The crate models the per-user signals consumed by the fusion pipeline
//! (physiological samples, weather, calendar, mood), the fused
//! [`StyleVector`], and the catalog of [`ClothingItem`]s it is ranked against.
//! Constructors that can receive bad data return `Result` so invalid input is
//! surfaced at the boundary rather than deep inside the arithmetic.
//!
//! Two traits mark the seams between crates:
//! - [`Scorer`] rates a single item against a style vector.
//! - [`Ranker`] orders a whole catalog.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod baseline;
mod calendar;
mod item;
mod mood;
mod policy;
mod ranking;
mod sample;
mod scorer;
mod style;
mod weather;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(all(docsrs, not(test)), doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use baseline::UserBaseline;
pub use calendar::{CalendarEvent, EventKind};
pub use item::{ClothingItem, ClothingItemError};
pub use mood::{MoodState, UnknownMoodError};
pub use policy::UnknownInputPolicy;
pub use ranking::{RankedItem, Ranker};
pub use sample::{PhysiologicalSample, SampleOrderError, SampleSeries};
pub use scorer::Scorer;
pub use style::StyleVector;
pub use weather::{UnknownConditionError, WeatherCondition, WeatherSnapshot, WeatherSnapshotError};
