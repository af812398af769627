//! Score catalog items against a fused style target.
//!
//! The `Scorer` trait assigns a compatibility score to a
//! [`ClothingItem`](crate::ClothingItem) given the
//! [`StyleVector`](crate::StyleVector) produced by signal fusion.

use crate::{ClothingItem, StyleVector};

/// Calculate how well an item matches a style target.
///
/// Higher scores indicate a better match. Scores are **not** required to be
/// bounded: style vectors may leave `0.0..=1.0`, so distance-based scores can
/// go negative. Implementations must be thread-safe (`Send` + `Sync`) and
/// deterministic, returning the same value for the same inputs on every
/// call. Learned models plug in here behind the same contract.
///
/// # Examples
///
/// ```rust
/// use drape_core::{ClothingItem, Scorer, StyleVector};
///
/// struct FormalityOnly;
///
/// impl Scorer for FormalityOnly {
///     fn score(&self, item: &ClothingItem, _target: &StyleVector) -> f64 {
///         item.formality
///     }
/// }
///
/// let item = ClothingItem::new("suit", 0.2, 0.95, 0.7, "Charcoal suit").unwrap();
/// let scorer = FormalityOnly;
/// assert_eq!(scorer.score(&item, &StyleVector::default()), 0.95);
/// ```
pub trait Scorer: Send + Sync {
    /// Return a score for `item` relative to `target`.
    fn score(&self, item: &ClothingItem, target: &StyleVector) -> f64;

    /// Replace non-finite scores so they order below every real score.
    fn sanitise(score: f64) -> f64
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return f64::NEG_INFINITY;
        }
        score
    }
}
