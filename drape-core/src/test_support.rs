//! Test-only fixtures shared by unit, behaviour and property tests.

use crate::{ClothingItem, PhysiologicalSample, Scorer, StyleVector};

/// Build one sample per RMSSD value, one second apart, starting at zero.
///
/// Heart rate and HRV are fixed; only RMSSD drives stress calculations.
#[must_use]
pub fn samples_with_rmssd(values: &[f64]) -> Vec<PhysiologicalSample> {
    values
        .iter()
        .zip(0_u64..)
        .map(|(&rmssd, timestamp)| PhysiologicalSample::new(72.0, 50.0, rmssd, timestamp))
        .collect()
}

/// Construct a catalog item from components already known to be valid.
///
/// # Panics
/// Panics when a component lies outside `0.0..=1.0`.
#[must_use]
#[expect(clippy::expect_used, reason = "fixtures should fail fast")]
pub fn item(id: &str, color_score: f64, formality: f64, fabric_weight: f64) -> ClothingItem {
    ClothingItem::new(id, color_score, formality, fabric_weight, format!("{id} fixture"))
        .expect("fixture components must be in range")
}

/// A small catalog spanning casual to formal wear.
#[must_use]
pub fn sample_catalog() -> Vec<ClothingItem> {
    vec![
        item("linen-shirt", 0.7, 0.4, 0.2),
        item("wool-suit", 0.2, 1.0, 0.8),
        item("rain-shell", 0.5, 0.3, 0.5),
        item("graphic-tee", 0.9, 0.1, 0.2),
        item("cashmere-knit", 0.4, 0.6, 0.9),
    ]
}

/// Test `Scorer` returning the same value for every item.
#[derive(Debug, Copy, Clone, Default)]
pub struct ConstantScorer(pub f64);

impl Scorer for ConstantScorer {
    fn score(&self, _item: &ClothingItem, _target: &StyleVector) -> f64 {
        self.0
    }
}

/// Test `Scorer` that prefers items with a high colour score.
#[derive(Debug, Copy, Clone, Default)]
pub struct ColorScorer;

impl Scorer for ColorScorer {
    fn score(&self, item: &ClothingItem, _target: &StyleVector) -> f64 {
        item.color_score
    }
}
