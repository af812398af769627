//! Distance-based compatibility between an item and a style target.

use drape_core::{ClothingItem, Scorer, StyleVector};
use serde::{Deserialize, Serialize};

/// Per-axis weights of the compatibility score.
///
/// # Examples
/// ```
/// use drape_ranker::CompatibilityWeights;
///
/// let weights = CompatibilityWeights::default();
/// assert_eq!((weights.color, weights.formality, weights.fabric), (0.4, 0.4, 0.2));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompatibilityWeights {
    /// Weight of colour closeness.
    pub color: f64,
    /// Weight of formality closeness.
    pub formality: f64,
    /// Weight of fabric-weight closeness.
    pub fabric: f64,
}

impl Default for CompatibilityWeights {
    fn default() -> Self {
        Self {
            color: 0.4,
            formality: 0.4,
            fabric: 0.2,
        }
    }
}

/// Deterministic scorer rating items by closeness to the style target.
///
/// `score = color·(1 − |Δcolor|) + formality·(1 − |Δformality|) +
/// fabric·(1 − |Δfabric|)`. With the default weights an exact match scores
/// `1.0`; targets outside `0.0..=1.0` can drive scores below zero.
///
/// # Examples
/// ```
/// use drape_core::{ClothingItem, Scorer, StyleVector};
/// use drape_ranker::CompatibilityScorer;
///
/// let item = ClothingItem::new("chinos", 0.8, 0.6, 0.7, "Stone chinos").unwrap();
/// let target = StyleVector::new(0.8, 0.6, 0.7);
/// assert_eq!(CompatibilityScorer::default().score(&item, &target), 1.0);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct CompatibilityScorer {
    weights: CompatibilityWeights,
}

impl CompatibilityScorer {
    /// Construct a scorer with explicit weights.
    #[must_use]
    pub const fn new(weights: CompatibilityWeights) -> Self {
        Self { weights }
    }

    /// The weights applied by this scorer.
    #[must_use]
    pub const fn weights(&self) -> CompatibilityWeights {
        self.weights
    }
}

impl Scorer for CompatibilityScorer {
    #[expect(
        clippy::float_arithmetic,
        reason = "compatibility is a weighted sum of closeness terms"
    )]
    fn score(&self, item: &ClothingItem, target: &StyleVector) -> f64 {
        self.weights.color * closeness(item.color_score, target.color_palette)
            + self.weights.formality * closeness(item.formality, target.formality_level)
            + self.weights.fabric * closeness(item.fabric_weight, target.fabric_weight)
    }
}

#[expect(clippy::float_arithmetic, reason = "closeness is one minus distance")]
const fn closeness(value: f64, target: f64) -> f64 {
    1.0 - (value - target).abs()
}
