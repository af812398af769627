//! Outfit ranking for the Drape engine.
//!
//! This crate provides [`CompatibilityRanker`], the default implementation of
//! the [`Ranker`](drape_core::Ranker) trait, and [`CompatibilityScorer`], the
//! deterministic [`Scorer`](drape_core::Scorer) it uses unless another
//! strategy is plugged in.
//!
//! Compatibility is a weighted sum of per-axis closeness, `1 − |item − target|`,
//! so it is only bounded when the style target is. Ranking does not depend on
//! boundedness: higher is better, ties keep catalog order, and the top `k`
//! entries are returned.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod compatibility;
mod ranker;

pub use compatibility::{CompatibilityScorer, CompatibilityWeights};
pub use ranker::{CompatibilityRanker, rank};
