//! Ordered recommendations.

use std::num::NonZeroUsize;

use crate::{ClothingItem, StyleVector};

/// A catalog item paired with its compatibility score.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedItem {
    /// The recommended item.
    pub item: ClothingItem,
    /// Compatibility with the style target; higher is better.
    pub score: f64,
}

/// Order a catalog against a style target.
///
/// Implementations must return at most `k` entries, sorted by descending
/// score, with ties kept in catalog order. An empty catalog yields an empty
/// result. Rankers must be `Send + Sync` so independent requests can run on
/// separate threads.
///
/// # Examples
/// ```rust
/// use std::num::NonZeroUsize;
/// use drape_core::{ClothingItem, RankedItem, Ranker, StyleVector};
///
/// struct CatalogOrder;
///
/// impl Ranker for CatalogOrder {
///     fn rank(
///         &self,
///         catalog: &[ClothingItem],
///         _target: &StyleVector,
///         k: NonZeroUsize,
///     ) -> Vec<RankedItem> {
///         catalog
///             .iter()
///             .take(k.get())
///             .map(|item| RankedItem { item: item.clone(), score: 0.0 })
///             .collect()
///     }
/// }
///
/// let ranked = CatalogOrder.rank(&[], &StyleVector::default(), NonZeroUsize::MIN);
/// assert!(ranked.is_empty());
/// ```
pub trait Ranker: Send + Sync {
    /// Return the top `k` items for `target`.
    fn rank(
        &self,
        catalog: &[ClothingItem],
        target: &StyleVector,
        k: NonZeroUsize,
    ) -> Vec<RankedItem>;
}
