//! Stable top-k ranking over a catalog.

use std::cmp::Ordering;
use std::num::NonZeroUsize;

use drape_core::{ClothingItem, RankedItem, Ranker, Scorer, StyleVector};
use log::{debug, warn};

use crate::CompatibilityScorer;

/// Ranker that sorts a catalog by a pluggable [`Scorer`].
///
/// Sorting is stable, so items with equal scores keep their catalog order
/// and results are reproducible across runs. Non-finite scores are logged
/// and ranked last.
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
/// use drape_core::{ClothingItem, Ranker, StyleVector};
/// use drape_ranker::CompatibilityRanker;
///
/// let catalog = vec![
///     ClothingItem::new("tee", 0.9, 0.1, 0.2, "Orange tee").unwrap(),
///     ClothingItem::new("blazer", 0.3, 0.9, 0.6, "Navy blazer").unwrap(),
/// ];
/// let target = StyleVector::new(0.3, 0.9, 0.6);
/// let ranker: CompatibilityRanker = CompatibilityRanker::default();
/// let ranked = ranker.rank(&catalog, &target, NonZeroUsize::MIN);
/// assert_eq!(ranked.len(), 1);
/// assert_eq!(ranked[0].item.id, "blazer");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CompatibilityRanker<C = CompatibilityScorer>
where
    C: Scorer,
{
    scorer: C,
}

impl<C> CompatibilityRanker<C>
where
    C: Scorer,
{
    /// Construct a ranker around `scorer`.
    pub const fn new(scorer: C) -> Self {
        Self { scorer }
    }

    fn checked_score(&self, item: &ClothingItem, target: &StyleVector) -> f64 {
        let raw = self.scorer.score(item, target);
        if !raw.is_finite() {
            warn!(
                "scorer returned {raw} for item {}; ranking it last",
                item.id
            );
        }
        C::sanitise(raw)
    }
}

impl<C> Ranker for CompatibilityRanker<C>
where
    C: Scorer,
{
    fn rank(
        &self,
        catalog: &[ClothingItem],
        target: &StyleVector,
        k: NonZeroUsize,
    ) -> Vec<RankedItem> {
        let mut scored: Vec<(&ClothingItem, f64)> = catalog
            .iter()
            .map(|item| (item, self.checked_score(item, target)))
            .collect();
        // `sort_by` is stable: equal scores keep catalog order.
        scored.sort_by(|(_, left), (_, right)| {
            right.partial_cmp(left).unwrap_or(Ordering::Equal)
        });
        let ranked: Vec<RankedItem> = scored
            .into_iter()
            .take(k.get())
            .map(|(item, score)| RankedItem {
                item: item.clone(),
                score,
            })
            .collect();
        debug!(
            "ranked {} of {} catalog items (k = {k})",
            ranked.len(),
            catalog.len()
        );
        ranked
    }
}

/// Rank `catalog` against `target` with the default [`CompatibilityScorer`].
///
/// Returns `min(k, catalog.len())` entries in descending score order.
#[must_use]
pub fn rank(catalog: &[ClothingItem], target: &StyleVector, k: NonZeroUsize) -> Vec<RankedItem> {
    CompatibilityRanker::<CompatibilityScorer>::default().rank(catalog, target, k)
}
