//! Catalog entries ranked by the engine.

use thiserror::Error;

/// A candidate garment from an external catalog.
///
/// Component scores share the [`StyleVector`](crate::StyleVector) axes and
/// lie in `0.0..=1.0`.
///
/// # Examples
/// ```
/// use drape_core::ClothingItem;
///
/// # fn main() -> Result<(), drape_core::ClothingItemError> {
/// let blazer = ClothingItem::new("blazer-01", 0.3, 0.9, 0.6, "Navy wool blazer")?;
/// assert_eq!(blazer.id, "blazer-01");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClothingItem {
    /// Catalog identifier.
    pub id: String,
    /// Colour intensity of the item.
    pub color_score: f64,
    /// How formal the item is.
    pub formality: f64,
    /// Weight of the fabric.
    pub fabric_weight: f64,
    /// Free-form description.
    pub description: String,
}

/// Errors returned by [`ClothingItem::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClothingItemError {
    /// The identifier was empty or whitespace.
    #[error("clothing item id must not be empty")]
    EmptyId,
    /// A component score was non-finite or outside `0.0..=1.0`.
    #[error("{field} score {value} must be between 0.0 and 1.0")]
    ScoreOutOfRange {
        /// Name of the offending component.
        field: &'static str,
        /// Value supplied.
        value: f64,
    },
}

impl ClothingItem {
    /// Validates and constructs a [`ClothingItem`].
    ///
    /// # Errors
    /// Returns [`ClothingItemError`] for an empty id or an out-of-range
    /// component score.
    pub fn new(
        id: impl Into<String>,
        color_score: f64,
        formality: f64,
        fabric_weight: f64,
        description: impl Into<String>,
    ) -> Result<Self, ClothingItemError> {
        let item = Self {
            id: id.into(),
            color_score,
            formality,
            fabric_weight,
            description: description.into(),
        };
        item.validate()?;
        Ok(item)
    }

    /// Check the invariants enforced by [`ClothingItem::new`].
    ///
    /// Useful for items that arrive through deserialisation.
    ///
    /// # Errors
    /// Returns [`ClothingItemError`] describing the first violation.
    pub fn validate(&self) -> Result<(), ClothingItemError> {
        if self.id.trim().is_empty() {
            return Err(ClothingItemError::EmptyId);
        }
        for (field, value) in [
            ("color", self.color_score),
            ("formality", self.formality),
            ("fabric weight", self.fabric_weight),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ClothingItemError::ScoreOutOfRange { field, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0)]
    #[case(1.0)]
    fn accepts_boundary_scores(#[case] score: f64) {
        assert!(ClothingItem::new("tee", score, score, score, "").is_ok());
    }

    #[rstest]
    #[case(-0.1, 0.5, 0.5, "color")]
    #[case(0.5, 1.1, 0.5, "formality")]
    #[case(0.5, 0.5, f64::NAN, "fabric weight")]
    fn rejects_out_of_range_scores(
        #[case] color: f64,
        #[case] formality: f64,
        #[case] fabric: f64,
        #[case] expected_field: &str,
    ) {
        let err = ClothingItem::new("tee", color, formality, fabric, "")
            .expect_err("out of range score");
        match err {
            ClothingItemError::ScoreOutOfRange { field, .. } => assert_eq!(field, expected_field),
            ClothingItemError::EmptyId => panic!("unexpected empty id error"),
        }
    }

    #[rstest]
    fn rejects_blank_id() {
        let err = ClothingItem::new("  ", 0.5, 0.5, 0.5, "").expect_err("blank id");
        assert_eq!(err, ClothingItemError::EmptyId);
    }
}
