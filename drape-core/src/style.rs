//! The fused, three-dimensional style target.

/// Output of signal fusion: the style a user is likely to want right now.
///
/// Components are weighted sums and are **not** guaranteed to lie in
/// `0.0..=1.0`; for instance a hot day pushes `fabric_weight` past one. Use
/// [`StyleVector::clamped`] when a bounded target is required.
///
/// # Examples
/// ```
/// use drape_core::StyleVector;
///
/// let raw = StyleVector::new(0.4, 1.3, -0.2);
/// assert_eq!(raw.clamped(), StyleVector::new(0.4, 1.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleVector {
    /// Affinity for bright, saturated colours.
    pub color_palette: f64,
    /// Expected formality of the outfit.
    pub formality_level: f64,
    /// Preferred fabric weight; higher means heavier.
    pub fabric_weight: f64,
}

impl StyleVector {
    /// Construct a vector from its components.
    #[must_use]
    pub const fn new(color_palette: f64, formality_level: f64, fabric_weight: f64) -> Self {
        Self {
            color_palette,
            formality_level,
            fabric_weight,
        }
    }

    /// Return a copy with every component clamped into `0.0..=1.0`.
    #[must_use]
    pub const fn clamped(self) -> Self {
        Self {
            color_palette: self.color_palette.clamp(0.0, 1.0),
            formality_level: self.formality_level.clamp(0.0, 1.0),
            fabric_weight: self.fabric_weight.clamp(0.0, 1.0),
        }
    }

    /// Report whether every component is finite.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.color_palette.is_finite()
            && self.formality_level.is_finite()
            && self.fabric_weight.is_finite()
    }
}
