//! Personal physiological reference values.

/// A user's resting reference values.
///
/// The baseline is read-only to the pipeline. Validity (a positive, finite
/// `mean_rmssd`) is checked by the stress calculator rather than here, so a
/// zero baseline is reported as an error for every stress request that uses
/// it.
///
/// # Examples
/// ```
/// use drape_core::UserBaseline;
///
/// let baseline = UserBaseline::new(55.0, 50.0);
/// assert!(baseline.has_valid_rmssd());
/// assert!(!UserBaseline::new(55.0, 0.0).has_valid_rmssd());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserBaseline {
    /// Mean resting HRV (SDNN, milliseconds).
    pub mean_hrv: f64,
    /// Mean resting RMSSD, milliseconds.
    pub mean_rmssd: f64,
}

impl UserBaseline {
    /// Construct a baseline from its reference means.
    #[must_use]
    pub const fn new(mean_hrv: f64, mean_rmssd: f64) -> Self {
        Self {
            mean_hrv,
            mean_rmssd,
        }
    }

    /// Report whether `mean_rmssd` can be used as a denominator.
    #[must_use]
    pub const fn has_valid_rmssd(&self) -> bool {
        self.mean_rmssd.is_finite() && self.mean_rmssd > 0.0
    }
}
