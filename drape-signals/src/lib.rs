//! Physiological signal processing for the Drape engine.
//!
//! The crate turns raw biometric readings into the single stress score the
//! fusion stage consumes:
//! - [`moving_average`] denoises a series with a "valid" sliding window.
//! - [`StressCalculator`] smooths per-sample RMSSD and expresses its mean as
//!   a `0.0..=100.0` deviation below the user's personal baseline.
//! - [`rmssd`] and [`derive_sample`] compute variability metrics from raw
//!   RR intervals when a source only provides beat timings.
//!
//! Every function is pure. Missing data and unusable baselines are reported
//! as [`StressError`] values rather than NaN.
//!
//! # Examples
//!
//! ```
//! use drape_core::{PhysiologicalSample, UserBaseline};
//! use drape_signals::compute_stress_index;
//!
//! # fn main() -> Result<(), drape_signals::StressError> {
//! let samples: Vec<_> = [45.0, 46.0, 47.0, 48.0, 49.0]
//!     .into_iter()
//!     .zip(0_u64..)
//!     .map(|(rmssd, t)| PhysiologicalSample::new(70.0, 50.0, rmssd, t))
//!     .collect();
//! let stress = compute_stress_index(&samples, UserBaseline::new(55.0, 50.0))?;
//! assert!((stress - 6.0).abs() < 1e-9);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod intervals;
mod smoothing;
mod stress;

pub use error::StressError;
pub use intervals::{derive_sample, rmssd};
pub use smoothing::moving_average;
pub use stress::{
    STRESS_INDEX_MAX, STRESS_SMOOTHING_WINDOW, StressCalculator, compute_stress_index,
};

#[cfg(test)]
mod tests;
