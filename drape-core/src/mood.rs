//! Self-reported mood.
//!
//! The enum is closed; raw strings are resolved through
//! [`MoodState::resolve`] so the handling of unknown input is always an
//! explicit [`UnknownInputPolicy`] decision.
//!
//! # Examples
//! ```
//! use drape_core::{MoodState, UnknownInputPolicy};
//!
//! assert_eq!(MoodState::Happy.as_str(), "happy");
//! assert_eq!(
//!     MoodState::resolve("grumpy", UnknownInputPolicy::Fallback),
//!     Ok(MoodState::Neutral)
//! );
//! ```

use thiserror::Error;

use crate::UnknownInputPolicy;

/// How the user says they feel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MoodState {
    /// Low mood.
    Sad,
    /// No strong mood either way.
    #[default]
    Neutral,
    /// Positive mood.
    Happy,
    /// High-energy positive mood.
    Excited,
}

/// A raw mood string matched no [`MoodState`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mood '{raw}'")]
pub struct UnknownMoodError {
    /// The unrecognised input.
    pub raw: String,
}

impl MoodState {
    /// Return the mood as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sad => "sad",
            Self::Neutral => "neutral",
            Self::Happy => "happy",
            Self::Excited => "excited",
        }
    }

    /// Resolve raw input, applying `policy` to unrecognised values.
    ///
    /// # Errors
    /// Returns [`UnknownMoodError`] when `raw` is unrecognised and `policy`
    /// is [`UnknownInputPolicy::Reject`].
    pub fn resolve(raw: &str, policy: UnknownInputPolicy) -> Result<Self, UnknownMoodError> {
        match (raw.parse::<Self>(), policy) {
            (Ok(mood), _) => Ok(mood),
            (Err(_), UnknownInputPolicy::Fallback) => Ok(Self::Neutral),
            (Err(err), UnknownInputPolicy::Reject) => Err(err),
        }
    }
}

impl std::fmt::Display for MoodState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MoodState {
    type Err = UnknownMoodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sad" => Ok(Self::Sad),
            "neutral" => Ok(Self::Neutral),
            "happy" => Ok(Self::Happy),
            "excited" => Ok(Self::Excited),
            _ => Err(UnknownMoodError { raw: s.to_owned() }),
        }
    }
}
