//! Handling of raw inputs that fall outside a closed enumeration.

/// What to do with a raw value that names no known variant.
///
/// `Reject` surfaces a typed error; `Fallback` substitutes the variant's
/// documented default (for example [`MoodState::Neutral`](crate::MoodState)).
///
/// # Examples
/// ```
/// use drape_core::UnknownInputPolicy;
///
/// assert_eq!(UnknownInputPolicy::default(), UnknownInputPolicy::Reject);
/// assert_eq!("fallback".parse(), Ok(UnknownInputPolicy::Fallback));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum UnknownInputPolicy {
    /// Report unknown input as an error.
    #[default]
    Reject,
    /// Map unknown input to the enumeration's default variant.
    Fallback,
}

impl UnknownInputPolicy {
    /// Return the policy as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reject => "reject",
            Self::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for UnknownInputPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UnknownInputPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "fallback" => Ok(Self::Fallback),
            _ => Err(format!("unknown input policy '{s}'")),
        }
    }
}
