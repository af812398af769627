//! Upcoming schedule entries.

/// Category of a calendar event.
///
/// Parsing is total: anything unrecognised becomes [`EventKind::Other`].
/// Deserialisation goes through [`EventKind::parse`], so it ignores case and
/// surrounding whitespace too.
///
/// # Examples
/// ```
/// use drape_core::EventKind;
///
/// assert_eq!(EventKind::parse("Business"), EventKind::Business);
/// assert_eq!(EventKind::parse("yoga"), EventKind::Other);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EventKind {
    /// Work meetings and client visits.
    Business,
    /// Formal occasions.
    Formal,
    /// Celebrations and one-off occasions.
    Special,
    /// Informal plans.
    Casual,
    /// Anything else.
    #[default]
    Other,
}

impl EventKind {
    /// Return the kind as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Business => "business",
            Self::Formal => "formal",
            Self::Special => "special",
            Self::Casual => "casual",
            Self::Other => "other",
        }
    }

    /// Map a raw event type onto a kind.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "business" => Self::Business,
            "formal" => Self::Formal,
            "special" => Self::Special,
            "casual" => Self::Casual,
            _ => Self::Other,
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for EventKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// A single upcoming event.
///
/// # Examples
/// ```
/// use drape_core::{CalendarEvent, EventKind};
///
/// let event = CalendarEvent::new("Quarterly review", EventKind::Business, 1_700_003_600);
/// assert_eq!(event.kind, EventKind::Business);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalendarEvent {
    /// Human-readable title.
    pub title: String,
    /// Event category.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: EventKind,
    /// Start time in Unix-epoch seconds.
    pub start: u64,
}

impl CalendarEvent {
    /// Construct an event.
    #[must_use]
    pub fn new(title: impl Into<String>, kind: EventKind, start: u64) -> Self {
        Self {
            title: title.into(),
            kind,
            start,
        }
    }
}
