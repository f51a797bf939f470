//! In-memory form of `state.md`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::templates;

/// One of the five fixed sections of a state document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateSection {
    Summary,
    Checkpoints,
    Decisions,
    Implementation,
    Testing,
}

impl StateSection {
    /// All sections in the order they are written to disk.
    pub const ALL: [StateSection; 5] = [
        Self::Summary,
        Self::Checkpoints,
        Self::Decisions,
        Self::Implementation,
        Self::Testing,
    ];

    /// Key name used by callers (`summary`, `checkpoints`, ...).
    pub fn key(self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::Checkpoints => "checkpoints",
            Self::Decisions => "decisions",
            Self::Implementation => "implementation",
            Self::Testing => "testing",
        }
    }

    /// Markdown header text written after `## `.
    pub fn header(self) -> &'static str {
        match self {
            Self::Summary => "Summary",
            Self::Checkpoints => "Checkpoints",
            Self::Decisions => "Decisions",
            Self::Implementation => "Implementation",
            Self::Testing => "Testing Approach",
        }
    }

    /// Map the text of a `## ` header to a section.
    ///
    /// Matching is case-insensitive but otherwise exact, so surrounding
    /// whitespace makes it a different header. `Testing Approach` and
    /// `Testing` both map to [`StateSection::Testing`]. Any other header
    /// returns `None`.
    pub fn from_header(header: &str) -> Option<Self> {
        match header.to_lowercase().as_str() {
            "summary" => Some(Self::Summary),
            "checkpoints" => Some(Self::Checkpoints),
            "decisions" => Some(Self::Decisions),
            "implementation" => Some(Self::Implementation),
            "testing approach" | "testing" => Some(Self::Testing),
            _ => None,
        }
    }
}

impl fmt::Display for StateSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for StateSection {
    type Err = StateSectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "summary" => Ok(Self::Summary),
            "checkpoints" => Ok(Self::Checkpoints),
            "decisions" => Ok(Self::Decisions),
            "implementation" => Ok(Self::Implementation),
            "testing" => Ok(Self::Testing),
            _ => Err(StateSectionParseError(s.to_owned())),
        }
    }
}

/// Error returned when parsing an invalid [`StateSection`] name.
#[derive(Debug, Clone)]
pub struct StateSectionParseError(pub String);

impl fmt::Display for StateSectionParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid state section {:?} (expected summary, checkpoints, decisions, implementation, or testing)",
            self.0
        )
    }
}

impl std::error::Error for StateSectionParseError {}

// ---------------------------------------------------------------------------

/// The five text fields of a state document.
///
/// Field values are stored trimmed. An absent section is an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDocument {
    pub summary: String,
    pub checkpoints: String,
    pub decisions: String,
    pub implementation: String,
    pub testing: String,
}

impl StateDocument {
    /// A document whose sections all hold their placeholder sentence.
    pub fn placeholder() -> Self {
        Self {
            summary: templates::SUMMARY_PLACEHOLDER.to_owned(),
            checkpoints: templates::CHECKPOINTS_PLACEHOLDER.to_owned(),
            decisions: templates::DECISIONS_PLACEHOLDER.to_owned(),
            implementation: templates::IMPLEMENTATION_PLACEHOLDER.to_owned(),
            testing: templates::TESTING_PLACEHOLDER.to_owned(),
        }
    }

    pub fn get(&self, section: StateSection) -> &str {
        match section {
            StateSection::Summary => &self.summary,
            StateSection::Checkpoints => &self.checkpoints,
            StateSection::Decisions => &self.decisions,
            StateSection::Implementation => &self.implementation,
            StateSection::Testing => &self.testing,
        }
    }

    pub fn set(&mut self, section: StateSection, value: impl Into<String>) {
        let slot = match section {
            StateSection::Summary => &mut self.summary,
            StateSection::Checkpoints => &mut self.checkpoints,
            StateSection::Decisions => &mut self.decisions,
            StateSection::Implementation => &mut self.implementation,
            StateSection::Testing => &mut self.testing,
        };
        *slot = value.into();
    }

    /// Overwrite every section that `partial` carries a value for.
    pub fn merge(&mut self, partial: &PartialState) {
        for section in StateSection::ALL {
            if let Some(value) = partial.get(section) {
                self.set(section, value);
            }
        }
    }

    /// Keep only the requested sections.
    pub fn select(&self, sections: &[StateSection]) -> PartialState {
        let mut partial = PartialState::default();
        for &section in sections {
            partial.set(section, self.get(section));
        }
        partial
    }
}

// ---------------------------------------------------------------------------

/// A subset of state sections.
///
/// Used as the update set for [`save_state`](super::save_state) and as the
/// result of a section-filtered load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkpoints: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decisions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implementation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub testing: Option<String>,
}

impl PartialState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an update set from `(section name, value)` pairs.
    ///
    /// Names are matched like [`StateSection::from_str`]. Unknown names are
    /// skipped.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut partial = Self::default();
        for (key, value) in pairs {
            match key.as_ref().parse::<StateSection>() {
                Ok(section) => partial.set(section, value),
                Err(_) => {
                    tracing::debug!(section = key.as_ref(), "ignoring unknown state section");
                }
            }
        }
        partial
    }

    /// Builder-style setter.
    pub fn with(mut self, section: StateSection, value: impl Into<String>) -> Self {
        self.set(section, value);
        self
    }

    pub fn get(&self, section: StateSection) -> Option<&str> {
        match section {
            StateSection::Summary => self.summary.as_deref(),
            StateSection::Checkpoints => self.checkpoints.as_deref(),
            StateSection::Decisions => self.decisions.as_deref(),
            StateSection::Implementation => self.implementation.as_deref(),
            StateSection::Testing => self.testing.as_deref(),
        }
    }

    pub fn set(&mut self, section: StateSection, value: impl Into<String>) {
        let slot = match section {
            StateSection::Summary => &mut self.summary,
            StateSection::Checkpoints => &mut self.checkpoints,
            StateSection::Decisions => &mut self.decisions,
            StateSection::Implementation => &mut self.implementation,
            StateSection::Testing => &mut self.testing,
        };
        *slot = Some(value.into());
    }

    /// Sections that carry a value, in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (StateSection, &str)> {
        StateSection::ALL
            .into_iter()
            .filter_map(move |section| self.get(section).map(|value| (section, value)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}
