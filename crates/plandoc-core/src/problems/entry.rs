use serde::{Deserialize, Serialize};

/// Status given to problems that do not state one.
pub const DEFAULT_STATUS: &str = "open";
/// Severity given to problems that do not state one.
pub const DEFAULT_SEVERITY: &str = "medium";

/// A problem parsed from `problems.md`.
///
/// `title` identifies the entry but is not required to be unique.
/// `status` and `severity` are lowercased when parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemEntry {
    pub title: String,
    pub description: String,
    pub status: String,
    pub severity: String,
}

impl ProblemEntry {
    /// An entry with the default status and severity and no description.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            status: DEFAULT_STATUS.to_owned(),
            severity: DEFAULT_SEVERITY.to_owned(),
        }
    }

    /// Case-insensitive status comparison.
    pub fn has_status(&self, status: &str) -> bool {
        self.status == status.to_lowercase()
    }
}

/// Input for appending a problem.
///
/// Use [`NewProblem::new`] for the title, then chain optional setters.
/// Unset or empty status/severity fall back to `open`/`medium` on write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewProblem {
    pub title: String,
    pub description: String,
    pub status: Option<String>,
    pub severity: Option<String>,
}

impl NewProblem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn severity(mut self, severity: impl Into<String>) -> Self {
        self.severity = Some(severity.into());
        self
    }

    /// Status that will be written.
    pub fn effective_status(&self) -> &str {
        self.status
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_STATUS)
    }

    /// Severity that will be written.
    pub fn effective_severity(&self) -> &str {
        self.severity
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_SEVERITY)
    }
}
