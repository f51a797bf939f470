//! Canned text for newly created documents.

use crate::state::{StateDocument, serialize_state};

pub const SUMMARY_PLACEHOLDER: &str = "*No summary yet.*";
pub const CHECKPOINTS_PLACEHOLDER: &str = "*No checkpoints recorded yet.*";
pub const DECISIONS_PLACEHOLDER: &str = "*No decisions recorded yet.*";
pub const IMPLEMENTATION_PLACEHOLDER: &str = "*No implementation progress recorded yet.*";
pub const TESTING_PLACEHOLDER: &str = "*No testing approach defined yet.*";

/// Sole body line of an empty problems document.
pub const PROBLEMS_PLACEHOLDER: &str = "*No problems recorded yet.*";

/// Initial `state.md`: title plus the five sections holding placeholders.
pub fn render_initial_state(project_name: &str) -> String {
    serialize_state(project_name, &StateDocument::placeholder())
}

/// Initial `problems.md`: title plus the placeholder line.
pub fn render_initial_problems(project_name: &str) -> String {
    format!("{}\n\n{PROBLEMS_PLACEHOLDER}\n", problems_title(project_name))
}

/// `requirement.md`: title, blank line, requirement text.
pub fn render_requirement(project_name: &str, requirement: &str) -> String {
    format!("# {project_name} - Requirement\n\n{requirement}\n")
}

pub(crate) fn problems_title(project_name: &str) -> String {
    format!("# {project_name} - Problems")
}
