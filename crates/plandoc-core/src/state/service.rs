//! State document operations over a project directory.
//!
//! Every update is a full read-merge-write of `state.md` with no locking.
//! Two callers updating the same project race and the later write wins.

use chrono::Utc;

use crate::error::StoreError;
use crate::io::{read_document, write_document};
use crate::project::ProjectDir;
use crate::templates::CHECKPOINTS_PLACEHOLDER;

use super::document::{PartialState, StateDocument, StateSection};
use super::parser::{parse_state, serialize_state};

/// Load `state.md`.
///
/// A missing file yields a document with every section empty, which is
/// distinct from the placeholder text written at project creation.
pub fn load_state(project: &ProjectDir) -> Result<StateDocument, StoreError> {
    Ok(read_document(&project.state_path())?
        .map(|content| parse_state(&content))
        .unwrap_or_default())
}

/// Load `state.md` and keep only the requested sections.
pub fn load_state_sections(
    project: &ProjectDir,
    sections: &[StateSection],
) -> Result<PartialState, StoreError> {
    Ok(load_state(project)?.select(sections))
}

/// Overwrite the sections present in `update` and rewrite `state.md`.
///
/// When the file does not exist yet the untouched sections receive their
/// placeholder text. Sections are always written in canonical order.
pub fn save_state(project: &ProjectDir, update: &PartialState) -> Result<(), StoreError> {
    let path = project.state_path();
    let mut doc = match read_document(&path)? {
        Some(content) => parse_state(&content),
        None => StateDocument::placeholder(),
    };
    doc.merge(update);

    write_document(&path, &serialize_state(project.name(), &doc))?;

    tracing::info!(
        path = %path.display(),
        sections = ?update.iter().map(|(s, _)| s.key()).collect::<Vec<_>>(),
        "saved state"
    );
    Ok(())
}

/// Append a dated line to the checkpoints section.
///
/// The line has the form ``- **[<timestamp>]** `<phase>`: <description>``.
/// `timestamp` defaults to the current UTC date (`YYYY-MM-DD`). The
/// checkpoints placeholder is dropped on the first append.
pub fn append_checkpoint(
    project: &ProjectDir,
    phase: &str,
    description: &str,
    timestamp: Option<&str>,
) -> Result<(), StoreError> {
    let state = load_state(project)?;

    let timestamp = match timestamp {
        Some(ts) => ts.to_owned(),
        None => Utc::now().format("%Y-%m-%d").to_string(),
    };
    let entry = format!("- **[{timestamp}]** `{phase}`: {description}");

    let existing = if state.checkpoints.contains(CHECKPOINTS_PLACEHOLDER) {
        ""
    } else {
        state.checkpoints.trim()
    };
    let checkpoints = if existing.is_empty() {
        entry
    } else {
        format!("{existing}\n{entry}")
    };

    save_state(
        project,
        &PartialState::new().with(StateSection::Checkpoints, checkpoints),
    )
}
