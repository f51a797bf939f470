//! Problems document operations over a project directory.

use crate::error::StoreError;
use crate::io::{read_document, write_document};
use crate::project::ProjectDir;
use crate::templates::{PROBLEMS_PLACEHOLDER, problems_title};

use super::entry::{NewProblem, ProblemEntry};
use super::parser::{parse_problems, render_problem};

/// Load all problems, optionally keeping only those whose status matches
/// `status` case-insensitively. A blank filter keeps everything. A missing
/// `problems.md` yields no entries.
pub fn load_problems(
    project: &ProjectDir,
    status: Option<&str>,
) -> Result<Vec<ProblemEntry>, StoreError> {
    let Some(content) = read_document(&project.problems_path())? else {
        return Ok(Vec::new());
    };

    let mut problems = parse_problems(&content);
    if let Some(status) = status.map(str::trim).filter(|s| !s.is_empty()) {
        problems.retain(|p| p.has_status(status));
    }
    Ok(problems)
}

/// Append a problem block to `problems.md`, creating the file if needed.
///
/// The placeholder line is dropped and the title line is repaired if it is
/// missing or malformed. Existing entries are always kept.
///
/// The title must be a single non-blank line; otherwise the new block would
/// not start an entry and its fields would land on the previous one.
pub fn append_problem(project: &ProjectDir, problem: &NewProblem) -> Result<(), StoreError> {
    validate_title(&problem.title)?;

    let path = project.problems_path();
    let existing = read_document(&path)?.unwrap_or_default();

    let body = normalize_body(&existing, project.name());
    let content = format!("{}\n\n{}", body.trim(), render_problem(problem));

    write_document(&path, &content)?;

    tracing::info!(
        path = %path.display(),
        title = %problem.title,
        status = problem.effective_status(),
        "appended problem"
    );
    Ok(())
}

fn validate_title(title: &str) -> Result<(), StoreError> {
    if title.trim().is_empty() {
        return Err(StoreError::InvalidProblem("title must not be blank".to_owned()));
    }
    if title.contains(['\n', '\r']) {
        return Err(StoreError::InvalidProblem(format!(
            "title must be a single line: {title:?}"
        )));
    }
    Ok(())
}

/// Remove the placeholder line and make sure the document starts with a
/// `# <name> - Problems` title.
///
/// If the first non-blank line is some other `# ` title it is replaced.
/// If there is no title at all, one is prepended. Body lines are never
/// dropped.
fn normalize_body(content: &str, project_name: &str) -> String {
    let title = problems_title(project_name);

    let mut placeholder_removed = false;
    let mut lines: Vec<&str> = content
        .lines()
        .filter(|line| {
            if !placeholder_removed && line.trim() == PROBLEMS_PLACEHOLDER {
                placeholder_removed = true;
                return false;
            }
            true
        })
        .collect();

    let first = lines.iter().position(|line| !line.trim().is_empty());
    match first {
        Some(idx) if lines[idx].starts_with("# ") => {
            if !lines[idx].contains(" - Problems") {
                tracing::warn!(
                    found = lines[idx],
                    expected = %title,
                    "replacing malformed problems title"
                );
                lines[idx] = title.as_str();
            }
        }
        first => {
            if first.is_some() {
                tracing::warn!(expected = %title, "problems document has no title; adding one");
            }
            lines.insert(0, title.as_str());
            lines.insert(1, "");
        }
    }

    lines.join("\n")
}
