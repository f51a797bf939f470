//! Project store: creating, opening and finding projects on disk.
//!
//! A project is only a directory. There is no long-lived in-memory project
//! object; each operation re-reads and rewrites the document it touches.

mod finder;

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::StoreError;
use crate::io::{read_document, write_document};
use crate::layout::{self, PROBLEMS_FILE, REQUIREMENT_FILE, STATE_FILE};
use crate::templates;

pub use finder::{ProjectSummary, find_projects};

/// Handle to a project directory.
///
/// The project name is the directory's base name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDir {
    path: PathBuf,
    name: String,
}

impl ProjectDir {
    /// Wrap an existing project directory path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, name }
    }

    /// Handle for the project called `name` under `base_dir`.
    ///
    /// The directory is not required to exist.
    pub fn open(base_dir: &Path, name: &str) -> Result<Self, StoreError> {
        validate_name(name)?;
        Ok(Self {
            path: layout::project_path(base_dir, name),
            name: name.to_owned(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn exists(&self) -> bool {
        self.path.is_dir()
    }

    pub fn requirement_path(&self) -> PathBuf {
        self.path.join(REQUIREMENT_FILE)
    }

    pub fn state_path(&self) -> PathBuf {
        self.path.join(STATE_FILE)
    }

    pub fn problems_path(&self) -> PathBuf {
        self.path.join(PROBLEMS_FILE)
    }
}

/// Result of [`create_project`].
#[derive(Debug, Clone, Serialize)]
pub struct CreatedProject {
    pub project_dir: PathBuf,
    /// Requirement, state and problems paths, in write order.
    pub files: Vec<PathBuf>,
}

/// Reject names that are not a single plain path component.
fn validate_name(name: &str) -> Result<(), StoreError> {
    let bad = name.trim().is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\']);
    if bad {
        return Err(StoreError::InvalidName(name.to_owned()));
    }
    Ok(())
}

/// Create `<base>/docs/plans/<name>/` with its three documents.
///
/// Fails with [`StoreError::AlreadyExists`] if the directory is present.
/// The writes are not atomic: if one fails, the files written before it
/// stay on disk.
pub fn create_project(
    base_dir: &Path,
    project_name: &str,
    requirement: &str,
) -> Result<CreatedProject, StoreError> {
    let project = ProjectDir::open(base_dir, project_name)?;
    let dir = project.path().to_path_buf();

    if dir.exists() {
        return Err(StoreError::AlreadyExists { path: dir });
    }

    std::fs::create_dir_all(&dir).map_err(|e| StoreError::CreateDir {
        path: dir.clone(),
        source: e,
    })?;

    let documents = [
        (
            project.requirement_path(),
            templates::render_requirement(project_name, requirement),
        ),
        (
            project.state_path(),
            templates::render_initial_state(project_name),
        ),
        (
            project.problems_path(),
            templates::render_initial_problems(project_name),
        ),
    ];

    let mut files = Vec::with_capacity(documents.len());
    for (path, content) in documents {
        write_document(&path, &content)?;
        files.push(path);
    }

    tracing::info!(project = project_name, path = %dir.display(), "created project");

    Ok(CreatedProject {
        project_dir: dir,
        files,
    })
}

/// Read the requirement text, without its title line.
///
/// Returns `None` when `requirement.md` does not exist.
pub fn read_requirement(project: &ProjectDir) -> Result<Option<String>, StoreError> {
    let Some(content) = read_document(&project.requirement_path())? else {
        return Ok(None);
    };

    let body = match content.split_once('\n') {
        Some((first, rest)) if first.starts_with("# ") => rest,
        _ if content.starts_with("# ") => "",
        _ => content.as_str(),
    };
    Ok(Some(body.trim().to_owned()))
}
