use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::StoreError;
use crate::layout::{self, PROBLEMS_FILE, REQUIREMENT_FILE, STATE_FILE};

/// A project found under the plans root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectSummary {
    pub name: String,
    pub project_dir: PathBuf,
    pub has_state: bool,
    pub has_problems: bool,
}

/// List the projects under `<base>/docs/plans`, sorted by name.
///
/// A subdirectory counts as a project when it holds a requirement or a
/// state document; a problems document alone is not enough. A missing plans
/// root yields an empty list.
pub fn find_projects(base_dir: &Path) -> Result<Vec<ProjectSummary>, StoreError> {
    let root = layout::plans_root(base_dir);
    let list_err = |e: std::io::Error| StoreError::ListDir {
        path: root.clone(),
        source: e,
    };

    let entries = match std::fs::read_dir(&root) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(list_err(e)),
    };

    let mut projects = Vec::new();
    for entry in entries {
        let entry = entry.map_err(list_err)?;
        let project_dir = entry.path();
        if !project_dir.is_dir() {
            continue;
        }

        let has_requirement = project_dir.join(REQUIREMENT_FILE).exists();
        let has_state = project_dir.join(STATE_FILE).exists();
        let has_problems = project_dir.join(PROBLEMS_FILE).exists();

        if !(has_requirement || has_state) {
            tracing::debug!(path = %project_dir.display(), "skipping non-project directory");
            continue;
        }

        projects.push(ProjectSummary {
            name: entry.file_name().to_string_lossy().into_owned(),
            project_dir,
            has_state,
            has_problems,
        });
    }

    projects.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(projects)
}
