//! Project name resolution.
//!
//! [`resolve_project`] accepts either a bare project name (looked up under
//! `<base>/docs/plans`) or a path to a project directory.

use std::path::Path;

use anyhow::{Result, bail};

use plandoc_core::ProjectDir;

/// Resolve `input` to an existing project directory.
///
/// Inputs containing a path separator are treated as a directory path;
/// anything else is a project name under `base_dir`.
pub fn resolve_project(base_dir: &Path, input: &str) -> Result<ProjectDir> {
    let project = if looks_like_path(input) {
        ProjectDir::new(input)
    } else {
        ProjectDir::open(base_dir, input)?
    };

    if !project.exists() {
        bail!(
            "project {input:?} not found at {}\nUse `plandoc new {input} --requirement ...` to create it.",
            project.path().display()
        );
    }
    Ok(project)
}

fn looks_like_path(input: &str) -> bool {
    input.contains('/') || input.contains(std::path::MAIN_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    use plandoc_test_utils::TestWorkspace;

    #[test]
    fn resolves_name_under_plans_root() {
        let ws = TestWorkspace::new();
        ws.create_project("auth");

        let project = resolve_project(ws.base(), "auth").unwrap();
        assert_eq!(project.name(), "auth");
        assert_eq!(project.path(), ws.plans_root().join("auth"));
    }

    #[test]
    fn resolves_directory_path() {
        let ws = TestWorkspace::new();
        ws.create_project("auth");
        let path = ws.plans_root().join("auth");

        let project = resolve_project(Path::new("/unused"), path.to_str().unwrap()).unwrap();
        assert_eq!(project.name(), "auth");
    }

    #[test]
    fn missing_project_is_an_error() {
        let ws = TestWorkspace::new();
        let msg = resolve_project(ws.base(), "ghost").unwrap_err().to_string();
        assert!(msg.contains("project \"ghost\" not found"), "unexpected error: {msg}");
    }
}
