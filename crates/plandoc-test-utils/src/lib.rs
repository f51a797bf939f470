//! Shared test utilities for plandoc integration tests.
//!
//! Each test gets its own [`TestWorkspace`]: a temporary base directory that
//! is removed when the workspace is dropped.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use plandoc_core::layout;
use plandoc_core::project::{ProjectDir, create_project};

/// A temporary base directory laid out like a repository root.
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let dir = tempfile::Builder::new()
            .prefix("plandoc_test_")
            .tempdir()
            .expect("failed to create temp workspace");
        Self { dir }
    }

    /// The base directory passed to the store.
    pub fn base(&self) -> &Path {
        self.dir.path()
    }

    /// `<base>/docs/plans`.
    pub fn plans_root(&self) -> PathBuf {
        layout::plans_root(self.base())
    }

    /// Handle for `name`, whether or not it exists.
    pub fn project(&self, name: &str) -> ProjectDir {
        ProjectDir::open(self.base(), name).expect("test project name should be valid")
    }

    /// Create a project through the store with a fixed requirement.
    pub fn create_project(&self, name: &str) -> ProjectDir {
        create_project(self.base(), name, "Test requirement.")
            .unwrap_or_else(|e| panic!("failed to create project {name}: {e}"));
        self.project(name)
    }

    /// Create `<plans>/<name>/` by hand and write only the given files.
    pub fn make_dir_with(&self, name: &str, files: &[(&str, &str)]) -> PathBuf {
        let dir = self.plans_root().join(name);
        std::fs::create_dir_all(&dir).expect("failed to create project dir");
        for (file, content) in files {
            std::fs::write(dir.join(file), content)
                .unwrap_or_else(|e| panic!("failed to write {file}: {e}"));
        }
        dir
    }

    pub fn read(&self, path: &Path) -> String {
        std::fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()))
    }

    pub fn write(&self, path: &Path, content: &str) {
        std::fs::write(path, content)
            .unwrap_or_else(|e| panic!("failed to write {}: {e}", path.display()));
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}
