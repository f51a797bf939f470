//! On-disk layout of the plans tree.
//!
//! ```text
//! <base>/docs/plans/<name>/requirement.md
//! <base>/docs/plans/<name>/state.md
//! <base>/docs/plans/<name>/problems.md
//! ```

use std::path::{Path, PathBuf};

/// Directory, relative to the base directory, that holds all projects.
pub const PLANS_DIR: &str = "docs/plans";

pub const REQUIREMENT_FILE: &str = "requirement.md";
pub const STATE_FILE: &str = "state.md";
pub const PROBLEMS_FILE: &str = "problems.md";

/// Return `<base>/docs/plans`.
pub fn plans_root(base_dir: &Path) -> PathBuf {
    PLANS_DIR
        .split('/')
        .fold(base_dir.to_path_buf(), |path, part| path.join(part))
}

/// Return the directory of the project called `name` under `base_dir`.
pub fn project_path(base_dir: &Path, name: &str) -> PathBuf {
    plans_root(base_dir).join(name)
}
