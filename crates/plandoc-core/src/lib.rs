//! Markdown-backed bookkeeping for planned projects.
//!
//! Each project lives under `<base>/docs/plans/<name>/` as three documents:
//! `requirement.md`, `state.md` and `problems.md`. This crate creates those
//! documents, parses them into structured records, merges updates and writes
//! them back. There is no locking: concurrent writers race and the last full
//! rewrite wins.

pub mod error;
mod io;
pub mod layout;
pub mod problems;
pub mod project;
pub mod state;
pub mod templates;

pub use error::StoreError;
pub use problems::{NewProblem, ProblemEntry};
pub use project::{
    CreatedProject, ProjectDir, ProjectSummary, create_project, find_projects, read_requirement,
};
pub use state::{PartialState, StateDocument, StateSection};
