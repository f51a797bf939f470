//! Errors raised by the project store.
//!
//! A missing document is never an error: loads yield empty or default
//! structures instead. Parsing never fails either.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading or writing project documents.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The project directory is already present on disk.
    #[error("project already exists: {}", path.display())]
    AlreadyExists { path: PathBuf },

    /// The project name cannot be used as a single directory component.
    #[error("invalid project name: {0:?}")]
    InvalidName(String),

    /// A problem cannot be written without breaking the entry grammar.
    #[error("invalid problem: {0}")]
    InvalidProblem(String),

    #[error("failed to create directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing a document failed.
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading a document failed for a reason other than it being absent.
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to list directory {}", path.display())]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
