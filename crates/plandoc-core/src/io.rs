//! Thin wrappers over `std::fs` that attach path context to errors and
//! treat a missing file as "no document".

use std::io::ErrorKind;
use std::path::Path;

use crate::error::StoreError;

/// Read a document, returning `None` when it does not exist.
pub(crate) fn read_document(path: &Path) -> Result<Option<String>, StoreError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(StoreError::Read {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Replace the whole content of a document.
pub(crate) fn write_document(path: &Path, content: &str) -> Result<(), StoreError> {
    std::fs::write(path, content).map_err(|e| StoreError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}
