//! Reading files and clearing directory trees.

use crate::error::{FcError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read a UTF-8 file into a string.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| FcError::IoError(format!("failed to read '{}': {}", path.display(), e)))
}

/// Remove a directory tree. A missing directory is not an error.
///
/// Returns `true` when something was removed.
pub fn remove_tree(path: &Path) -> Result<bool> {
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(FcError::IoError(format!(
            "failed to remove directory '{}': {}",
            path.display(),
            e
        ))),
    }
}
