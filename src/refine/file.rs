//! Applying refinement passes to files on disk.

use super::rules::RefinePass;
use crate::error::{FcError, Result};
use crate::fs::{atomic_write_file, read_text};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// What happened to one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefineOutcome {
    /// The refined file.
    pub path: PathBuf,
    /// Passes that modified the content, in application order.
    pub changed_passes: Vec<RefinePass>,
}

impl RefineOutcome {
    /// True when the file was rewritten.
    pub fn changed(&self) -> bool {
        !self.changed_passes.is_empty()
    }
}

/// Run `passes` over one file, writing it back only if something changed.
pub fn refine_file(path: &Path, passes: &[RefinePass]) -> Result<RefineOutcome> {
    let original = read_text(path)?;
    let mut content = original.clone();
    let mut changed_passes = Vec::new();

    for &pass in passes {
        let next = pass.apply(&content);
        if next != content {
            tracing::info!(file = %path.display(), pass = %pass, "updating file");
            changed_passes.push(pass);
            content = next;
        } else {
            tracing::debug!(file = %path.display(), pass = %pass, "no changes");
        }
    }

    if content != original {
        atomic_write_file(path, &content)?;
    }

    Ok(RefineOutcome {
        path: path.to_path_buf(),
        changed_passes,
    })
}

/// Refine every file under `dir` whose extension is `extension`.
///
/// Files are visited in sorted order.
pub fn refine_tree(dir: &Path, extension: &str, passes: &[RefinePass]) -> Result<Vec<RefineOutcome>> {
    let extension = extension.trim_start_matches('.');
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            FcError::IoError(format!("failed to walk '{}': {}", dir.display(), e))
        })?;
        let matches = entry
            .path()
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));
        if entry.file_type().is_file() && matches {
            files.push(entry.into_path());
        }
    }

    files
        .iter()
        .map(|file| refine_file(file, passes))
        .collect()
}

/// Refine a single file, or every matching file when `path` is a directory.
pub fn refine_path(path: &Path, extension: &str, passes: &[RefinePass]) -> Result<Vec<RefineOutcome>> {
    if path.is_dir() {
        refine_tree(path, extension, passes)
    } else if path.is_file() {
        refine_file(path, passes).map(|outcome| vec![outcome])
    } else {
        Err(FcError::UserError(format!(
            "path '{}' does not exist",
            path.display()
        )))
    }
}
