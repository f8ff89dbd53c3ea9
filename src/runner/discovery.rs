//! Locating spec files to hand to the editor.

use crate::error::{FcError, Result};
use globset::{Glob, GlobMatcher};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Resolve the test path given on the command line into a list of files.
///
/// A file is used as-is. A directory is searched recursively for files whose
/// name matches `pattern` (for example `*_spec.lua`); results are sorted.
pub fn discover_spec_files(path: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    if !path.is_dir() {
        return Err(FcError::UserError(format!(
            "test path '{}' does not exist",
            path.display()
        )));
    }

    let matcher = compile_pattern(pattern)?;
    let mut files = Vec::new();

    for entry in WalkDir::new(path).follow_links(true) {
        let entry = entry.map_err(|e| {
            FcError::IoError(format!("failed to walk '{}': {}", path.display(), e))
        })?;
        if entry.file_type().is_file() && matcher.is_match(entry.file_name()) {
            files.push(entry.into_path());
        }
    }

    if files.is_empty() {
        return Err(FcError::UserError("No test files found".to_string()));
    }

    files.sort();
    Ok(files)
}

fn compile_pattern(pattern: &str) -> Result<GlobMatcher> {
    Glob::new(pattern.trim())
        .map(|glob| glob.compile_matcher())
        .map_err(|e| {
            FcError::UserError(format!(
                "invalid spec file pattern '{}': {}\n\
                 Fix: use a file-name glob such as '*_spec.lua'.",
                pattern, e
            ))
        })
}
