//! Mapping source templates to output files.

use crate::error::{FcError, Result};
use std::path::{Path, PathBuf};

const RDT_SUFFIX: &str = ".rdt.md";
const MD_SUFFIX: &str = ".md";

/// True for files the generator should pick up.
pub fn is_template_source(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| name.ends_with(MD_SUFFIX) && name.len() > MD_SUFFIX.len())
}

/// Where the Lua file for `file` goes.
///
/// The directory layout below `source_root` is mirrored under `output_root`;
/// a `.rdt.md` (or plain `.md`) suffix becomes `.lua`.
pub fn output_path(source_root: &Path, output_root: &Path, file: &Path) -> Result<PathBuf> {
    let relative = file.strip_prefix(source_root).map_err(|_| {
        FcError::UserError(format!(
            "'{}' is not inside the template directory '{}'",
            file.display(),
            source_root.display()
        ))
    })?;

    let name = relative
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| FcError::UserError(format!("invalid template path '{}'", file.display())))?;

    let stem = name
        .strip_suffix(RDT_SUFFIX)
        .or_else(|| name.strip_suffix(MD_SUFFIX))
        .filter(|stem| !stem.is_empty())
        .ok_or_else(|| {
            FcError::UserError(format!("'{}' is not a markdown template", file.display()))
        })?;

    let mut target = output_root.to_path_buf();
    if let Some(parent) = relative.parent() {
        target.push(parent);
    }
    target.push(format!("{}.lua", stem));
    Ok(target)
}
