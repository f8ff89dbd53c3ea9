//! Native library builds for the plugin's Lua C modules.
//!
//! Each target is a directory with its own Makefile; building one is
//! `make -C <dir>` from the project root.

use crate::error::{FcError, Result};
use crate::process::{ProcessOutput, run_captured};
use clap::ValueEnum;
use std::path::{Path, PathBuf};

/// Buildable native components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BuildTarget {
    /// MD5 hashing module.
    Hash,
    /// libcurl HTTP binding.
    Http,
    /// libcurl backend for the REST client.
    Rest,
    /// Hash project under the shared `cc` tree.
    CcHash,
    /// libcurl project under the shared `cc` tree.
    CcLibcurl,
}

impl BuildTarget {
    /// Directory containing the target's Makefile, relative to the project root.
    pub fn directory(self) -> &'static str {
        match self {
            BuildTarget::Hash => "lua/fittencode/hash",
            BuildTarget::Http => "lua/fittencode/http/libcurl",
            BuildTarget::Rest => "lua/fittencode/rest/backend/libcurl",
            BuildTarget::CcHash => "lua/fittencode/cc/projects/hash",
            BuildTarget::CcLibcurl => "lua/fittencode/cc/projects/libcurl",
        }
    }

    /// `make -C <dir>` argv for this target.
    pub fn make_command(self, root: &Path) -> Vec<String> {
        vec![
            "make".to_string(),
            "-C".to_string(),
            root.join(self.directory()).display().to_string(),
        ]
    }
}

/// Run `make` for `target` and return its captured output.
///
/// A non-zero exit becomes a [`FcError::BuildError`] carrying make's stderr.
pub fn run_make(root: &Path, target: BuildTarget) -> Result<ProcessOutput> {
    let dir: PathBuf = root.join(target.directory());
    if !dir.is_dir() {
        return Err(FcError::UserError(format!(
            "build directory '{}' does not exist\n\
             Fix: run from the plugin root or pass --root.",
            dir.display()
        )));
    }

    let output = run_captured(&target.make_command(root), None, None)?;

    if output.is_success() {
        Ok(output)
    } else {
        Err(FcError::BuildError(format!(
            "'{}' exited with {}\n{}",
            output.command,
            output
                .exit_code
                .map_or_else(|| "a signal".to_string(), |code| format!("status {}", code)),
            output.stderr.trim_end()
        )))
    }
}
