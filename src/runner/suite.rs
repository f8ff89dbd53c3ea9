//! Running the editor over a set of spec files.

use super::report::{TestReport, parse_report};
use crate::error::Result;
use crate::process::{run_captured, split_command};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// How to launch the test framework.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteSettings {
    /// Editor command line (shell-words syntax).
    pub editor: String,
    /// Lua framework script passed to `-l`.
    pub framework: PathBuf,
    /// Kill the editor after this long.
    pub timeout: Duration,
}

/// Build the full argv for one run.
pub fn editor_command(settings: &SuiteSettings, files: &[PathBuf]) -> Result<Vec<String>> {
    let mut argv = split_command(&settings.editor)?;
    argv.push("--headless".to_string());
    argv.push("-l".to_string());
    argv.push(settings.framework.display().to_string());
    argv.extend(files.iter().map(|f| f.display().to_string()));
    Ok(argv)
}

/// Run the framework over `files` and interpret its output.
///
/// The exit status is not consulted: a failing suite still prints its marker
/// line, and a crash without one becomes a framework error.
pub fn run_suite(settings: &SuiteSettings, files: &[PathBuf], cwd: Option<&Path>) -> Result<TestReport> {
    let argv = editor_command(settings, files)?;
    let output = run_captured(&argv, cwd, Some(settings.timeout))?;

    if output.timed_out {
        tracing::warn!(timeout = ?settings.timeout, "editor exceeded timeout");
        return Ok(TestReport::timeout());
    }

    if !output.is_success() {
        tracing::debug!(exit_code = ?output.exit_code, "editor exited with failure status");
    }

    Ok(parse_report(&output.stdout, &output.stderr))
}
