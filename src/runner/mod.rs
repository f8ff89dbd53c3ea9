//! Headless Neovim test runner.
//!
//! The editor is launched as `<editor> --headless -l <framework> <files...>`.
//! The Lua framework prints one machine-readable line,
//! `TEST_RESULTS:{"passed":N,"failed":M,"failures":[...]}`, which is the only
//! part of the output this module interprets.

mod discovery;
mod report;
mod suite;


// Re-export public API
pub use discovery::discover_spec_files;
pub use report::{RESULT_MARKER, TestReport, parse_report};
pub use suite::{SuiteSettings, editor_command, run_suite};
