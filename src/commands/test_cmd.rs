//! `fcdev test`: run spec files in a headless editor.

use crate::cli::TestArgs;
use crate::config::Config;
use crate::error::{FcError, Result};
use crate::runner::{SuiteSettings, TestReport, discover_spec_files, run_suite};
use std::path::PathBuf;
use std::time::Duration;

pub fn cmd_test(mut config: Config, args: TestArgs) -> Result<()> {
    if let Some(editor) = args.editor {
        config.editor = editor;
    }
    if let Some(timeout) = args.timeout {
        config.test_timeout_secs = timeout;
    }
    config.validate()?;

    let settings = SuiteSettings {
        editor: config.editor.clone(),
        framework: args
            .framework
            .unwrap_or_else(|| PathBuf::from(&config.framework)),
        timeout: Duration::from_secs(config.test_timeout_secs),
    };

    let files = discover_spec_files(&args.path, &config.spec_pattern)?;
    println!("Running {} test files...", files.len());

    let report = run_suite(&settings, &files, None)?;
    print!("{}", format_report(&report));

    if report.is_success() {
        Ok(())
    } else {
        Err(FcError::TestFailure(format!(
            "{} test(s) failed",
            report.failed
        )))
    }
}

/// Human-readable results block.
fn format_report(report: &TestReport) -> String {
    let mut out = format!("\nResults: {}\n", report.summary());
    if !report.is_success() {
        out.push_str("\nFailures:\n");
        for failure in &report.failures {
            out.push_str(&format!(" • {}\n", failure));
        }
    }
    out
}
