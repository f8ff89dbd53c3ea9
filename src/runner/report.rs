//! Test report model and marker-line parsing.

use serde::Deserialize;

/// Prefix of the line carrying the JSON result payload.
pub const RESULT_MARKER: &str = "TEST_RESULTS:";

/// Pass/fail counts reported by the Lua test framework.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TestReport {
    /// Number of passing test cases.
    pub passed: u32,
    /// Number of failing test cases.
    pub failed: u32,
    /// Human-readable failure messages.
    #[serde(default)]
    pub failures: Vec<String>,
}

impl TestReport {
    /// A report describing a single failure that is not a test case result.
    pub fn single_failure(message: impl Into<String>) -> Self {
        Self {
            passed: 0,
            failed: 1,
            failures: vec![message.into()],
        }
    }

    /// The synthetic report used when the editor exceeds its time budget.
    pub fn timeout() -> Self {
        Self::single_failure("Test timeout")
    }

    /// True when nothing failed.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// `"<passed> passed, <failed> failed"`.
    pub fn summary(&self) -> String {
        format!("{} passed, {} failed", self.passed, self.failed)
    }
}

/// Extract the report from captured editor output.
///
/// The last line of `stdout` that starts with [`RESULT_MARKER`] wins. When no
/// such line exists, or its payload is not a valid report, a single synthetic
/// failure is returned instead.
pub fn parse_report(stdout: &str, stderr: &str) -> TestReport {
    let payload = stdout
        .lines()
        .filter_map(|line| line.strip_prefix(RESULT_MARKER))
        .next_back();

    let Some(payload) = payload else {
        return TestReport::single_failure(format!(
            "Framework error: No test output detected\n{}",
            stderr
        ));
    };

    match serde_json::from_str::<TestReport>(payload.trim_end_matches('\r')) {
        Ok(report) => report,
        Err(e) => TestReport::single_failure(format!(
            "JSON parse failed: {}\nRaw output: {}",
            e, stdout
        )),
    }
}
