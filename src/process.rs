//! Subprocess execution with timeout and output capture.
//!
//! Used by the test runner (headless editor) and the build wrapper (`make`).
//! Commands are run directly as argv, never through a shell.

use crate::error::{FcError, Result};
use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Result of running a command to completion (or until it was killed).
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    /// Exit code of the process (None if killed or terminated by a signal).
    pub exit_code: Option<i32>,
    /// Captured stdout, lossily decoded.
    pub stdout: String,
    /// Captured stderr, lossily decoded.
    pub stderr: String,
    /// Wall-clock duration of the run.
    pub duration: Duration,
    /// Whether the process was killed because it exceeded the timeout.
    pub timed_out: bool,
    /// The command line, shell-quoted, for logging.
    pub command: String,
}

impl ProcessOutput {
    /// Check if the process exited with status 0 before the timeout.
    pub fn is_success(&self) -> bool {
        !self.timed_out && self.exit_code == Some(0)
    }
}

/// Split a configured command string (e.g. `nvim -u NONE`) into argv.
pub fn split_command(command: &str) -> Result<Vec<String>> {
    let argv = shell_words::split(command).map_err(|e| {
        FcError::UserError(format!(
            "failed to parse command '{}': {}\n\
             Fix: check for unmatched quotes or invalid escape sequences.",
            command, e
        ))
    })?;

    if argv.is_empty() {
        return Err(FcError::UserError(format!(
            "command is empty after parsing: '{}'",
            command
        )));
    }

    Ok(argv)
}

/// Run `argv[0]` with the remaining arguments, capturing both output streams.
///
/// With a timeout the child is killed once it is exceeded and the result has
/// `timed_out` set; output captured up to that point is discarded.
pub fn run_captured(
    argv: &[String],
    cwd: Option<&Path>,
    timeout: Option<Duration>,
) -> Result<ProcessOutput> {
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| FcError::UserError("cannot run an empty command".to_string()))?;
    let command_str = shell_words::join(argv);

    let mut command = Command::new(program);
    command
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if let Some(dir) = cwd {
        command.current_dir(dir);
    }

    tracing::debug!(command = %command_str, "spawning process");

    let start_time = Instant::now();
    let mut child = command.spawn().map_err(|e| {
        FcError::UserError(format!(
            "failed to execute '{}': {}\n\
             Fix: ensure the command is installed and in PATH.",
            program, e
        ))
    })?;

    // Drain both pipes concurrently so a chatty child never blocks on a full pipe.
    let stdout_reader = drain(child.stdout.take());
    let stderr_reader = drain(child.stderr.take());

    let (exit_code, timed_out) = wait_with_timeout(&mut child, timeout)?;
    let duration = start_time.elapsed();

    if timed_out {
        // A grandchild may still hold the pipes open; leave the readers detached.
        tracing::debug!(command = %command_str, ?duration, "process timed out");
        return Ok(ProcessOutput {
            exit_code,
            stdout: String::new(),
            stderr: String::new(),
            duration,
            timed_out,
            command: command_str,
        });
    }

    let stdout = collect(stdout_reader);
    let stderr = collect(stderr_reader);

    tracing::debug!(command = %command_str, ?exit_code, ?duration, "process finished");

    Ok(ProcessOutput {
        exit_code,
        stdout,
        stderr,
        duration,
        timed_out,
        command: command_str,
    })
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> Option<JoinHandle<Vec<u8>>> {
    pipe.map(|mut reader| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            if let Err(e) = reader.read_to_end(&mut buf) {
                tracing::debug!(error = %e, "failed to read child output pipe");
            }
            buf
        })
    })
}

fn collect(handle: Option<JoinHandle<Vec<u8>>>) -> String {
    handle
        .and_then(|h| h.join().ok())
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .unwrap_or_default()
}

/// Wait for a child process, killing it if the timeout elapses.
///
/// Returns (exit_code, timed_out).
fn wait_with_timeout(child: &mut Child, timeout: Option<Duration>) -> Result<(Option<i32>, bool)> {
    let start = Instant::now();

    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Ok((status.code(), false)),
            Ok(None) => {
                if let Some(limit) = timeout
                    && start.elapsed() >= limit
                {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Ok((None, true));
                }
                thread::sleep(POLL_INTERVAL);
            }
            Err(e) => {
                return Err(FcError::UserError(format!(
                    "failed to check process status: {}",
                    e
                )));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn split_command_handles_quoted_args() {
        let parts = split_command("nvim -u 'my init.lua'").unwrap();
        assert_eq!(parts, vec!["nvim", "-u", "my init.lua"]);
    }

    #[test]
    fn split_command_rejects_empty() {
        let err = split_command("   ").unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn split_command_rejects_unmatched_quote() {
        let err = split_command("nvim \"unmatched").unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn run_captured_rejects_empty_argv() {
        assert!(run_captured(&[], None, None).is_err());
    }

    #[test]
    fn run_captured_reports_missing_program() {
        let err = run_captured(&argv(&["nonexistent_program_xyz_123"]), None, None).unwrap_err();
        assert!(err.to_string().contains("failed to execute"));
    }

    #[cfg(unix)]
    #[test]
    fn run_captured_collects_both_streams() {
        let output = run_captured(
            &argv(&["sh", "-c", "echo out; echo err >&2"]),
            None,
            Some(Duration::from_secs(10)),
        )
        .unwrap();

        assert!(output.is_success());
        assert_eq!(output.stdout, "out\n");
        assert_eq!(output.stderr, "err\n");
        assert!(output.command.starts_with("sh -c"));
    }

    #[cfg(unix)]
    #[test]
    fn run_captured_reports_nonzero_exit() {
        let output = run_captured(&argv(&["sh", "-c", "echo partial; exit 3"]), None, None).unwrap();

        assert!(!output.is_success());
        assert_eq!(output.exit_code, Some(3));
        assert!(!output.timed_out);
        assert_eq!(output.stdout, "partial\n");
    }

    #[cfg(unix)]
    #[test]
    fn run_captured_kills_on_timeout() {
        let output = run_captured(
            &argv(&["sleep", "10"]),
            None,
            Some(Duration::from_millis(200)),
        )
        .unwrap();

        assert!(output.timed_out);
        assert!(!output.is_success());
        assert!(output.duration < Duration::from_secs(5));
    }

    #[cfg(unix)]
    #[test]
    fn run_captured_uses_working_directory() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("marker.txt"), "").unwrap();

        let output = run_captured(&argv(&["ls"]), Some(temp_dir.path()), None).unwrap();

        assert!(output.stdout.contains("marker.txt"));
    }

    #[cfg(unix)]
    #[test]
    fn run_captured_handles_large_output() {
        // Larger than a default pipe buffer; would deadlock without draining.
        let output = run_captured(
            &argv(&["sh", "-c", "i=0; while [ $i -lt 20000 ]; do echo line-$i; i=$((i+1)); done"]),
            None,
            Some(Duration::from_secs(30)),
        )
        .unwrap();

        assert!(output.is_success());
        assert_eq!(output.stdout.lines().count(), 20000);
    }
}
