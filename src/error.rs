//! Error types for the fcdev CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for fcdev operations.
#[derive(Error, Debug)]
pub enum FcError {
    /// User provided invalid arguments or the environment is not set up.
    #[error("{0}")]
    UserError(String),

    /// The test suite ran but reported failures.
    #[error("{0}")]
    TestFailure(String),

    /// The chat endpoint could not be reached or answered with an error.
    #[error("Chat request failed: {0}")]
    ChatError(String),

    /// A native build step failed.
    #[error("Build failed: {0}")]
    BuildError(String),

    /// Filesystem operation failed.
    #[error("I/O error: {0}")]
    IoError(String),
}

impl FcError {
    /// Returns the exit code for this error.
    ///
    /// All failures share exit code 1.
    pub fn exit_code(&self) -> i32 {
        exit_codes::FAILURE
    }
}

/// Result type alias for fcdev operations.
pub type Result<T> = std::result::Result<T, FcError>;
