//! Exit code constants for the fcdev CLI.
//!
//! Every command uses the same contract:
//! - 0: Success
//! - 1: Any failure (failing tests, build errors, generation errors, bad args)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Any failure.
pub const FAILURE: i32 = 1;
