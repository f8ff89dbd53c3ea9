//! Command implementations for fcdev.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Commands that need configuration resolve it here so each
//! handler receives a validated `Config` with CLI overrides applied.

mod generate;
mod make;
mod refine;
mod test_cmd;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::error::{FcError, Result};
use std::path::Path;

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let Cli {
        config, command, ..
    } = cli;

    match command {
        Command::Test(args) => test_cmd::cmd_test(load_config(config.as_deref())?, args),
        Command::Make(args) => make::cmd_make(args),
        Command::Generate(args) => generate::cmd_generate(load_config(config.as_deref())?, args),
        Command::Refine(args) => refine::cmd_refine(args),
    }
}

/// Resolve config relative to the current working directory.
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let cwd = std::env::current_dir().map_err(|e| {
        FcError::IoError(format!("failed to determine current directory: {}", e))
    })?;
    Config::resolve(explicit, &cwd)
}
