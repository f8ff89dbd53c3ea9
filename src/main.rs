//! fcdev: developer tooling for the fittencode.nvim plugin.
//!
//! This is the main entry point for the `fcdev` CLI. It parses arguments,
//! sets up logging, dispatches to the appropriate command handler, and maps
//! errors to the exit code.

use fcdev::cli::Cli;
use fcdev::{commands, exit_codes};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(&cli);

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn,fcdev=info",
        1 => "info,fcdev=debug",
        _ => "debug,fcdev=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}
