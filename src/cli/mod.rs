//! CLI argument parsing for fcdev.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::build::BuildTarget;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// fcdev: developer tooling for the fittencode.nvim plugin.
///
/// Runs the Lua test suite in a headless editor, builds the native modules,
/// and generates Lua prompt templates from their markdown sources.
#[derive(Parser, Debug)]
#[command(name = "fcdev")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress log output.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Config file (defaults to ./fcdev.yaml when present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for fcdev.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run Lua spec files in a headless editor.
    ///
    /// Prints pass/fail counts and failure messages; exits 1 if anything failed.
    Test(TestArgs),

    /// Build a native module with make.
    Make(MakeArgs),

    /// Generate Lua templates from markdown templates via the chat API.
    Generate(GenerateArgs),

    /// Apply the template clean-up passes to a file or directory.
    Refine(RefineArgs),
}

/// Arguments for the `test` command.
#[derive(Parser, Debug)]
pub struct TestArgs {
    /// Test file or directory to search for spec files.
    pub path: PathBuf,

    /// Test framework script passed to the editor.
    #[arg(long)]
    pub framework: Option<PathBuf>,

    /// Seconds before the editor is killed.
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Editor command (e.g. "nvim -u NONE").
    #[arg(long)]
    pub editor: Option<String>,
}

/// Arguments for the `make` command.
#[derive(Parser, Debug)]
pub struct MakeArgs {
    /// Which native module to build.
    #[arg(value_enum)]
    pub target: BuildTarget,

    /// Plugin root directory.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

/// Arguments for the `generate` command.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Directory of markdown templates.
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Directory receiving generated Lua files.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// File containing the api key.
    #[arg(long)]
    pub token_file: Option<PathBuf>,

    /// Chat endpoint URL.
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Milliseconds to wait between requests.
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Keep existing files in the output directory.
    #[arg(long)]
    pub keep_existing: bool,
}

/// Arguments for the `refine` command.
#[derive(Parser, Debug)]
pub struct RefineArgs {
    /// File or directory to refine in place.
    pub path: PathBuf,

    /// Extension of files to refine when PATH is a directory.
    #[arg(long, default_value = "lua")]
    pub extension: String,

    /// Also collapse `<| name |>` tags to `<|name|>`.
    #[arg(long)]
    pub compact_tags: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
