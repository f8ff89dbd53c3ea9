//! fcdev: developer tooling for the fittencode.nvim plugin.
//!
//! - [`runner`]: run Lua spec files in a headless editor and parse the result line
//! - [`generate`]: turn markdown prompt templates into Lua tables via the chat API
//! - [`refine`]: regex clean-up passes for generated Lua
//! - [`build`]: `make` wrapper for the native modules

pub mod build;
pub mod chat;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod generate;
pub mod process;
pub mod refine;
pub mod runner;
