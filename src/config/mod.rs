//! Configuration model for fcdev.
//!
//! This module defines the Config struct that represents the optional `fcdev.yaml`
//! file. It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for every field, and validation of config values.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use types::DEFAULT_CONFIG_FILE;
