//! Config struct definition and default implementation.

use super::types::*;
use serde::Deserialize;

/// Configuration for the fcdev tool chains.
///
/// This struct represents the contents of `fcdev.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Test runner settings
    // =========================================================================
    /// Editor command used to run the test framework headlessly.
    /// Parsed with shell-words, so extra flags are allowed (e.g. `nvim -u NONE`).
    #[serde(default = "default_editor")]
    pub editor: String,

    /// Lua test framework script passed to `-l`.
    #[serde(default = "default_framework")]
    pub framework: String,

    /// Seconds before the editor process is killed.
    #[serde(default = "default_test_timeout_secs")]
    pub test_timeout_secs: u64,

    /// Glob matched against file names when a directory is given to `test`.
    #[serde(default = "default_spec_pattern")]
    pub spec_pattern: String,

    // =========================================================================
    // Template generator settings
    // =========================================================================
    /// Chat completion endpoint (the api key is appended as a query parameter).
    #[serde(default = "default_chat_endpoint")]
    pub chat_endpoint: String,

    /// File holding the api key.
    #[serde(default = "default_token_file")]
    pub token_file: String,

    /// Directory of markdown templates.
    #[serde(default = "default_template_dir")]
    pub template_dir: String,

    /// Directory receiving generated Lua templates.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Pause between chat requests.
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,

    /// Whether to wipe `output_dir` before generating.
    #[serde(default = "default_true")]
    pub clean_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            editor: default_editor(),
            framework: default_framework(),
            test_timeout_secs: default_test_timeout_secs(),
            spec_pattern: default_spec_pattern(),
            chat_endpoint: default_chat_endpoint(),
            token_file: default_token_file(),
            template_dir: default_template_dir(),
            output_dir: default_output_dir(),
            request_delay_ms: default_request_delay_ms(),
            clean_output: default_true(),
        }
    }
}
