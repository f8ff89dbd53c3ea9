//! Config loading, validation, and utility operations.

use super::model::Config;
use super::types::DEFAULT_CONFIG_FILE;
use crate::error::{FcError, Result};
use reqwest::Url;
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            FcError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the effective config.
    ///
    /// An explicit path must exist. Without one, `fcdev.yaml` in `dir` is used
    /// when present, otherwise defaults apply.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "loading config");
            Self::load(candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as a map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| FcError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `editor` must contain a program
    /// - `test_timeout_secs` must be positive
    /// - `spec_pattern` must be non-empty
    /// - `chat_endpoint` must be an http(s) URL
    pub fn validate(&self) -> Result<()> {
        let editor = shell_words::split(&self.editor).map_err(|e| {
            FcError::UserError(format!(
                "config validation failed: editor '{}' cannot be parsed: {}",
                self.editor, e
            ))
        })?;
        if editor.is_empty() {
            return Err(FcError::UserError(
                "config validation failed: editor must not be empty".to_string(),
            ));
        }

        if self.test_timeout_secs == 0 {
            return Err(FcError::UserError(
                "config validation failed: test_timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.spec_pattern.trim().is_empty() {
            return Err(FcError::UserError(
                "config validation failed: spec_pattern must not be empty".to_string(),
            ));
        }

        let endpoint = Url::parse(&self.chat_endpoint).map_err(|e| {
            FcError::UserError(format!(
                "config validation failed: chat_endpoint '{}' is not a URL: {}",
                self.chat_endpoint, e
            ))
        })?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(FcError::UserError(format!(
                "config validation failed: chat_endpoint must use http or https (found '{}')",
                endpoint.scheme()
            )));
        }

        Ok(())
    }
}
