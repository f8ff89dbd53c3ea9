//! Configuration constants and defaults for fcdev.

/// File name looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "fcdev.yaml";

// Default value functions for serde
pub(crate) fn default_editor() -> String {
    "nvim".to_string()
}
pub(crate) fn default_framework() -> String {
    "test_framework.lua".to_string()
}
pub(crate) fn default_test_timeout_secs() -> u64 {
    30
}
pub(crate) fn default_spec_pattern() -> String {
    "*_spec.lua".to_string()
}
pub(crate) fn default_chat_endpoint() -> String {
    "https://fc.fittenlab.cn/codeapi/chat".to_string()
}
pub(crate) fn default_token_file() -> String {
    "ft_token".to_string()
}
pub(crate) fn default_template_dir() -> String {
    "template".to_string()
}
pub(crate) fn default_output_dir() -> String {
    "lua/fittencode/template".to_string()
}
pub(crate) fn default_request_delay_ms() -> u64 {
    1000
}
pub(crate) fn default_true() -> bool {
    true
}
