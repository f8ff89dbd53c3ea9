//! The individual refinement rules.

use regex::{Captures, Regex};
use std::fmt;
use std::sync::LazyLock;

/// `<|` followed by whitespace, or whitespace followed by `|>`.
static DELIMITER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<\|\s*|\s*\|>").expect("Invalid delimiter regex"));

/// A whole `<| name |>` tag with a simple identifier inside.
static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<\|\s*([A-Za-z0-9_-]+)\s*\|>").expect("Invalid tag regex")
});

/// One or more backslashes directly before a backtick.
static ESCAPED_BACKTICK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\+`").expect("Invalid escaped backtick regex"));

/// A single refinement pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefinePass {
    /// Remove spaces inside `<| ... |>` delimiters.
    NormalizeDelimiters,
    /// Strip trailing whitespace from each line.
    TrimTrailingWhitespace,
    /// Make sure the text ends with `\n`.
    EnsureTrailingNewline,
    /// Turn `\`` back into a plain backtick.
    UnescapeBackticks,
    /// Collapse `<| name |>` to `<|name|>` for identifier-only tags.
    CompactTags,
}

/// Passes applied to every generated template, in order.
pub const DEFAULT_PASSES: [RefinePass; 4] = [
    RefinePass::NormalizeDelimiters,
    RefinePass::TrimTrailingWhitespace,
    RefinePass::EnsureTrailingNewline,
    RefinePass::UnescapeBackticks,
];

impl RefinePass {
    /// Apply this pass to `text`.
    pub fn apply(self, text: &str) -> String {
        match self {
            RefinePass::NormalizeDelimiters => normalize_delimiters(text),
            RefinePass::TrimTrailingWhitespace => trim_trailing_whitespace(text),
            RefinePass::EnsureTrailingNewline => ensure_trailing_newline(text),
            RefinePass::UnescapeBackticks => unescape_backticks(text),
            RefinePass::CompactTags => compact_tags(text),
        }
    }

    /// Short name used in logs.
    pub fn name(self) -> &'static str {
        match self {
            RefinePass::NormalizeDelimiters => "normalize-delimiters",
            RefinePass::TrimTrailingWhitespace => "trim-trailing-whitespace",
            RefinePass::EnsureTrailingNewline => "ensure-trailing-newline",
            RefinePass::UnescapeBackticks => "unescape-backticks",
            RefinePass::CompactTags => "compact-tags",
        }
    }
}

impl fmt::Display for RefinePass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Remove space characters adjacent to the inside of `<|` and `|>`.
///
/// Only spaces are removed; tabs and newlines inside a match are kept.
pub fn normalize_delimiters(text: &str) -> String {
    DELIMITER_REGEX
        .replace_all(text, |caps: &Captures| caps[0].replace(' ', ""))
        .into_owned()
}

/// Strip trailing whitespace from every line, keeping the line breaks.
pub fn trim_trailing_whitespace(text: &str) -> String {
    text.split('\n')
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Append a newline unless the text already ends with one.
pub fn ensure_trailing_newline(text: &str) -> String {
    if text.ends_with('\n') {
        text.to_string()
    } else {
        format!("{}\n", text)
    }
}

/// Replace each run of backslashes before a backtick with the backtick alone.
pub fn unescape_backticks(text: &str) -> String {
    ESCAPED_BACKTICK_REGEX.replace_all(text, "`").into_owned()
}

/// Rewrite `<|  name  |>` as `<|name|>` when `name` is a plain identifier.
pub fn compact_tags(text: &str) -> String {
    TAG_REGEX.replace_all(text, "<|$1|>").into_owned()
}

/// Apply [`DEFAULT_PASSES`] in order.
pub fn refine_text(text: &str) -> String {
    DEFAULT_PASSES
        .iter()
        .fold(text.to_string(), |acc, pass| pass.apply(&acc))
}
