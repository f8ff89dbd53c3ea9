//! Textual clean-up passes for generated Lua templates.
//!
//! Each pass is a pure `&str -> String` rewrite and is idempotent. The file
//! helpers chain them, write the result back once, and report which passes
//! actually changed something.

mod file;
mod rules;


// Re-export public API
pub use file::{RefineOutcome, refine_file, refine_path, refine_tree};
pub use rules::{
    DEFAULT_PASSES, RefinePass, compact_tags, ensure_trailing_newline, normalize_delimiters,
    refine_text, trim_trailing_whitespace, unescape_backticks,
};
