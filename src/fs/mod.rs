//! Filesystem helpers for fcdev.
//!
//! Generated and refined templates are rewritten in place, so writes go through
//! a temp-file-and-rename step and never leave a half-written Lua file behind.

pub mod atomic;
mod tree;

pub use atomic::atomic_write_file;
pub use tree::{read_text, remove_tree};
