//! Markdown-to-Lua template generation.
//!
//! Each markdown template under the source directory is sent to the chat
//! endpoint together with a fixed conversion instruction. The reassembled
//! answer is written to the mirrored location under the output directory and
//! then refined in place.

mod instructions;
mod paths;
mod pipeline;

#[cfg(test)]
mod tests;

pub use instructions::LUA_TABLE_INSTRUCTIONS;
pub use paths::{is_template_source, output_path};
pub use pipeline::{GenerateSettings, GenerationSummary, generate_all};
