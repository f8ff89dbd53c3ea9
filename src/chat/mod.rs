//! Client for the Fitten Code chat endpoint.
//!
//! A request carries one fully formatted prompt; the response body is a series
//! of newline-delimited JSON objects, each holding a `delta` text fragment.

mod client;
mod prompt;
mod stream;

pub use client::{ChatBackend, ChatClient, load_api_key};
pub use prompt::{Refs, build_prompt};
pub use stream::collect_deltas;
