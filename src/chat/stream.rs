//! Reassembly of newline-delimited JSON responses.

use serde_json::Value;

/// Concatenate the `delta` fragments of a response body in arrival order.
///
/// Blank lines are skipped. Lines that are not JSON objects are logged and
/// skipped; a chunk without a `delta` contributes nothing.
pub fn collect_deltas(body: &str) -> String {
    let mut text = String::new();

    for (index, line) in body.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<Value>(line) {
            Ok(Value::Object(chunk)) => {
                if let Some(delta) = chunk.get("delta").and_then(Value::as_str) {
                    text.push_str(delta);
                }
            }
            Ok(_) => {
                tracing::warn!(line = index + 1, "skipping response line that is not an object");
            }
            Err(e) => {
                tracing::warn!(line = index + 1, error = %e, "skipping undecodable response line");
            }
        }
    }

    text
}
