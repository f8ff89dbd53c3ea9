//! Blocking HTTP client for the chat endpoint.

use crate::error::{FcError, Result};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Serialize;
use std::path::Path;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);
const USER_AGENT: &str = concat!("fcdev/", env!("CARGO_PKG_VERSION"));

/// Anything that can turn a prompt into a raw response body.
///
/// The generator is written against this trait so it can run without a server.
pub trait ChatBackend {
    /// Send one prompt and return the undecoded response body.
    fn complete(&self, prompt: &str) -> Result<String>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    inputs: &'a str,
    ft_token: &'a str,
}

/// Client for the Fitten Code `codeapi/chat` endpoint.
#[derive(Debug, Clone)]
pub struct ChatClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl ChatClient {
    /// Create a client for `endpoint` authenticated with `api_key`.
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FcError::ChatError(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        })
    }
}

impl ChatBackend for ChatClient {
    fn complete(&self, prompt: &str) -> Result<String> {
        let body = ChatRequest {
            inputs: prompt,
            ft_token: &self.api_key,
        };

        tracing::debug!(endpoint = %self.endpoint, prompt_len = prompt.len(), "sending chat request");

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("apikey", self.api_key.as_str())])
            .json(&body)
            .send()
            .map_err(|e| FcError::ChatError(format!("request to {} failed: {}", self.endpoint, e)))?;

        let status = response.status();
        tracing::debug!(%status, "chat response received");

        if status != StatusCode::OK {
            return Err(FcError::ChatError(format!("HTTP {}", status.as_u16())));
        }

        response
            .text()
            .map_err(|e| FcError::ChatError(format!("failed to read response body: {}", e)))
    }
}

/// Read the api key from a token file, trimming surrounding whitespace.
pub fn load_api_key(path: &Path) -> Result<String> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        FcError::UserError(format!(
            "failed to read api key from '{}': {}\n\
             Fix: put your Fitten Code api key in that file or pass --token-file.",
            path.display(),
            e
        ))
    })?;

    let key = raw.trim();
    if key.is_empty() {
        return Err(FcError::UserError(format!(
            "api key file '{}' is empty",
            path.display()
        )));
    }

    Ok(key.to_string())
}
