//! Anthropic Messages API client.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use super::{truncate, LlmError};

/// How much of an upstream error body to keep in diagnostics.
const BODY_SNIPPET_LEN: usize = 200;

/// A capability that turns a (system, user) prompt pair into text.
///
/// One outbound call per request, no retries, no internal timeout; callers
/// needing bounded latency impose their own deadline.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, system: &str, user: &str) -> Result<String, LlmError>;
}

/// Concrete provider for the Anthropic Messages API.
pub struct AnthropicClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
}

impl AnthropicClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: "https://api.anthropic.com".to_string(),
            api_key: api_key.into(),
            model: model.into(),
            max_tokens,
        }
    }

    /// Point the client at a different host. Used by tests with a local
    /// mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Successful Messages API envelope, reduced to what we read.
#[derive(Debug, Deserialize)]
struct MessagesEnvelope {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

#[async_trait]
impl CompletionProvider for AnthropicClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, LlmError> {
        let body = json!({
            "model": self.model,
            "max_tokens": self.max_tokens,
            "system": system,
            "messages": [{ "role": "user", "content": user }],
        });

        tracing::debug!(model = %self.model, "dispatching completion request");

        let response = self
            .http
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let raw = response.text().await?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "completion API error");
            return Err(LlmError::Api {
                status: status.as_u16(),
                body: truncate(&raw, BODY_SNIPPET_LEN),
            });
        }

        let envelope: MessagesEnvelope = serde_json::from_str(&raw)
            .map_err(|e| LlmError::Malformed(format!("{e}: {}", truncate(&raw, BODY_SNIPPET_LEN))))?;

        let text = envelope
            .content
            .first()
            .and_then(|block| block.text.as_deref())
            .ok_or_else(|| {
                LlmError::Malformed(format!(
                    "no text content block: {}",
                    truncate(&raw, BODY_SNIPPET_LEN)
                ))
            })?;

        Ok(text.trim().to_string())
    }
}
