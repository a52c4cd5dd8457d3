//! Fortune reading orchestration.
//!
//! Wraps the completion capability with the one policy the rest of the
//! system relies on: a missing credential is an explicit state (degraded
//! mode), not a crash, and the model's reply is funneled through the JSON
//! extraction heuristic exactly once.

use std::sync::Arc;

use thiserror::Error;

use super::prompt::PromptPair;
use crate::llm::{extract_json, CompletionProvider, LlmError};
use crate::models::zodiac::UnknownSign;

/// How much of an unparseable reply to keep in diagnostics.
const REPLY_SNIPPET_LEN: usize = 200;

/// Everything that can go wrong while producing a reading.
#[derive(Debug, Error)]
pub enum FortuneError {
    /// A required request field was absent. Maps to 400.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A sign name did not parse. Maps to 400.
    #[error(transparent)]
    UnknownSign(#[from] UnknownSign),

    /// No API credential is configured and the caller required one.
    #[error("no completion credential configured (set ANTHROPIC_API_KEY)")]
    CredentialMissing,

    /// The completion capability failed.
    #[error(transparent)]
    Completion(#[from] LlmError),

    /// The model's reply contained no parseable JSON object.
    #[error("completion reply contained no parseable JSON: {snippet}")]
    ResponseFormat { snippet: String },
}

impl FortuneError {
    /// Whether this error is the caller's fault (a 400) rather than a
    /// downstream failure (a 500).
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            FortuneError::MissingField(_) | FortuneError::UnknownSign(_)
        )
    }
}

/// Stateless dispatcher around an optional completion provider.
///
/// Shared read-only across requests; concurrent use needs no
/// coordination.
pub struct FortuneService {
    provider: Option<Arc<dyn CompletionProvider>>,
}

impl FortuneService {
    pub fn new(provider: Option<Arc<dyn CompletionProvider>>) -> Self {
        Self { provider }
    }

    /// Service with no credential configured: chart-only degraded mode.
    pub fn disabled() -> Self {
        Self::new(None)
    }

    /// Whether a completion provider is configured.
    pub fn is_enabled(&self) -> bool {
        self.provider.is_some()
    }

    /// Send the prompt pair and parse the JSON object out of the reply.
    ///
    /// The payload schema is a contract with the external model; beyond
    /// "is a JSON value" it is passed through untouched. No retries: the
    /// first failure surfaces immediately.
    pub async fn reading(&self, prompt: &PromptPair) -> Result<serde_json::Value, FortuneError> {
        let provider = self
            .provider
            .as_ref()
            .ok_or(FortuneError::CredentialMissing)?;

        let raw = provider.complete(&prompt.system, &prompt.user).await?;

        extract_json(&raw).map_err(|err| {
            tracing::warn!(%err, "completion reply was not JSON");
            FortuneError::ResponseFormat {
                snippet: crate::llm::truncate(&raw, REPLY_SNIPPET_LEN),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::prompt::build_manual_prompt;
    use crate::models::Zodiac;
    use async_trait::async_trait;

    struct Scripted(&'static str);

    #[async_trait]
    impl CompletionProvider for Scripted {
        async fn complete(&self, _system: &str, _user: &str) -> Result<String, LlmError> {
            Ok(self.0.to_string())
        }
    }

    fn prompt() -> PromptPair {
        build_manual_prompt(Zodiac::Aries, Zodiac::Sagittarius, None, None)
    }

    #[tokio::test]
    async fn disabled_service_reports_missing_credential() {
        let service = FortuneService::disabled();
        assert!(!service.is_enabled());
        let err = service.reading(&prompt()).await.unwrap_err();
        assert!(matches!(err, FortuneError::CredentialMissing));
    }

    #[tokio::test]
    async fn fenced_reply_is_unwrapped() {
        let service =
            FortuneService::new(Some(Arc::new(Scripted("```json\n{\"a\":1}\n```"))));
        let value = service.reading(&prompt()).await.unwrap();
        assert_eq!(value, serde_json::json!({"a": 1}));
    }

    #[tokio::test]
    async fn non_json_reply_is_a_format_error() {
        let service = FortuneService::new(Some(Arc::new(Scripted("the stars are silent"))));
        let err = service.reading(&prompt()).await.unwrap_err();
        match err {
            FortuneError::ResponseFormat { snippet } => {
                assert!(snippet.contains("stars are silent"));
            }
            other => panic!("expected ResponseFormat, got {other:?}"),
        }
        assert!(!FortuneError::CredentialMissing.is_input_error());
        assert!(FortuneError::MissingField("year").is_input_error());
    }
}
