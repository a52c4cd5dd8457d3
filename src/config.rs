//! Process configuration, resolved once at startup.
//!
//! The API credential is read from the environment exactly once and
//! injected into the service; nothing else in the crate touches
//! `std::env`. An absent credential is a valid configuration: the service
//! runs in chart-only degraded mode.

use std::env;

/// Default model identifier for the Anthropic Messages API.
pub const DEFAULT_MODEL: &str = "claude-haiku-4-5-20251001";

/// Default output-token budget per completion.
pub const DEFAULT_MAX_TOKENS: u32 = 1200;

/// Runtime settings for the server and the completion capability.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Anthropic API key; `None` switches auto mode to chart-only replies.
    pub api_key: Option<String>,
    pub model: String,
    pub max_tokens: u32,
    pub host: String,
    pub port: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Settings {
    /// Read settings from the environment.
    ///
    /// - `ANTHROPIC_API_KEY`: completion credential (optional)
    /// - `FORTUNE_MODEL`: model identifier override
    /// - `FORTUNE_MAX_TOKENS`: output-token budget override
    /// - `HOST` / `PORT`: bind address
    pub fn from_env() -> Self {
        let defaults = Settings::default();
        Self {
            api_key: env::var("ANTHROPIC_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            model: env::var("FORTUNE_MODEL").unwrap_or(defaults.model),
            max_tokens: env::var("FORTUNE_MAX_TOKENS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_tokens),
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
        }
    }
}
