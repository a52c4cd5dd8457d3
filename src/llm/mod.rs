//! Outbound completion capability.
//!
//! The external model is used through one narrow seam: a provider trait
//! whose single operation takes a system prompt and a user prompt and
//! returns free text. The concrete provider talks to the Anthropic
//! Messages API; tests substitute a scripted provider.

pub mod client;
pub mod extract;

pub use client::{AnthropicClient, CompletionProvider};
pub use extract::extract_json;

use thiserror::Error;

/// Errors from the completion capability.
#[derive(Debug, Error)]
pub enum LlmError {
    /// The API answered with a non-success status.
    #[error("completion API returned status {status}: {body}")]
    Api { status: u16, body: String },

    /// The request never completed (DNS, TLS, connection reset, ...).
    #[error("completion transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered 200 but the envelope was not the expected shape.
    #[error("malformed completion envelope: {0}")]
    Malformed(String),
}

/// Cap a diagnostic string at `max` bytes on a char boundary.
///
/// Upstream bodies can be arbitrarily large; error messages carry only a
/// prefix.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…", &s[..end])
}

#[cfg(test)]
mod tests {
    use super::truncate;

    #[test]
    fn truncate_short_strings_unchanged() {
        assert_eq!(truncate("abc", 200), "abc");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let s = "aé".repeat(100);
        let t = truncate(&s, 5);
        assert!(t.ends_with('…'));
        assert!(t.len() <= 5 + '…'.len_utf8());
    }
}
