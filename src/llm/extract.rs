//! Best-effort extraction of a JSON object from model output.
//!
//! Models are instructed to answer with bare JSON, but in practice the
//! object sometimes arrives wrapped in a markdown fence or surrounded by
//! prose. All of that heuristic lives behind this one function so call
//! sites see a plain `Result`.

use std::sync::LazyLock;

use regex::Regex;

/// ```json ... ``` fence, non-greedy so trailing prose is ignored.
static FENCED_JSON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```json\s*(.*?)```").expect("fenced-json pattern is valid")
});

/// Parse the JSON object embedded in `raw`.
///
/// Tries, in order: a fenced ```json block; the greedy first-`{` to
/// last-`}` substring; the raw text itself. The first candidate found is
/// parsed, and its parse error is returned verbatim on failure.
pub fn extract_json(raw: &str) -> Result<serde_json::Value, serde_json::Error> {
    let candidate = if let Some(caps) = FENCED_JSON.captures(raw) {
        caps.get(1).map(|m| m.as_str()).unwrap_or(raw)
    } else if let (Some(open), Some(close)) = (raw.find('{'), raw.rfind('}')) {
        if open < close {
            &raw[open..=close]
        } else {
            raw
        }
    } else {
        raw
    };

    serde_json::from_str(candidate.trim())
}
