//! Pulling a JSON object out of free-form model output.
//!
//! Models wrap JSON in prose or markdown fences often enough that the text is
//! never parsed directly. The first `{` through the last `}` is taken as the
//! candidate object, trailing commas are stripped, and the result is handed
//! to `serde_json`.

use std::sync::LazyLock;

use regex::Regex;
use serde::de::DeserializeOwned;

use crate::error::AdvisorError;

static JSON_OBJECT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").expect("valid regex"));

/// Trailing comma before a closing brace or bracket. Applied to the raw
/// text, so a string value containing `", }"` loses its comma too; model
/// output is repaired on a best-effort basis only.
static TRAILING_COMMA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",(\s*[}\]])").expect("valid regex"));

/// Greedy match from the first `{` to the last `}` in `text`.
#[must_use]
pub fn extract_json_object(text: &str) -> Option<&str> {
    JSON_OBJECT_RE.find(text).map(|m| m.as_str())
}

/// Extract and deserialize the JSON object embedded in `text`.
///
/// # Errors
///
/// Returns [`AdvisorError::NoJsonObject`] when the text contains no braces,
/// or [`AdvisorError::Deserialize`] when the candidate does not decode as `T`.
pub fn parse_json_object<T: DeserializeOwned>(text: &str, context: &str) -> Result<T, AdvisorError> {
    let candidate = extract_json_object(text).ok_or_else(|| AdvisorError::NoJsonObject {
        context: context.to_string(),
    })?;
    let cleaned = TRAILING_COMMA_RE.replace_all(candidate, "$1");
    serde_json::from_str(&cleaned).map_err(|e| AdvisorError::Deserialize {
        context: context.to_string(),
        source: e,
    })
}
