use thiserror::Error;

/// Errors returned by the Gemini client and the strict advisor paths.
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// Network or TLS failure. The URL (which carries the API key) is
    /// stripped before wrapping.
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    #[error("unexpected HTTP status {status} from {context}")]
    UnexpectedStatus { status: u16, context: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The model answered without any text part (blocked prompt, safety
    /// filter, or an empty candidate list).
    #[error("model returned no text for {context}")]
    EmptyResponse { context: String },

    #[error("no JSON object found in model output for {context}")]
    NoJsonObject { context: String },

    #[error("invalid base URL '{base_url}': {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

impl From<reqwest::Error> for AdvisorError {
    fn from(err: reqwest::Error) -> Self {
        AdvisorError::Http(err.without_url())
    }
}
