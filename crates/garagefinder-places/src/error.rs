use thiserror::Error;

/// Errors returned by the Google Maps Platform client.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// Network or TLS failure. The request URL is stripped before wrapping
    /// so the API key never reaches logs.
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// Google answered 200 with a non-success envelope status.
    #[error("Google API status {status} for {context}: {message}")]
    ApiStatus {
        context: String,
        status: String,
        message: String,
    },

    #[error("unexpected HTTP status {status} from {context}")]
    UnexpectedStatus { status: u16, context: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{base_url}': {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

impl PlacesError {
    /// `true` when Google reported that the requested entity does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            PlacesError::ApiStatus { status, .. } => status == "NOT_FOUND",
            PlacesError::UnexpectedStatus { status, .. } => *status == 404,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for PlacesError {
    fn from(err: reqwest::Error) -> Self {
        PlacesError::Http(err.without_url())
    }
}
