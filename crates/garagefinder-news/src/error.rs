use thiserror::Error;

#[derive(Debug, Error)]
pub enum NewsError {
    /// Transport failure. The feed URL is stripped before wrapping.
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },
}

impl From<reqwest::Error> for NewsError {
    fn from(err: reqwest::Error) -> Self {
        NewsError::Http(err.without_url())
    }
}
