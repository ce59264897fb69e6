use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("invalid server url '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("server url '{0}' cannot carry an API path")]
    OpaqueUrl(String),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed collection body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("backend rejected the request with {status}")]
    Rejected {
        status: StatusCode,
        /// The backend's `error` field, when it sent one.
        message: Option<String>,
    },
}

impl BoardError {
    /// Whether the backend answered with a non-success status, as opposed to
    /// the request never completing.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}
