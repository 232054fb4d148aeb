//! Error types for the Bank Account Data client.
//!
//! Two families of failure reach callers. Transport and decoding failures
//! (network errors, malformed JSON, non-success status on a `GET` or on the
//! token endpoint) are passed through untranslated. A non-success status on a
//! `POST`, `PUT` or `DELETE` becomes [`Error::RequestFailed`], which always
//! carries the raw response body as text.

use thiserror::Error;

/// A specialized `Result` type for Bank Account Data operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for all client operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP transport failure, or a non-success status on a GET/token call
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A create, replace or delete call returned a non-success status
    #[error("Request failed with status {status}: {body}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// Raw response body, exactly as received
        body: String,
    },

    /// URL parsing or joining failed
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// HTTP status code attached to this error, if there is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::RequestFailed { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Raw response body for [`Error::RequestFailed`].
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Error::RequestFailed { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Returns `true` if this error indicates a client-side issue
    /// (4xx status, invalid input, bad configuration).
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::InvalidInput(_) | Error::Config(_) => true,
            _ => matches!(self.status(), Some(s) if (400..500).contains(&s)),
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        matches!(self.status(), Some(s) if s >= 500)
    }
}
