//! Error types for the Finnhub client

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building, sending or processing a request
#[derive(Error, Debug)]
pub enum Error {
    /// No API key was configured
    #[error("API key not set (expected {} in the environment)", crate::client::API_KEY_VAR)]
    MissingApiKey,

    /// The request could not be built from its parameters
    #[error("invalid request: {0}")]
    RequestConstruction(String),

    /// The connection failed or the transport broke before a response head arrived
    #[error("network error: {0}")]
    Network(String),

    /// The response body could not be read in full
    #[error("I/O error reading response body: {0}")]
    Io(String),

    /// The API answered with a non-success status
    #[error("API error (status {status}): {message}")]
    Api {
        /// Value of the `X-Request-Id` header, if any
        request_id: Option<String>,
        /// HTTP status code
        status: u16,
        /// Raw response body
        message: String,
    },

    /// The response body is not the expected JSON
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing the result failed
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// Anything else
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Whether the error happened before any byte reached the server
    pub fn is_construction(&self) -> bool {
        matches!(self, Error::MissingApiKey | Error::RequestConstruction(_))
    }
}
