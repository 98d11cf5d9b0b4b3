//! Error types for the Reel server client.

use reel_core::ReelError;
use thiserror::Error;

/// Errors that can occur when interacting with a Reel server.
#[derive(Error, Debug)]
pub enum ServerClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error response
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Server answered with `success: false` (or no discriminator at all)
    #[error("Request rejected: {0}")]
    Rejected(String),

    /// Authentication required but no valid token was presented
    #[error("Authentication required")]
    AuthRequired,

    /// Resource missing on the server
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid server URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),
}

impl ServerClientError {
    /// Classify a reqwest failure that happened before a response arrived.
    pub(crate) fn from_send(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            ServerClientError::ServerUnreachable(err.to_string())
        } else {
            ServerClientError::Request(err)
        }
    }
}

impl From<ServerClientError> for ReelError {
    fn from(err: ServerClientError) -> Self {
        match err {
            ServerClientError::Request(e) => ReelError::Network(e.to_string()),
            ServerClientError::ServerUnreachable(msg) => ReelError::Network(msg),
            ServerClientError::ServerError { status, message } => {
                ReelError::Server { status, message }
            }
            ServerClientError::Rejected(msg) => ReelError::Rejected(msg),
            ServerClientError::AuthRequired => ReelError::AuthRequired,
            ServerClientError::NotFound(what) => ReelError::not_found("Resource", what),
            ServerClientError::InvalidUrl(msg) => ReelError::InvalidInput(msg),
            ServerClientError::ParseError(msg) => ReelError::Parse(msg),
        }
    }
}

/// Result type for server client operations.
pub type Result<T> = std::result::Result<T, ServerClientError>;
