/// Core error types for Reel
use thiserror::Error;

/// Result type alias using `ReelError`
pub type Result<T> = std::result::Result<T, ReelError>;

/// Errors surfaced by a [`PlaylistService`](crate::PlaylistService) call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReelError {
    /// The request never produced a response (unreachable, timeout, reset)
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered but reported `success: false`
    #[error("Request rejected: {0}")]
    Rejected(String),

    /// Credential missing, expired or refused
    #[error("Authentication required")]
    AuthRequired,

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Non-success HTTP status without a better classification
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Response body could not be decoded
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl ReelError {
    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create a logical rejection error
    pub fn rejected(msg: impl Into<String>) -> Self {
        Self::Rejected(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Whether the failure happened below the application protocol.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

impl From<serde_json::Error> for ReelError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
