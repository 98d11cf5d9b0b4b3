//! Error types for the save control

use reel_core::{PlaylistId, ReelError};
use thiserror::Error;

/// Save control errors
#[derive(Debug, Error)]
pub enum SaveError {
    /// No session: the control is closed or was never opened for a signed-in user
    #[error("Save control is not open for a signed-in user")]
    NotOpen,

    /// Playlist name is empty after trimming
    #[error("Playlist name cannot be empty")]
    EmptyName,

    /// Remote call failed
    #[error(transparent)]
    Service(#[from] ReelError),

    /// The playlist was created but adding the video to it failed
    #[error("Created playlist {playlist_id} but could not add the video: {source}")]
    EnrollFailed {
        /// The playlist that now exists on the server
        playlist_id: PlaylistId,
        /// Why the add failed
        source: ReelError,
    },
}

impl SaveError {
    /// Whether the error was rejected locally before any request was sent
    pub fn is_precondition(&self) -> bool {
        matches!(self, SaveError::NotOpen | SaveError::EmptyName)
    }
}

/// Result type for save control operations
pub type Result<T> = std::result::Result<T, SaveError>;
