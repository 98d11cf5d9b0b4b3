//! Types for Reel API requests and responses.

use reel_core::{Playlist, PlaylistId, VideoStatus, Visibility};
use serde::{Deserialize, Serialize};

/// Configuration for connecting to a Reel server.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the server (e.g., "https://reel.example.com")
    pub url: String,
    /// Whole-request timeout
    pub timeout_secs: u64,
    /// TCP connect timeout
    pub connect_timeout_secs: u64,
}

impl ClientConfig {
    /// Create a new client config with default timeouts.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

// =============================================================================
// Server Info Types
// =============================================================================

/// Health information reported by the server.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerInfo {
    pub status: String,
    pub version: String,
}

// =============================================================================
// Envelope
// =============================================================================

/// Every playlist response carries a `success` discriminator.
pub(crate) trait Envelope {
    fn success(&self) -> bool;
    fn error(&self) -> Option<&str>;
}

macro_rules! envelope {
    ($ty:ty) => {
        impl Envelope for $ty {
            fn success(&self) -> bool {
                self.success
            }

            fn error(&self) -> Option<&str> {
                self.error.as_deref()
            }
        }
    };
}

// =============================================================================
// Playlist Types
// =============================================================================

/// Response from `GET /api/playlists`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub playlists: Vec<Playlist>,
}

/// A playlist containing the video, as listed by the status endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistRef {
    pub playlist_id: PlaylistId,
}

/// Response from `GET /api/playlists/status/{videoId}`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatusResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub is_in_watch_later: bool,
    #[serde(default)]
    pub playlists: Vec<PlaylistRef>,
}

impl From<VideoStatusResponse> for VideoStatus {
    fn from(response: VideoStatusResponse) -> Self {
        VideoStatus {
            is_in_watch_later: response.is_in_watch_later,
            playlists: response
                .playlists
                .into_iter()
                .map(|entry| entry.playlist_id)
                .collect(),
        }
    }
}

/// Response from `POST /api/playlists/watch-later/{videoId}`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchLaterResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    pub is_in_watch_later: Option<bool>,
}

/// Response from add/remove video endpoints.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AckResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// Request body for `POST /api/playlists`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub title: String,
    pub visibility: Visibility,
}

/// Response from `POST /api/playlists`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreatePlaylistResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    pub playlist: Option<Playlist>,
}

envelope!(PlaylistsResponse);
envelope!(VideoStatusResponse);
envelope!(WatchLaterResponse);
envelope!(AckResponse);
envelope!(CreatePlaylistResponse);
