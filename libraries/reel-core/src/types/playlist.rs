/// Playlist domain types
use crate::types::PlaylistId;
use serde::{Deserialize, Serialize};

/// Who can see a playlist
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Owner only
    #[default]
    Private,
    /// Anyone with the link
    Public,
}

impl Visibility {
    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Private => "private",
            Visibility::Public => "public",
        }
    }
}

/// A playlist owned by the signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Display title
    pub title: String,

    /// Marks the distinguished Watch Later list
    #[serde(default)]
    pub is_watch_later: bool,

    /// Visibility (carried through, not interpreted by the save control)
    #[serde(default)]
    pub visibility: Visibility,
}

impl Playlist {
    /// Create a regular playlist
    pub fn new(id: PlaylistId, title: impl Into<String>, visibility: Visibility) -> Self {
        Self {
            id,
            title: title.into(),
            is_watch_later: false,
            visibility,
        }
    }

    /// Create the Watch Later playlist
    pub fn watch_later(id: PlaylistId) -> Self {
        Self {
            id,
            title: "Watch Later".to_string(),
            is_watch_later: true,
            visibility: Visibility::Private,
        }
    }
}

/// Membership of one video across the user's playlists
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoStatus {
    /// Whether the video sits in Watch Later
    pub is_in_watch_later: bool,

    /// Playlists that currently contain the video
    pub playlists: Vec<PlaylistId>,
}

impl VideoStatus {
    /// Whether `playlist` is listed as containing the video
    pub fn contains(&self, playlist: &PlaylistId) -> bool {
        self.playlists.contains(playlist)
    }
}
