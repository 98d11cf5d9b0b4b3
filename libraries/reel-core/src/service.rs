//! Remote playlist service contract

use crate::error::Result;
use crate::types::{Credential, Playlist, PlaylistId, VideoId, VideoStatus, Visibility};
use async_trait::async_trait;

/// Remote playlist service
///
/// This trait abstracts the playlist backend so the save control can run
/// against the HTTP client, the in-process stub, or a test double. Every
/// call receives the caller's credential explicitly.
///
/// Implementations must map a response whose `success` discriminator is
/// missing or false to [`ReelError::Rejected`](crate::ReelError::Rejected),
/// even when the transport itself succeeded.
#[async_trait]
pub trait PlaylistService: Send + Sync {
    /// Playlists owned by the credential's user, in display order.
    async fn my_playlists(&self, credential: &Credential) -> Result<Vec<Playlist>>;

    /// Which playlists (and whether Watch Later) currently contain `video`.
    async fn video_status(&self, credential: &Credential, video: &VideoId) -> Result<VideoStatus>;

    /// Flip Watch Later membership; returns the resulting membership.
    async fn toggle_watch_later(&self, credential: &Credential, video: &VideoId) -> Result<bool>;

    /// Add `video` to `playlist`.
    async fn add_video(
        &self,
        credential: &Credential,
        playlist: &PlaylistId,
        video: &VideoId,
    ) -> Result<()>;

    /// Remove `video` from `playlist`.
    async fn remove_video(
        &self,
        credential: &Credential,
        playlist: &PlaylistId,
        video: &VideoId,
    ) -> Result<()>;

    /// Create an empty playlist.
    async fn create_playlist(
        &self,
        credential: &Credential,
        title: &str,
        visibility: Visibility,
    ) -> Result<Playlist>;
}
