//! `PlaylistService` over HTTP.

use crate::client::ReelServerClient;
use async_trait::async_trait;
use reel_core::{
    Credential, Playlist, PlaylistId, PlaylistService, Result, VideoId, VideoStatus, Visibility,
};

#[async_trait]
impl PlaylistService for ReelServerClient {
    async fn my_playlists(&self, credential: &Credential) -> Result<Vec<Playlist>> {
        Ok(self.playlists(credential).my_playlists().await?)
    }

    async fn video_status(&self, credential: &Credential, video: &VideoId) -> Result<VideoStatus> {
        Ok(self.playlists(credential).video_status(video).await?)
    }

    async fn toggle_watch_later(&self, credential: &Credential, video: &VideoId) -> Result<bool> {
        Ok(self.playlists(credential).toggle_watch_later(video).await?)
    }

    async fn add_video(
        &self,
        credential: &Credential,
        playlist: &PlaylistId,
        video: &VideoId,
    ) -> Result<()> {
        Ok(self.playlists(credential).add_video(playlist, video).await?)
    }

    async fn remove_video(
        &self,
        credential: &Credential,
        playlist: &PlaylistId,
        video: &VideoId,
    ) -> Result<()> {
        Ok(self
            .playlists(credential)
            .remove_video(playlist, video)
            .await?)
    }

    async fn create_playlist(
        &self,
        credential: &Credential,
        title: &str,
        visibility: Visibility,
    ) -> Result<Playlist> {
        Ok(self
            .playlists(credential)
            .create_playlist(title, visibility)
            .await?)
    }
}
