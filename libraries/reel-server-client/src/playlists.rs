//! Playlist operations for a Reel server.

use crate::error::{Result, ServerClientError};
use crate::types::{
    AckResponse, CreatePlaylistRequest, CreatePlaylistResponse, Envelope, PlaylistsResponse,
    VideoStatusResponse, WatchLaterResponse,
};
use reel_core::{Credential, Playlist, PlaylistId, VideoId, VideoStatus, Visibility};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

/// Playlist client for a Reel server.
///
/// Borrowed from [`ReelServerClient::playlists`](crate::ReelServerClient::playlists);
/// every request carries the credential it was created with.
pub struct PlaylistClient<'a> {
    http: &'a Client,
    base_url: &'a str,
    credential: &'a Credential,
}

impl<'a> PlaylistClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str, credential: &'a Credential) -> Self {
        Self {
            http,
            base_url,
            credential,
        }
    }

    /// Get the signed-in user's playlists.
    pub async fn my_playlists(&self) -> Result<Vec<Playlist>> {
        let url = self.endpoint(&["api", "playlists"])?;
        debug!(url = %url, "Fetching playlists");

        let response: PlaylistsResponse = self.send(self.http.get(url), "playlists").await?;

        debug!(playlists = response.playlists.len(), "Fetched playlists");
        Ok(response.playlists)
    }

    /// Get which playlists contain a video.
    pub async fn video_status(&self, video: &VideoId) -> Result<VideoStatus> {
        let url = self.endpoint(&["api", "playlists", "status", video.as_str()])?;
        debug!(url = %url, video_id = %video, "Fetching video status");

        let response: VideoStatusResponse =
            self.send(self.http.get(url), "video status").await?;

        Ok(response.into())
    }

    /// Toggle Watch Later membership for a video.
    ///
    /// Returns the membership the server ended up with.
    pub async fn toggle_watch_later(&self, video: &VideoId) -> Result<bool> {
        let url = self.endpoint(&["api", "playlists", "watch-later", video.as_str()])?;
        debug!(url = %url, video_id = %video, "Toggling watch later");

        let response: WatchLaterResponse =
            self.send(self.http.post(url), "watch later").await?;

        response.is_in_watch_later.ok_or_else(|| {
            ServerClientError::ParseError("watch later response missing isInWatchLater".into())
        })
    }

    /// Add a video to a playlist.
    pub async fn add_video(&self, playlist: &PlaylistId, video: &VideoId) -> Result<()> {
        let url = self.endpoint(&[
            "api",
            "playlists",
            playlist.as_str(),
            "videos",
            video.as_str(),
        ])?;
        debug!(url = %url, playlist_id = %playlist, video_id = %video, "Adding video");

        let _: AckResponse = self.send(self.http.post(url), "add video").await?;
        Ok(())
    }

    /// Remove a video from a playlist.
    pub async fn remove_video(&self, playlist: &PlaylistId, video: &VideoId) -> Result<()> {
        let url = self.endpoint(&[
            "api",
            "playlists",
            playlist.as_str(),
            "videos",
            video.as_str(),
        ])?;
        debug!(url = %url, playlist_id = %playlist, video_id = %video, "Removing video");

        let _: AckResponse = self.send(self.http.delete(url), "remove video").await?;
        Ok(())
    }

    /// Create a new, empty playlist.
    pub async fn create_playlist(&self, title: &str, visibility: Visibility) -> Result<Playlist> {
        let url = self.endpoint(&["api", "playlists"])?;
        debug!(url = %url, title = %title, visibility = visibility.as_str(), "Creating playlist");

        let request = CreatePlaylistRequest {
            title: title.to_string(),
            visibility,
        };

        let response: CreatePlaylistResponse = self
            .send(self.http.post(url).json(&request), "create playlist")
            .await?;

        response.playlist.ok_or_else(|| {
            ServerClientError::ParseError("create response missing playlist".into())
        })
    }

    /// Build an endpoint URL, percent-encoding each path segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url =
            Url::parse(self.base_url).map_err(|e| ServerClientError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| ServerClientError::InvalidUrl("URL cannot be a base".into()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send an authenticated request and unwrap the `success` envelope.
    async fn send<T>(&self, request: RequestBuilder, what: &str) -> Result<T>
    where
        T: DeserializeOwned + Envelope,
    {
        let response = request
            .bearer_auth(self.credential.token())
            .send()
            .await
            .map_err(ServerClientError::from_send)?;

        let body: T = decode(response, what).await?;

        if body.success() {
            Ok(body)
        } else {
            let message = body
                .error()
                .map_or_else(|| format!("{} failed", what), ToString::to_string);
            warn!(error = %message, "Server rejected {}", what);
            Err(ServerClientError::Rejected(message))
        }
    }
}

async fn decode<T: DeserializeOwned>(response: Response, what: &str) -> Result<T> {
    let status = response.status();

    if status.is_success() {
        response.json().await.map_err(|e| {
            ServerClientError::ParseError(format!("Failed to parse {} response: {}", what, e))
        })
    } else if status.as_u16() == 401 {
        Err(ServerClientError::AuthRequired)
    } else {
        let error_text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<AckResponse>(&error_text)
            .ok()
            .and_then(|ack| ack.error)
            .unwrap_or(error_text);

        if status.as_u16() == 404 {
            Err(ServerClientError::NotFound(message))
        } else {
            Err(ServerClientError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }
}
