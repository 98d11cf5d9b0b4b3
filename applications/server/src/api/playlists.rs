/// Playlists API routes
///
/// Every success body carries `"success": true`; failures go through
/// [`ServerError`](crate::error::ServerError) and carry `"success": false`.
use crate::{error::Result, middleware::AuthenticatedUser, state::AppState};
use axum::{
    extract::{Path, State},
    Json,
};
use reel_core::{PlaylistId, VideoId, Visibility};
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
pub struct CreatePlaylistRequest {
    pub title: String,
    #[serde(default)]
    pub visibility: Visibility,
}

/// GET /api/playlists
/// Playlists owned by the authenticated user, Watch Later included
pub async fn list_playlists(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<Value>> {
    let playlists = app_state.registry.list(auth.user_id()).await;
    Ok(Json(json!({ "success": true, "playlists": playlists })))
}

/// GET /api/playlists/status/:video_id
/// Which of the user's playlists contain the video
pub async fn video_status(
    Path(video_id): Path<String>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<Value>> {
    let status = app_state
        .registry
        .status(auth.user_id(), &VideoId::new(video_id))
        .await;

    let playlists: Vec<Value> = status
        .playlists
        .iter()
        .map(|id| json!({ "playlistId": id }))
        .collect();

    Ok(Json(json!({
        "success": true,
        "isInWatchLater": status.is_in_watch_later,
        "playlists": playlists,
    })))
}

/// POST /api/playlists/watch-later/:video_id
/// Flip the video in Watch Later and report where it ended up
pub async fn toggle_watch_later(
    Path(video_id): Path<String>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<Value>> {
    let video_id = VideoId::new(video_id);
    let is_in_watch_later = app_state
        .registry
        .toggle_watch_later(auth.user_id(), &video_id)
        .await?;

    tracing::debug!(
        user_id = %auth.user_id(),
        video_id = %video_id,
        is_in_watch_later,
        "Watch later toggled"
    );
    Ok(Json(json!({
        "success": true,
        "isInWatchLater": is_in_watch_later,
    })))
}

/// POST /api/playlists/:id/videos/:video_id
/// Add a video to a playlist
pub async fn add_video(
    Path((id, video_id)): Path<(String, String)>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<Value>> {
    app_state
        .registry
        .add_video(
            auth.user_id(),
            &PlaylistId::new(id),
            &VideoId::new(video_id),
        )
        .await?;
    Ok(Json(json!({ "success": true })))
}

/// DELETE /api/playlists/:id/videos/:video_id
/// Remove a video from a playlist
pub async fn remove_video(
    Path((id, video_id)): Path<(String, String)>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<Value>> {
    app_state
        .registry
        .remove_video(
            auth.user_id(),
            &PlaylistId::new(id),
            &VideoId::new(video_id),
        )
        .await?;
    Ok(Json(json!({ "success": true })))
}

/// POST /api/playlists
/// Create a new, empty playlist
pub async fn create_playlist(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    Json(req): Json<CreatePlaylistRequest>,
) -> Result<Json<Value>> {
    let playlist = app_state
        .registry
        .create(auth.user_id(), &req.title, req.visibility)
        .await?;

    tracing::info!(
        user_id = %auth.user_id(),
        playlist_id = %playlist.id,
        "Playlist created"
    );
    Ok(Json(json!({ "success": true, "playlist": playlist })))
}
