/// In-memory playlist registry
///
/// Per-user playlists, each an ordered list of video ids without duplicates.
/// Every user has a Watch Later playlist, created on first access.
use crate::error::{Result, ServerError};
use reel_core::{Playlist, PlaylistId, UserId, VideoId, VideoStatus, Visibility};
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Debug)]
struct Entry {
    owner: UserId,
    playlist: Playlist,
    videos: Vec<VideoId>,
}

#[derive(Debug, Default)]
struct Inner {
    playlists: HashMap<PlaylistId, Entry>,
    /// Playlist ids per user, in creation order
    owned: HashMap<UserId, Vec<PlaylistId>>,
    watch_later: HashMap<UserId, PlaylistId>,
}

impl Inner {
    fn watch_later_id(&mut self, user: &UserId) -> PlaylistId {
        if let Some(id) = self.watch_later.get(user) {
            return id.clone();
        }
        let id = PlaylistId::generate();
        self.insert(user, Playlist::watch_later(id.clone()));
        self.watch_later.insert(user.clone(), id.clone());
        id
    }

    fn insert(&mut self, user: &UserId, playlist: Playlist) {
        self.owned
            .entry(user.clone())
            .or_default()
            .push(playlist.id.clone());
        self.playlists.insert(
            playlist.id.clone(),
            Entry {
                owner: user.clone(),
                playlist,
                videos: Vec::new(),
            },
        );
    }

    /// Playlist owned by `user`; other users' playlists are reported missing
    fn owned_mut(&mut self, user: &UserId, playlist: &PlaylistId) -> Result<&mut Entry> {
        match self.playlists.get_mut(playlist) {
            Some(entry) if entry.owner == *user => Ok(entry),
            _ => Err(ServerError::NotFound(format!(
                "Playlist not found: {}",
                playlist
            ))),
        }
    }
}

#[derive(Debug, Default)]
pub struct PlaylistRegistry {
    inner: RwLock<Inner>,
}

impl PlaylistRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// All playlists of `user`, Watch Later first
    pub async fn list(&self, user: &UserId) -> Vec<Playlist> {
        let mut inner = self.inner.write().await;
        inner.watch_later_id(user);
        inner
            .owned
            .get(user)
            .into_iter()
            .flatten()
            .filter_map(|id| inner.playlists.get(id))
            .map(|entry| entry.playlist.clone())
            .collect()
    }

    /// Which of `user`'s playlists contain `video`
    pub async fn status(&self, user: &UserId, video: &VideoId) -> VideoStatus {
        let inner = self.inner.read().await;
        let watch_later = inner.watch_later.get(user);

        let mut status = VideoStatus::default();
        for id in inner.owned.get(user).into_iter().flatten() {
            let Some(entry) = inner.playlists.get(id) else {
                continue;
            };
            if !entry.videos.contains(video) {
                continue;
            }
            if Some(id) == watch_later {
                status.is_in_watch_later = true;
            } else {
                status.playlists.push(id.clone());
            }
        }
        status
    }

    /// Flip `video` in `user`'s Watch Later. Returns the new membership.
    pub async fn toggle_watch_later(&self, user: &UserId, video: &VideoId) -> Result<bool> {
        let mut inner = self.inner.write().await;
        let id = inner.watch_later_id(user);
        let entry = inner.owned_mut(user, &id)?;

        if let Some(pos) = entry.videos.iter().position(|v| v == video) {
            entry.videos.remove(pos);
            Ok(false)
        } else {
            entry.videos.push(video.clone());
            Ok(true)
        }
    }

    /// Append `video` to `playlist`. Adding a video twice is a no-op.
    pub async fn add_video(
        &self,
        user: &UserId,
        playlist: &PlaylistId,
        video: &VideoId,
    ) -> Result<()> {
        let mut inner = self.inner.write().await;
        let entry = inner.owned_mut(user, playlist)?;
        if !entry.videos.contains(video) {
            entry.videos.push(video.clone());
        }
        Ok(())
    }

    /// Remove `video` from `playlist`. Removing an absent video succeeds.
    pub async fn remove_video(
        &self,
        user: &UserId,
        playlist: &PlaylistId,
        video: &VideoId,
    ) -> Result<()> {
        let mut inner = self.inner.write().await;
        let entry = inner.owned_mut(user, playlist)?;
        entry.videos.retain(|v| v != video);
        Ok(())
    }

    /// Create an empty playlist for `user`
    pub async fn create(
        &self,
        user: &UserId,
        title: &str,
        visibility: Visibility,
    ) -> Result<Playlist> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ServerError::BadRequest(
                "Playlist title cannot be empty".to_string(),
            ));
        }

        let playlist = Playlist::new(PlaylistId::generate(), title, visibility);
        let mut inner = self.inner.write().await;
        inner.watch_later_id(user);
        inner.insert(user, playlist.clone());
        Ok(playlist)
    }

    /// Videos in `playlist`, in insertion order
    pub async fn videos(&self, user: &UserId, playlist: &PlaylistId) -> Result<Vec<VideoId>> {
        let mut inner = self.inner.write().await;
        Ok(inner.owned_mut(user, playlist)?.videos.clone())
    }
}
