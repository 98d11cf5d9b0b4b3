//! Creation Flow
//!
//! Create a playlist, put the current video in it, refresh the list.

use crate::controller::SyncController;
use crate::error::{Result, SaveError};
use crate::session::Outcome;
use reel_core::{PlaylistService, Visibility};
use tracing::{debug, info, warn};

/// Visibility given to playlists created from the save control
pub const DEFAULT_VISIBILITY: Visibility = Visibility::Private;

impl<S: PlaylistService + ?Sized> SyncController<S> {
    /// Create a playlist named `name` (trimmed) and add the current video to it.
    ///
    /// Empty names are rejected before any request. On success the list is
    /// re-fetched and the pending name cleared. If the create call fails the
    /// pending name is left for a retry. If only the follow-up add fails, the
    /// playlist exists, so the list is still refreshed and the name cleared;
    /// the error comes back as [`SaveError::EnrollFailed`].
    pub async fn create_playlist(&self, name: &str) -> Result<Outcome> {
        let title = name.trim();
        if title.is_empty() {
            return Err(SaveError::EmptyName);
        }

        let ticket = {
            let mut state = self.state.write().await;
            let ticket = state.ticket()?;
            state.creates += 1;
            ticket
        };

        debug!(title = %title, "Creating playlist");
        let created = self
            .service
            .create_playlist(&self.credential, title, DEFAULT_VISIBILITY)
            .await;

        let playlist = {
            let mut state = self.state.write().await;
            if !state.is_current(&ticket) {
                return Ok(Outcome::Discarded);
            }
            match created {
                Ok(playlist) => {
                    state.in_flight += 1;
                    playlist
                }
                Err(e) => {
                    warn!(title = %title, error = %e, "Playlist creation failed");
                    state.creates = state.creates.saturating_sub(1);
                    return Err(e.into());
                }
            }
        };
        info!(playlist_id = %playlist.id, title = %playlist.title, "Playlist created");

        let enrolled = self
            .service
            .add_video(&self.credential, &playlist.id, &ticket.video)
            .await;

        {
            let mut state = self.state.write().await;
            if !state.finish_mutation(&ticket) {
                return Ok(Outcome::Discarded);
            }
            match &enrolled {
                Ok(()) => state.apply_membership(playlist.id.clone(), true),
                Err(e) => {
                    warn!(playlist_id = %playlist.id, error = %e, "Could not add video to new playlist");
                }
            }
        }

        let refreshed = self.service.my_playlists(&self.credential).await;

        let mut state = self.state.write().await;
        if !state.is_current(&ticket) {
            return Ok(Outcome::Discarded);
        }
        match refreshed {
            Ok(playlists) => state.store.set_playlists(playlists),
            Err(e) => {
                warn!(error = %e, "Playlist refresh failed; showing the new playlist locally");
            }
        }
        // The refreshed list may lag behind the create
        state.store.push_playlist(playlist.clone());
        state.pending_name.clear();
        state.creates = state.creates.saturating_sub(1);

        match enrolled {
            Ok(()) => Ok(Outcome::Applied),
            Err(source) => Err(SaveError::EnrollFailed {
                playlist_id: playlist.id,
                source,
            }),
        }
    }

    /// Create a playlist from the pending name in the create row.
    pub async fn create_from_pending(&self) -> Result<Outcome> {
        let name = self.state.read().await.pending_name.clone();
        self.create_playlist(&name).await
    }

    /// Update the name typed into the create row.
    pub async fn set_pending_name(&self, name: impl Into<String>) {
        self.state.write().await.pending_name = name.into();
    }

    /// Clear the create row.
    pub async fn cancel_create(&self) {
        self.state.write().await.pending_name.clear();
    }

    /// Name currently typed into the create row
    pub async fn pending_name(&self) -> String {
        self.state.read().await.pending_name.clone()
    }

    /// Whether any create is in flight
    pub async fn is_creating(&self) -> bool {
        self.state.read().await.creating()
    }
}
