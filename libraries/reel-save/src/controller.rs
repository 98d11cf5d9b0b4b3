//! Sync Controller
//!
//! Keeps the [`MembershipStore`] consistent with the remote playlist service.
//!
//! All operations take `&self`, so a host event loop can drive several of
//! them at once (`tokio::join!`, or spawned tasks sharing an `Arc`). The
//! session lock is never held across a remote call; every completion
//! re-checks that its session is still current before touching the store.

use crate::error::{Result, SaveError};
use crate::session::{Outcome, Phase, SessionState};
use crate::store::MembershipStore;
use crate::view::SaveView;
use reel_core::{Credential, PlaylistId, PlaylistService, UserId, VideoId};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Drives the save control for one viewer.
///
/// # Example
///
/// ```ignore
/// use reel_core::{Credential, UserId, VideoId};
/// use reel_save::SyncController;
/// use std::sync::Arc;
///
/// let controller = SyncController::new(Arc::new(client), Credential::bearer(token));
/// controller.open(VideoId::new("v1"), Some(UserId::new("u1"))).await?;
/// controller.toggle_watch_later().await?;
/// println!("{}", controller.view().await);
/// ```
pub struct SyncController<S: ?Sized = dyn PlaylistService> {
    pub(crate) service: Arc<S>,
    pub(crate) credential: Credential,
    pub(crate) state: RwLock<SessionState>,
}

impl<S: PlaylistService + ?Sized> SyncController<S> {
    /// Create a controller that authenticates every call with `credential`.
    pub fn new(service: Arc<S>, credential: Credential) -> Self {
        Self {
            service,
            credential,
            state: RwLock::new(SessionState::default()),
        }
    }

    /// Open the control for `video`.
    ///
    /// When `user` is `None` nothing is sent and any earlier session is
    /// closed. Otherwise fetches the playlist list and the
    /// video's membership concurrently and merges them once both settle. A
    /// failure on either read leaves the store as it was and sets the session
    /// error; calling `open` again is the retry path. Toggles that settle
    /// while the reads are in flight win over the reads.
    pub async fn open(&self, video: VideoId, user: Option<UserId>) -> Result<Outcome> {
        let Some(user) = user else {
            debug!(video_id = %video, "No signed-in user; closing save control");
            self.state.write().await.close();
            return Ok(Outcome::Skipped);
        };

        let epoch = self.state.write().await.begin_open(video.clone(), user);
        debug!(video_id = %video, epoch, "Opening save control");

        let (playlists, status) = tokio::join!(
            self.service.my_playlists(&self.credential),
            self.service.video_status(&self.credential, &video),
        );

        let mut state = self.state.write().await;
        if !state.is_current_fetch(epoch) {
            debug!(video_id = %video, epoch, "Discarding stale open result");
            return Ok(Outcome::Discarded);
        }
        state.fetching = false;

        match (playlists, status) {
            (Ok(playlists), Ok(status)) => {
                debug!(
                    video_id = %video,
                    playlists = playlists.len(),
                    members = status.playlists.len(),
                    watch_later = status.is_in_watch_later,
                    "Save control loaded"
                );
                state.merge_fetch(playlists, &status);
                state.loaded = true;
                Ok(Outcome::Applied)
            }
            (Err(e), _) | (_, Err(e)) => {
                warn!(video_id = %video, error = %e, "Failed to load playlists");
                state.error = Some(e.to_string());
                Err(SaveError::Service(e))
            }
        }
    }

    /// Close the control. Responses still in flight will be ignored.
    pub async fn close(&self) {
        self.state.write().await.close();
        debug!("Save control closed");
    }

    /// Toggle Watch Later for the current video.
    ///
    /// The store takes the membership the service reports, not a locally
    /// negated guess. On failure the store is unchanged.
    pub async fn toggle_watch_later(&self) -> Result<Outcome> {
        let ticket = self.state.write().await.begin_mutation()?;

        let result = self
            .service
            .toggle_watch_later(&self.credential, &ticket.video)
            .await;

        let mut state = self.state.write().await;
        if !state.finish_mutation(&ticket) {
            debug!(video_id = %ticket.video, "Discarding watch later result for closed session");
            return Ok(Outcome::Discarded);
        }

        match result {
            Ok(in_watch_later) => {
                state.apply_watch_later(in_watch_later);
                Ok(Outcome::Applied)
            }
            Err(e) => {
                warn!(video_id = %ticket.video, error = %e, "Watch later toggle failed");
                Err(e.into())
            }
        }
    }

    /// Toggle membership of the current video in `playlist`.
    ///
    /// Adds when the store says the video is absent (or unknown), removes
    /// otherwise. On success the flag becomes the negation of what was read;
    /// on failure it keeps its pre-toggle value.
    pub async fn toggle_playlist(&self, playlist: &PlaylistId) -> Result<Outcome> {
        let (ticket, was_member) = {
            let mut state = self.state.write().await;
            let ticket = state.begin_mutation()?;
            (ticket, state.store.contains(playlist))
        };

        let result = if was_member {
            debug!(playlist_id = %playlist, video_id = %ticket.video, "Removing video");
            self.service
                .remove_video(&self.credential, playlist, &ticket.video)
                .await
        } else {
            debug!(playlist_id = %playlist, video_id = %ticket.video, "Adding video");
            self.service
                .add_video(&self.credential, playlist, &ticket.video)
                .await
        };

        let mut state = self.state.write().await;
        if !state.finish_mutation(&ticket) {
            debug!(playlist_id = %playlist, "Discarding toggle result for closed session");
            return Ok(Outcome::Discarded);
        }

        match result {
            Ok(()) => {
                state.apply_membership(playlist.clone(), !was_member);
                Ok(Outcome::Applied)
            }
            Err(e) => {
                warn!(playlist_id = %playlist, error = %e, "Playlist toggle failed");
                Err(e.into())
            }
        }
    }

    /// Current presentation of the control
    pub async fn view(&self) -> SaveView {
        SaveView::from_session(&*self.state.read().await)
    }

    /// Copy of the membership store
    pub async fn store(&self) -> MembershipStore {
        self.state.read().await.store.clone()
    }

    /// Lifecycle phase of the current session
    pub async fn phase(&self) -> Phase {
        self.state.read().await.phase()
    }

    /// Whether any toggle is in flight
    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading()
    }

    /// Session-level error from the last open, if any
    pub async fn error(&self) -> Option<String> {
        self.state.read().await.error.clone()
    }

    /// Video the control is open for
    pub async fn video(&self) -> Option<VideoId> {
        self.state
            .read()
            .await
            .active
            .as_ref()
            .map(|active| active.video.clone())
    }
}
