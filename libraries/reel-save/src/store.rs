//! Membership Store
//!
//! Per-video membership across the user's playlists, plus the separate
//! Watch Later flag. Pure data: no network access, no side effects. Only the
//! sync controller mutates it.

use reel_core::{Playlist, PlaylistId, VideoStatus};
use std::collections::HashMap;

/// Membership of the current video
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MembershipStore {
    playlists: Vec<Playlist>,
    membership: HashMap<PlaylistId, bool>,
    watch_later: bool,
}

impl MembershipStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Playlists in the order the list fetch returned them
    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    /// Whether the video is in `playlist`; unknown counts as `false`
    pub fn contains(&self, playlist: &PlaylistId) -> bool {
        self.membership.get(playlist).copied().unwrap_or(false)
    }

    /// Known membership for `playlist`, `None` if never reported
    pub fn status(&self, playlist: &PlaylistId) -> Option<bool> {
        self.membership.get(playlist).copied()
    }

    /// Whether the video is in Watch Later
    pub fn watch_later(&self) -> bool {
        self.watch_later
    }

    /// Number of playlists currently containing the video (Watch Later excluded)
    pub fn member_count(&self) -> usize {
        self.membership.values().filter(|&&member| member).count()
    }

    /// Whether nothing has been loaded
    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty() && self.membership.is_empty() && !self.watch_later
    }

    /// Populate from the two open-time reads.
    ///
    /// Every listed playlist gets an explicit entry; playlists named by the
    /// status but missing from the list are still recorded as members.
    pub(crate) fn replace(&mut self, playlists: Vec<Playlist>, status: &VideoStatus) {
        self.membership = playlists
            .iter()
            .map(|playlist| (playlist.id.clone(), status.contains(&playlist.id)))
            .collect();
        for id in &status.playlists {
            self.membership.insert(id.clone(), true);
        }
        self.playlists = playlists;
        self.watch_later = status.is_in_watch_later;
    }

    /// Replace the playlist list, keeping known membership
    pub(crate) fn set_playlists(&mut self, playlists: Vec<Playlist>) {
        self.playlists = playlists;
    }

    /// Append a playlist unless one with the same id is already listed
    pub(crate) fn push_playlist(&mut self, playlist: Playlist) {
        if !self.playlists.iter().any(|p| p.id == playlist.id) {
            self.playlists.push(playlist);
        }
    }

    pub(crate) fn set_membership(&mut self, playlist: PlaylistId, member: bool) {
        self.membership.insert(playlist, member);
    }

    pub(crate) fn set_watch_later(&mut self, member: bool) {
        self.watch_later = member;
    }

    pub(crate) fn clear(&mut self) {
        self.playlists.clear();
        self.membership.clear();
        self.watch_later = false;
    }
}
