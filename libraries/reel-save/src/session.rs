//! Session state for one open lifetime of the save control

use crate::error::{Result, SaveError};
use crate::store::MembershipStore;
use reel_core::{Playlist, PlaylistId, UserId, VideoId, VideoStatus};
use serde::Serialize;
use std::collections::HashMap;

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Closed, or opened but nothing loaded yet
    Idle,
    /// Open-time reads in flight
    Loading,
    /// Store populated, no mutation pending
    Ready,
    /// At least one toggle or create in flight
    Mutating,
}

/// What happened to the result of an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The result was written to the store
    Applied,
    /// The session moved on while the request was in flight; result dropped
    Discarded,
    /// Preconditions for a request were not met; nothing was sent
    Skipped,
}

/// Video and user a session was opened for
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ActiveSession {
    pub video: VideoId,
    pub user: UserId,
}

/// Captured when a mutation starts, checked when it completes
#[derive(Debug, Clone)]
pub(crate) struct Ticket {
    pub generation: u64,
    pub video: VideoId,
}

#[derive(Debug, Default)]
pub(crate) struct SessionState {
    /// Bumped on every open and close; guards open-time reads
    pub fetch_epoch: u64,
    /// Bumped whenever the session is discarded; guards mutations
    pub generation: u64,
    pub active: Option<ActiveSession>,
    pub store: MembershipStore,
    pub fetching: bool,
    pub loaded: bool,
    pub in_flight: usize,
    /// Creates in flight
    pub creates: usize,
    pub pending_name: String,
    pub error: Option<String>,
    /// Bumped on every mutation result written to the store
    pub write_seq: u64,
    /// `write_seq` when the current open started its reads
    pub fetch_seq: u64,
    /// Last `write_seq` per playlist
    pub written: HashMap<PlaylistId, u64>,
    pub watch_later_written: u64,
}

impl SessionState {
    /// Start an open. Returns the fetch epoch the results must match.
    ///
    /// Opening for a different video or user, or after a close, discards the
    /// previous session. Re-opening the same video keeps the store.
    pub fn begin_open(&mut self, video: VideoId, user: UserId) -> u64 {
        let next = ActiveSession { video, user };
        if self.active.as_ref() != Some(&next) {
            self.reset();
            self.active = Some(next);
        }
        self.fetch_epoch += 1;
        self.fetch_seq = self.write_seq;
        self.fetching = true;
        self.error = None;
        self.fetch_epoch
    }

    pub fn close(&mut self) {
        self.reset();
        self.fetch_epoch += 1;
    }

    pub fn is_current_fetch(&self, epoch: u64) -> bool {
        self.active.is_some() && self.fetch_epoch == epoch
    }

    pub fn ticket(&self) -> Result<Ticket> {
        let active = self.active.as_ref().ok_or(SaveError::NotOpen)?;
        Ok(Ticket {
            generation: self.generation,
            video: active.video.clone(),
        })
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        self.active.is_some() && self.generation == ticket.generation
    }

    /// Register a toggle and mark the surface loading
    pub fn begin_mutation(&mut self) -> Result<Ticket> {
        let ticket = self.ticket()?;
        self.in_flight += 1;
        Ok(ticket)
    }

    /// Settle a toggle. Returns false when the ticket belongs to a discarded session.
    pub fn finish_mutation(&mut self, ticket: &Ticket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.in_flight = self.in_flight.saturating_sub(1);
        true
    }

    pub fn loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn creating(&self) -> bool {
        self.creates > 0
    }

    /// Record a settled playlist toggle
    pub fn apply_membership(&mut self, playlist: PlaylistId, member: bool) {
        self.write_seq += 1;
        self.written.insert(playlist.clone(), self.write_seq);
        self.store.set_membership(playlist, member);
    }

    /// Record a settled Watch Later toggle
    pub fn apply_watch_later(&mut self, member: bool) {
        self.write_seq += 1;
        self.watch_later_written = self.write_seq;
        self.store.set_watch_later(member);
    }

    /// Merge the open-time reads into the store.
    ///
    /// Entries written after the reads started keep their local value; the
    /// reads may have been answered before those writes reached the server.
    pub fn merge_fetch(&mut self, playlists: Vec<Playlist>, status: &VideoStatus) {
        let since = self.fetch_seq;
        let newer: Vec<(PlaylistId, bool)> = self
            .written
            .iter()
            .filter(|(_, &seq)| seq > since)
            .map(|(id, _)| (id.clone(), self.store.contains(id)))
            .collect();
        let listed: Vec<Playlist> = self
            .store
            .playlists()
            .iter()
            .filter(|playlist| newer.iter().any(|(id, _)| *id == playlist.id))
            .cloned()
            .collect();
        let watch_later = (self.watch_later_written > since).then_some(self.store.watch_later());

        self.store.replace(playlists, status);
        for playlist in listed {
            self.store.push_playlist(playlist);
        }
        for (id, member) in newer {
            self.store.set_membership(id, member);
        }
        if let Some(member) = watch_later {
            self.store.set_watch_later(member);
        }
    }

    pub fn phase(&self) -> Phase {
        if self.active.is_none() {
            Phase::Idle
        } else if self.fetching {
            Phase::Loading
        } else if self.in_flight > 0 || self.creating() {
            Phase::Mutating
        } else if self.loaded {
            Phase::Ready
        } else {
            Phase::Idle
        }
    }

    fn reset(&mut self) {
        self.generation += 1;
        self.active = None;
        self.store.clear();
        self.fetching = false;
        self.loaded = false;
        self.in_flight = 0;
        self.creates = 0;
        self.pending_name.clear();
        self.error = None;
        self.written.clear();
        self.watch_later_written = 0;
    }
}
