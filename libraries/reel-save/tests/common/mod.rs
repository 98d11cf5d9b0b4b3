//! Scripted in-memory playlist service for driving the controller in tests.
//!
//! Records every call, can fail the next call of a given kind, and can hold a
//! call open until the test releases it so races can be staged exactly.

#![allow(dead_code)]

use async_trait::async_trait;
use reel_core::{
    Credential, Playlist, PlaylistId, PlaylistService, ReelError, Result, VideoId, VideoStatus,
    Visibility,
};
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Mutex;
use tokio::sync::oneshot;

/// A recorded service call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    MyPlaylists,
    VideoStatus(String),
    ToggleWatchLater(String),
    AddVideo(String, String),
    RemoveVideo(String, String),
    CreatePlaylist(String, Visibility),
}

/// Call kinds, for failure injection and holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    MyPlaylists,
    VideoStatus,
    ToggleWatchLater,
    AddVideo,
    RemoveVideo,
    CreatePlaylist,
}

/// Test side of a held call
pub struct Hold {
    entered: oneshot::Receiver<()>,
    release: oneshot::Sender<()>,
}

impl Hold {
    /// Wait until the service has received the held call
    pub async fn entered(&mut self) {
        (&mut self.entered).await.expect("held call never arrived");
    }

    /// Let the held call complete
    pub fn release(self) {
        let _ = self.release.send(());
    }
}

struct Gate {
    entered: oneshot::Sender<()>,
    release: oneshot::Receiver<()>,
}

#[derive(Default)]
struct Inner {
    playlists: Vec<Playlist>,
    members: HashMap<String, HashSet<PlaylistId>>,
    watch_later: HashSet<String>,
    watch_later_reply: Option<bool>,
    calls: Vec<Call>,
    failures: HashMap<Op, VecDeque<ReelError>>,
    gates: HashMap<Op, VecDeque<Gate>>,
    next_id: u32,
}

#[derive(Default)]
pub struct FakeService {
    inner: Mutex<Inner>,
}

impl FakeService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a playlist owned by the user
    pub fn with_playlist(self, id: &str, title: &str) -> Self {
        self.inner.lock().unwrap().playlists.push(Playlist::new(
            PlaylistId::new(id),
            title,
            Visibility::Private,
        ));
        self
    }

    /// Add the Watch Later playlist to the listing
    pub fn with_watch_later_listed(self, id: &str) -> Self {
        self.inner
            .lock()
            .unwrap()
            .playlists
            .push(Playlist::watch_later(PlaylistId::new(id)));
        self
    }

    /// Put `video` in `playlist` on the "server"
    pub fn with_member(self, playlist: &str, video: &str) -> Self {
        self.inner
            .lock()
            .unwrap()
            .members
            .entry(video.to_string())
            .or_default()
            .insert(PlaylistId::new(playlist));
        self
    }

    /// Put `video` in Watch Later on the "server"
    pub fn with_watch_later(self, video: &str) -> Self {
        self.inner
            .lock()
            .unwrap()
            .watch_later
            .insert(video.to_string());
        self
    }

    /// Make every watch later toggle answer `value`, whatever the state
    pub fn reply_watch_later(&self, value: bool) {
        self.inner.lock().unwrap().watch_later_reply = Some(value);
    }

    /// Fail the next call of kind `op` with `error`
    pub fn fail_next(&self, op: Op, error: ReelError) {
        self.inner
            .lock()
            .unwrap()
            .failures
            .entry(op)
            .or_default()
            .push_back(error);
    }

    /// Hold the next call of kind `op` until the returned handle is released
    pub fn hold(&self, op: Op) -> Hold {
        let (entered_tx, entered_rx) = oneshot::channel();
        let (release_tx, release_rx) = oneshot::channel();
        self.inner
            .lock()
            .unwrap()
            .gates
            .entry(op)
            .or_default()
            .push_back(Gate {
                entered: entered_tx,
                release: release_rx,
            });
        Hold {
            entered: entered_rx,
            release: release_tx,
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.inner.lock().unwrap().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.inner.lock().unwrap().calls.clear();
    }

    /// Server-side truth for a membership
    pub fn is_member(&self, playlist: &str, video: &str) -> bool {
        self.inner
            .lock()
            .unwrap()
            .members
            .get(video)
            .is_some_and(|set| set.contains(&PlaylistId::new(playlist)))
    }

    /// Record the call, wait on any hold, then report an injected failure
    async fn enter(&self, op: Op, call: Call) -> Result<()> {
        let gate = {
            let mut inner = self.inner.lock().unwrap();
            inner.calls.push(call);
            inner.gates.get_mut(&op).and_then(VecDeque::pop_front)
        };

        if let Some(gate) = gate {
            let _ = gate.entered.send(());
            let _ = gate.release.await;
        }

        let failure = self
            .inner
            .lock()
            .unwrap()
            .failures
            .get_mut(&op)
            .and_then(VecDeque::pop_front);
        match failure {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl PlaylistService for FakeService {
    async fn my_playlists(&self, _credential: &Credential) -> Result<Vec<Playlist>> {
        self.enter(Op::MyPlaylists, Call::MyPlaylists).await?;
        Ok(self.inner.lock().unwrap().playlists.clone())
    }

    async fn video_status(&self, _credential: &Credential, video: &VideoId) -> Result<VideoStatus> {
        self.enter(Op::VideoStatus, Call::VideoStatus(video.to_string()))
            .await?;
        let inner = self.inner.lock().unwrap();
        let mut playlists: Vec<PlaylistId> = inner
            .members
            .get(video.as_str())
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default();
        playlists.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        Ok(VideoStatus {
            is_in_watch_later: inner.watch_later.contains(video.as_str()),
            playlists,
        })
    }

    async fn toggle_watch_later(&self, _credential: &Credential, video: &VideoId) -> Result<bool> {
        self.enter(Op::ToggleWatchLater, Call::ToggleWatchLater(video.to_string()))
            .await?;
        let mut inner = self.inner.lock().unwrap();
        if let Some(reply) = inner.watch_later_reply {
            return Ok(reply);
        }
        let key = video.to_string();
        if inner.watch_later.remove(&key) {
            Ok(false)
        } else {
            inner.watch_later.insert(key);
            Ok(true)
        }
    }

    async fn add_video(
        &self,
        _credential: &Credential,
        playlist: &PlaylistId,
        video: &VideoId,
    ) -> Result<()> {
        self.enter(
            Op::AddVideo,
            Call::AddVideo(playlist.to_string(), video.to_string()),
        )
        .await?;
        self.inner
            .lock()
            .unwrap()
            .members
            .entry(video.to_string())
            .or_default()
            .insert(playlist.clone());
        Ok(())
    }

    async fn remove_video(
        &self,
        _credential: &Credential,
        playlist: &PlaylistId,
        video: &VideoId,
    ) -> Result<()> {
        self.enter(
            Op::RemoveVideo,
            Call::RemoveVideo(playlist.to_string(), video.to_string()),
        )
        .await?;
        if let Some(set) = self.inner.lock().unwrap().members.get_mut(video.as_str()) {
            set.remove(playlist);
        }
        Ok(())
    }

    async fn create_playlist(
        &self,
        _credential: &Credential,
        title: &str,
        visibility: Visibility,
    ) -> Result<Playlist> {
        self.enter(
            Op::CreatePlaylist,
            Call::CreatePlaylist(title.to_string(), visibility),
        )
        .await?;
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let playlist = Playlist::new(
            PlaylistId::new(format!("new{}", inner.next_id)),
            title,
            visibility,
        );
        inner.playlists.push(playlist.clone());
        Ok(playlist)
    }
}
