//! Presentation Surface
//!
//! Derived entirely from the session; holds no state of its own.

use crate::session::{Phase, SessionState};
use reel_core::PlaylistId;
use serde::Serialize;
use std::fmt;

/// Title of the fixed first row
pub const WATCH_LATER_TITLE: &str = "Watch Later";

/// What a row toggles
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "playlistId", rename_all = "snake_case")]
pub enum RowKind {
    WatchLater,
    Playlist(PlaylistId),
}

/// One checkbox row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToggleRow {
    pub kind: RowKind,
    pub title: String,
    pub checked: bool,
    /// False while any toggle is in flight
    pub enabled: bool,
}

/// The "new playlist" row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateRow {
    pub pending_name: String,
    /// Confirm/cancel are offered only for a non-blank name
    pub show_actions: bool,
    /// False while a create is in flight
    pub enabled: bool,
}

/// Everything needed to render the control
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveView {
    pub phase: Phase,
    pub loading: bool,
    pub error: Option<String>,
    pub rows: Vec<ToggleRow>,
    pub create: CreateRow,
}

impl SaveView {
    pub(crate) fn from_session(state: &SessionState) -> Self {
        let loading = state.loading();
        let store = &state.store;

        let mut rows = Vec::with_capacity(store.playlists().len() + 1);
        rows.push(ToggleRow {
            kind: RowKind::WatchLater,
            title: WATCH_LATER_TITLE.to_string(),
            checked: store.watch_later(),
            enabled: !loading,
        });
        rows.extend(
            store
                .playlists()
                .iter()
                .filter(|playlist| !playlist.is_watch_later)
                .map(|playlist| ToggleRow {
                    kind: RowKind::Playlist(playlist.id.clone()),
                    title: playlist.title.clone(),
                    checked: store.contains(&playlist.id),
                    enabled: !loading,
                }),
        );

        Self {
            phase: state.phase(),
            loading,
            error: state.error.clone(),
            rows,
            create: CreateRow {
                pending_name: state.pending_name.clone(),
                show_actions: !state.pending_name.trim().is_empty(),
                enabled: !state.creating(),
            },
        }
    }

    /// Row toggling `playlist`, if listed
    pub fn row(&self, playlist: &PlaylistId) -> Option<&ToggleRow> {
        self.rows
            .iter()
            .find(|row| matches!(&row.kind, RowKind::Playlist(id) if id == playlist))
    }
}

impl fmt::Display for SaveView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(error) = &self.error {
            writeln!(f, "! {}", error)?;
        }
        for row in &self.rows {
            let mark = if row.checked { 'x' } else { ' ' };
            writeln!(f, "[{}] {}", mark, row.title)?;
        }
        if self.create.show_actions {
            write!(f, "+ {} (create / cancel)", self.create.pending_name.trim())
        } else {
            write!(f, "+ New playlist")
        }
    }
}
