//! Reel - Save to Playlist
//!
//! Client-side core of the "save video" control: which of the viewer's
//! playlists (and Watch Later) contain the current video, toggling membership,
//! and creating a playlist with the video already in it.
//!
//! # Architecture
//!
//! - [`MembershipStore`]: playlist → membership for the current video, plus
//!   the Watch Later flag. Plain data.
//! - [`SyncController`]: open/close, toggles, and playlist creation against a
//!   [`reel_core::PlaylistService`]. Owns the store.
//! - [`SaveView`]: rows and the create row, derived from the session.
//!
//! `reel-save` has no transport of its own; pair it with
//! `reel-server-client` or any other `PlaylistService`.
//!
//! # Concurrency
//!
//! Every open bumps a session epoch. Results that come back for an older
//! epoch, or after [`SyncController::close`], are dropped and reported as
//! [`Outcome::Discarded`]. A single in-flight counter drives the `loading`
//! flag shared by all rows.

#![forbid(unsafe_code)]

mod controller;
mod creation;
mod error;
mod session;
mod store;
mod view;

pub use controller::SyncController;
pub use creation::DEFAULT_VISIBILITY;
pub use error::{Result, SaveError};
pub use session::{Outcome, Phase};
pub use store::MembershipStore;
pub use view::{CreateRow, RowKind, SaveView, ToggleRow, WATCH_LATER_TITLE};
