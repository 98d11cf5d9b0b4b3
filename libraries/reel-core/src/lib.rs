//! Reel Core
//!
//! Platform-agnostic domain types, the remote playlist service contract, and
//! error handling shared by the Reel client libraries and the stub server.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Playlist`, `VideoStatus`, `Visibility`, `Credential`
//! - **Identifiers**: `VideoId`, `PlaylistId`, `UserId`
//! - **Service Trait**: `PlaylistService`, the seam between the save control
//!   and whatever transport talks to the playlist backend
//! - **Error Handling**: Unified `ReelError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use reel_core::types::{Playlist, PlaylistId, Visibility};
//!
//! let playlist = Playlist::new(PlaylistId::new("pl-1"), "Road trip", Visibility::Private);
//! assert!(!playlist.is_watch_later);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod service;
pub mod types;

// Re-export commonly used types
pub use error::{ReelError, Result};
pub use service::PlaylistService;
pub use types::{Credential, Playlist, PlaylistId, UserId, VideoId, VideoStatus, Visibility};
