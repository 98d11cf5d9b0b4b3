//! Reel Server Client
//!
//! HTTP client library for the Reel playlist API.
//!
//! # Features
//!
//! - **Playlists**: List, create, and inspect the signed-in user's playlists
//! - **Membership**: Add/remove videos, toggle Watch Later
//! - **Service trait**: `ReelServerClient` implements
//!   [`reel_core::PlaylistService`], so it plugs straight into the save control
//!
//! # Example
//!
//! ```ignore
//! use reel_core::{Credential, PlaylistService, VideoId};
//! use reel_server_client::{ClientConfig, ReelServerClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ReelServerClient::new(ClientConfig::new("https://reel.example.com"))?;
//!
//!     let info = client.test_connection().await?;
//!     println!("Connected to server v{}", info.version);
//!
//!     let credential = Credential::bearer(std::env::var("REEL_TOKEN")?);
//!     let status = client
//!         .video_status(&credential, &VideoId::new("dQw4w9WgXcQ"))
//!         .await?;
//!     println!("In watch later: {}", status.is_in_watch_later);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod playlists;
mod service;
mod types;

// Re-export main types
pub use client::ReelServerClient;
pub use error::{Result, ServerClientError};
pub use playlists::PlaylistClient;
pub use types::{
    AckResponse, ClientConfig, CreatePlaylistRequest, CreatePlaylistResponse, PlaylistRef,
    PlaylistsResponse, ServerInfo, VideoStatusResponse, WatchLaterResponse,
};
