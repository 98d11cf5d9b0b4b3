//! Reel Server Library
//!
//! In-memory playlist backend for the save control: per-user playlists, a
//! Watch Later list per user, and JWT bearer authentication.
//!
//! This library exposes the router and its parts for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use api::router;
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use services::{auth::AuthService, registry::PlaylistRegistry};
pub use state::AppState;
