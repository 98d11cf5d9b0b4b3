/// Shared application state
use crate::services::{AuthService, PlaylistRegistry};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<PlaylistRegistry>,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    pub fn new(registry: Arc<PlaylistRegistry>, auth_service: Arc<AuthService>) -> Self {
        Self {
            registry,
            auth_service,
        }
    }
}
