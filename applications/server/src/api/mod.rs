/// API routes
pub mod playlists;

use crate::{middleware, state::AppState};
use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the full application router under `/api`
pub fn router(app_state: AppState) -> Router {
    let public_routes = Router::new().route("/health", get(health));

    let protected_routes = Router::new()
        .route(
            "/playlists",
            get(playlists::list_playlists).post(playlists::create_playlist),
        )
        .route("/playlists/status/:video_id", get(playlists::video_status))
        .route(
            "/playlists/watch-later/:video_id",
            post(playlists::toggle_watch_later),
        )
        .route(
            "/playlists/:id/videos/:video_id",
            post(playlists::add_video).delete(playlists::remove_video),
        )
        .layer(axum_middleware::from_fn_with_state(
            Arc::clone(&app_state.auth_service),
            middleware::auth_middleware,
        ));

    Router::new()
        .nest("/api", public_routes.merge(protected_routes))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(false)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
