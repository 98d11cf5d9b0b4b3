//! Common test utilities and fixtures
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request},
    Router,
};
use reel_core::UserId;
use reel_server::{router, AppState, AuthService, PlaylistRegistry};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt;

pub const TEST_SECRET: &str = "test-secret-key";

/// Router over a fresh registry, plus the auth service that signs its tokens
pub fn create_test_app() -> (Router, Arc<AuthService>) {
    let auth_service = Arc::new(AuthService::new(TEST_SECRET, 1));
    let registry = Arc::new(PlaylistRegistry::new());
    let app = router(AppState::new(registry, Arc::clone(&auth_service)));
    (app, auth_service)
}

pub fn token_for(auth_service: &AuthService, user: &str) -> String {
    auth_service
        .create_access_token(&UserId::new(user))
        .unwrap()
}

/// Send one request and return status plus the decoded JSON body
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (axum::http::StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}
