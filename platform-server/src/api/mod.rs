//! API routes
//!
//! - [`health`] - health check
//! - [`install`] - application installation
//! - [`preset_settings`] - preset settings collect / edit

pub mod health;
pub mod install;
pub mod preset_settings;

use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(install::router())
        .merge(preset_settings::router())
}

/// Build the fully configured application
///
/// Used by both the HTTP server and in-process (oneshot) callers
pub fn build_app(state: &ServerState) -> Router {
    let timeout = Duration::from_millis(state.config.request_timeout_ms);
    build_router()
        .with_state(state.clone())
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
