//! Preset Settings API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route(
        "/api/preset-settings",
        get(handler::collect).put(handler::edit),
    )
}
