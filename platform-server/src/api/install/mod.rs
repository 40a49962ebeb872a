//! Install API Module

mod handler;

use axum::extract::DefaultBodyLimit;
use axum::{Router, routing::post};

use crate::core::ServerState;
use crate::install::logo::MAX_FILE_SIZE;

/// Largest install body: a base64 logo at [`MAX_FILE_SIZE`] (4/3 growth)
/// plus 1MB for the form fields
pub const INSTALL_BODY_LIMIT: usize = MAX_FILE_SIZE.div_ceil(3) * 4 + 1024 * 1024;

/// Install router - public, used once during initial setup
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/install", post(handler::install))
        .layer(DefaultBodyLimit::max(INSTALL_BODY_LIMIT))
}
