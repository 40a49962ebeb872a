//! Shared types for the conferencing platform
//!
//! Models, install DTOs and the unified error system used by
//! platform-server and platform-client.

pub mod error;
pub mod install;
pub mod models;
pub mod util;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorBody, ErrorCategory, ErrorCode};
