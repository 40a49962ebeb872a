//! Error types used by handlers and repositories (from `shared::error`)

pub use shared::error::{AppError, AppResult, ErrorBody, ErrorCategory, ErrorCode};
