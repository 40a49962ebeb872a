//! Utilities
//!
//! - [`AppError`] - application error (from shared::error)
//! - [`ErrorBody`] - JSON error body (from shared::error)
//! - logging setup

pub mod error;
pub mod logger;

pub use error::{AppError, AppResult, ErrorBody, ErrorCategory, ErrorCode};
