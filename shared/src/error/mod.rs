//! Error system shared by server and client
//!
//! [`AppError`] carries an [`ErrorCode`] whose range gives its
//! [`ErrorCategory`] and whose value gives the HTTP status. It renders as an
//! [`ErrorBody`].
//!
//! ```
//! use shared::error::{AppError, ErrorBody, ErrorCode};
//!
//! let err = AppError::with_message(ErrorCode::PresetCategoryNotFound, "Preset category Nope not found")
//!     .with_detail("category", "Nope");
//! let body = ErrorBody::from(&err);
//! assert_eq!(body.code, 2001);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorBody};
