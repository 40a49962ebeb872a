//! Numeric error codes
//!
//! - 0xxx: request / persistence errors common to every endpoint
//! - 2xxx: preset settings
//! - 9xxx: system

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error code sent as a bare number in error bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    ValidationFailed = 2,
    NotFound = 3,
    AlreadyExists = 4,
    /// Body or parameters could not be used as sent
    InvalidRequest = 5,

    /// PUT targeted a category absent from the catalogue
    PresetCategoryNotFound = 2001,

    DatabaseError = 9002,
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// A number with no matching [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Ok(match value {
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            4 => Self::AlreadyExists,
            5 => Self::InvalidRequest,
            2001 => Self::PresetCategoryNotFound,
            9002 => Self::DatabaseError,
            other => return Err(InvalidErrorCode(other)),
        })
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
