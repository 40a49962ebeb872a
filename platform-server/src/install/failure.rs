//! Install failures and their HTTP rendering
//!
//! | Failure | Status | Body |
//! |---------|--------|------|
//! | Validation | 422 | `{"userErrors": {..}}` and/or `{"settingsErrors": {..}}` |
//! | InvalidLogo | 412 | `{"errors": {"logo": ".."}}` |
//! | RoleAssignment | 500 | `{}` |
//! | User | 500 | `{"userErrors": "administrator could not be added"}` |
//! | Settings | 500 | `{"settingsErrors": "settings could not be added"}` |
//! | Presets | 500 | `{"presetsErrors": "preset settings could not be added"}` |
//! | DefaultPreset | 500 | `{"presetsErrors": "default preset could not be assigned"}` |

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Map, Value, json};
use shared::install::FieldErrors;
use thiserror::Error;

use super::logo::LogoError;

pub const USER_FAILURE_MESSAGE: &str = "administrator could not be added";
pub const SETTINGS_FAILURE_MESSAGE: &str = "settings could not be added";
pub const PRESETS_FAILURE_MESSAGE: &str = "preset settings could not be added";
pub const DEFAULT_PRESET_FAILURE_MESSAGE: &str = "default preset could not be assigned";

#[derive(Debug, Error)]
pub enum InstallFailure {
    #[error("install form validation failed")]
    Validation {
        user: Option<FieldErrors>,
        settings: Option<FieldErrors>,
    },

    #[error("invalid logo: {0}")]
    InvalidLogo(#[from] LogoError),

    #[error("administrator role privileges could not be assigned: {0}")]
    RoleAssignment(String),

    #[error("administrator could not be added: {0}")]
    User(String),

    #[error("settings could not be added: {0}")]
    Settings(String),

    #[error("preset settings could not be added: {0}")]
    Presets(String),

    #[error("default preset could not be assigned: {0}")]
    DefaultPreset(String),
}

impl InstallFailure {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::InvalidLogo(_) => StatusCode::PRECONDITION_FAILED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing body; database details never leave the server
    pub fn body(&self) -> Value {
        match self {
            Self::Validation { user, settings } => {
                let mut body = Map::new();
                if let Some(errors) = user {
                    body.insert("userErrors".into(), json!(errors));
                }
                if let Some(errors) = settings {
                    body.insert("settingsErrors".into(), json!(errors));
                }
                Value::Object(body)
            }
            Self::InvalidLogo(err) => json!({ "errors": { "logo": err.to_string() } }),
            Self::RoleAssignment(_) => json!({}),
            Self::User(_) => json!({ "userErrors": USER_FAILURE_MESSAGE }),
            Self::Settings(_) => json!({ "settingsErrors": SETTINGS_FAILURE_MESSAGE }),
            Self::Presets(_) => json!({ "presetsErrors": PRESETS_FAILURE_MESSAGE }),
            Self::DefaultPreset(_) => json!({ "presetsErrors": DEFAULT_PRESET_FAILURE_MESSAGE }),
        }
    }
}

impl IntoResponse for InstallFailure {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}
