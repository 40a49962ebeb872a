//! Platform Client - HTTP client for the platform server
//!
//! Network calls through [`NetworkHttpClient`]; in-process calls through
//! `OneshotHttpClient` with the `in-process` feature. The
//! [`PresetSettingsForm`] state container runs on either.

pub mod config;
pub mod error;
pub mod http;
#[cfg(feature = "in-process")]
pub mod oneshot;
pub mod preset_form;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use oneshot::OneshotHttpClient;
pub use preset_form::{
    EDIT_SUCCESS_KEY, NotificationKind, Notifier, PRESET_SETTINGS_PATH, PresetSettingsForm,
    TracingNotifier,
};

// Re-export shared preset types for convenience
pub use shared::models::{PresetCategory, PresetSubcategory};
