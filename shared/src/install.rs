//! Installation request DTOs
//!
//! The install form arrives flat (`{ "data": { "username": ..., "company_name": ... } }`)
//! and is split into two independently validated groups: account fields and
//! platform fields. Each group reports every failing rule.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::PresetCategory;

/// Field name → every failed rule message for that field
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Success message returned by a completed install
pub const INSTALL_SUCCESS_MESSAGE: &str = "Application installed !";

/// Envelope of the install request body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InstallRequest {
    pub data: InstallForm,
}

/// Install form submission
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InstallForm {
    #[serde(flatten)]
    pub account: AccountFields,
    #[serde(flatten)]
    pub platform: PlatformFields,
    #[serde(default)]
    pub term_url: Option<String>,
    #[serde(default)]
    pub policy_url: Option<String>,
    #[serde(default)]
    pub logo: Option<LogoUpload>,
    #[serde(default)]
    pub branding_colors: BrandingColors,
    #[serde(default, rename = "presetsConfig")]
    pub presets_config: Option<Vec<PresetCategory>>,
}

impl InstallForm {
    /// Terms of use URL, empty string counts as absent
    pub fn terms_url(&self) -> Option<&str> {
        non_empty(self.term_url.as_deref())
    }

    /// Privacy policy URL, empty string counts as absent
    pub fn privacy_url(&self) -> Option<&str> {
        non_empty(self.policy_url.as_deref())
    }

    /// Validate both groups. Returns `(account_errors, platform_errors)`,
    /// each `None` when the group passed.
    pub fn validate_groups(&self) -> (Option<FieldErrors>, Option<FieldErrors>) {
        let account = self.account.validate().err().map(|e| collect_field_errors(&e));
        let platform = self.platform.validate().err().map(|e| collect_field_errors(&e));
        (account, platform)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Administrator account fields
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AccountFields {
    #[validate(custom(function = "not_blank", message = "username must not be empty"))]
    pub username: String,

    #[validate(
        custom(function = "not_blank", message = "email must not be empty"),
        email(message = "email must be a valid email address")
    )]
    pub email: String,

    #[validate(
        custom(function = "not_blank", message = "password must not be empty"),
        length(min = 4, message = "password must be at least 4 characters long")
    )]
    pub password: String,
}

/// Company and platform identity fields
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PlatformFields {
    #[validate(custom(function = "not_blank", message = "company_name must not be empty"))]
    pub company_name: String,

    #[validate(
        custom(function = "not_blank", message = "company_url must not be empty"),
        url(message = "company_url must be a valid URL")
    )]
    pub company_url: String,

    #[validate(custom(function = "not_blank", message = "platform_name must not be empty"))]
    pub platform_name: String,
}

/// Branding colors (`add_color` is stored as the additional color)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandingColors {
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub add_color: String,
}

/// Uploaded logo: original file name plus base64 content
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogoUpload {
    pub name: String,
    pub content: String,
}

/// Install success payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallSuccess {
    pub result: String,
    pub message: String,
}

impl InstallSuccess {
    pub fn new() -> Self {
        Self {
            result: "success".into(),
            message: INSTALL_SUCCESS_MESSAGE.into(),
        }
    }
}

impl Default for InstallSuccess {
    fn default() -> Self {
        Self::new()
    }
}

/// Rejects empty and whitespace-only values
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

/// Flatten `validator` errors into `field → [messages]`
pub fn collect_field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut out = FieldErrors::new();
    for (field, errs) in errors.field_errors() {
        let messages = errs
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid ({})", e.code))
            })
            .collect();
        out.insert(field.to_string(), messages);
    }
    out
}
