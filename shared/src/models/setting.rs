//! Platform Setting Model

use serde::{Deserialize, Serialize};

/// Key of the single settings row
pub const SETTING_SINGLETON_ID: i64 = 1;

/// Platform branding and legal configuration (single row, id = 1)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Setting {
    pub id: i64,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub company_website: String,
    #[serde(default)]
    pub platform_name: String,
    pub terms_use: Option<String>,
    pub privacy_policy: Option<String>,
    /// Stored logo file name (relative to the logo upload directory)
    pub logo: Option<String>,
    #[serde(default)]
    pub primary_color: String,
    #[serde(default)]
    pub secondary_color: String,
    #[serde(default)]
    pub accent_color: String,
    #[serde(default)]
    pub additional_color: String,
    pub updated_at: Option<i64>,
}

/// Update settings payload; `None` keeps the stored value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingUpdate {
    pub company_name: Option<String>,
    pub company_website: Option<String>,
    pub platform_name: Option<String>,
    pub terms_use: Option<String>,
    pub privacy_policy: Option<String>,
    pub logo: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub accent_color: Option<String>,
    pub additional_color: Option<String>,
}
