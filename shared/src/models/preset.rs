//! Preset Setting Models
//!
//! A preset category groups toggleable subcategory flags. The flat
//! `preset_setting` rows are grouped into [`PresetCategory`] records for the
//! API.

use serde::{Deserialize, Serialize};

/// Name of the preset assigned to the administrator at install time
pub const DEFAULT_PRESET_NAME: &str = "default";

/// One toggleable flag inside a preset category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetSubcategory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    /// Required; older clients send it as `status`
    #[serde(alias = "status")]
    pub enabled: bool,
}

/// A named preset category with its subcategories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetCategory {
    pub name: String,
    #[serde(default)]
    pub subcategories: Vec<PresetSubcategory>,
}

impl PresetCategory {
    /// Group flat rows (already ordered by category) into categories,
    /// preserving row order.
    pub fn group(rows: impl IntoIterator<Item = PresetSettingRow>) -> Vec<PresetCategory> {
        let mut categories: Vec<PresetCategory> = Vec::new();
        for row in rows {
            let sub = PresetSubcategory {
                id: Some(row.id),
                name: row.subcategory,
                enabled: row.enabled,
            };
            match categories.last_mut() {
                Some(last) if last.name == row.category => last.subcategories.push(sub),
                _ => categories.push(PresetCategory {
                    name: row.category,
                    subcategories: vec![sub],
                }),
            }
        }
        categories
    }
}

/// Database row of a single preset flag
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct PresetSettingRow {
    pub id: i64,
    pub category: String,
    pub subcategory: String,
    pub enabled: bool,
}

/// Update payload for one category's subcategories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetSettingsUpdate {
    pub category: String,
    pub subcategories: Vec<PresetSubcategory>,
}

/// Response of a preset settings update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetSettingsUpdated {
    pub result: String,
    pub settings: PresetCategory,
}

/// A user's named preset with a snapshot of the preset categories
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct UserPreset {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    #[cfg_attr(feature = "db", sqlx(json))]
    pub settings: Vec<PresetCategory>,
    pub created_at: i64,
}
