//! Preset Setting Repository
//!
//! `preset_setting` holds the catalogue flags, `user_preset` the named
//! per-user snapshots.

use super::{RepoError, RepoResult};
use shared::models::{PresetCategory, PresetSettingRow, PresetSubcategory, UserPreset};
use shared::util::now_millis;
use sqlx::SqlitePool;

/// All flags grouped by category (categories by name, subcategories by id)
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<PresetCategory>> {
    let rows = sqlx::query_as::<_, PresetSettingRow>(
        "SELECT id, category, subcategory, enabled FROM preset_setting ORDER BY category, id",
    )
    .fetch_all(pool)
    .await?;
    Ok(PresetCategory::group(rows))
}

pub async fn find_category(pool: &SqlitePool, category: &str) -> RepoResult<Option<PresetCategory>> {
    let rows = sqlx::query_as::<_, PresetSettingRow>(
        "SELECT id, category, subcategory, enabled FROM preset_setting WHERE category = ? ORDER BY id",
    )
    .bind(category)
    .fetch_all(pool)
    .await?;
    Ok(PresetCategory::group(rows).into_iter().next())
}

/// Insert or update a single flag keyed by (category, subcategory)
pub async fn upsert_flag(
    pool: &SqlitePool,
    category: &str,
    subcategory: &str,
    enabled: bool,
) -> RepoResult<()> {
    sqlx::query(
        "INSERT INTO preset_setting (category, subcategory, enabled) VALUES (?, ?, ?) \
         ON CONFLICT (category, subcategory) DO UPDATE SET enabled = excluded.enabled",
    )
    .bind(category)
    .bind(subcategory)
    .bind(enabled)
    .execute(pool)
    .await?;
    Ok(())
}

/// Update the flags of an existing category
///
/// A subcategory is matched by id when given, by name otherwise. Entries that
/// do not belong to the category are ignored.
pub async fn update_category(
    pool: &SqlitePool,
    category: &str,
    subcategories: &[PresetSubcategory],
) -> RepoResult<PresetCategory> {
    if find_category(pool, category).await?.is_none() {
        return Err(RepoError::NotFound(format!("Preset category {category} not found")));
    }

    let mut tx = pool.begin().await?;
    for sub in subcategories {
        match sub.id {
            Some(id) => {
                sqlx::query("UPDATE preset_setting SET enabled = ? WHERE id = ? AND category = ?")
                    .bind(sub.enabled)
                    .bind(id)
                    .bind(category)
                    .execute(&mut *tx)
                    .await?;
            }
            None => {
                sqlx::query(
                    "UPDATE preset_setting SET enabled = ? WHERE category = ? AND subcategory = ?",
                )
                .bind(sub.enabled)
                .bind(category)
                .bind(&sub.name)
                .execute(&mut *tx)
                .await?;
            }
        }
    }
    tx.commit().await?;

    find_category(pool, category)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Preset category {category} not found")))
}

/// Create or replace the user's preset with the given name
pub async fn save_user_preset(
    pool: &SqlitePool,
    user_id: i64,
    name: &str,
    settings: &[PresetCategory],
) -> RepoResult<UserPreset> {
    let settings_json = serde_json::to_string(settings)
        .map_err(|e| RepoError::Validation(format!("Invalid preset settings: {e}")))?;

    sqlx::query(
        "INSERT INTO user_preset (user_id, name, settings, created_at) VALUES (?, ?, ?, ?) \
         ON CONFLICT (user_id, name) DO UPDATE SET settings = excluded.settings",
    )
    .bind(user_id)
    .bind(name)
    .bind(settings_json)
    .bind(now_millis())
    .execute(pool)
    .await?;

    find_user_preset(pool, user_id, name)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to save user preset".into()))
}

pub async fn find_user_preset(
    pool: &SqlitePool,
    user_id: i64,
    name: &str,
) -> RepoResult<Option<UserPreset>> {
    let preset = sqlx::query_as::<_, UserPreset>(
        "SELECT id, user_id, name, settings, created_at FROM user_preset WHERE user_id = ? AND name = ?",
    )
    .bind(user_id)
    .bind(name)
    .fetch_optional(pool)
    .await?;
    Ok(preset)
}
