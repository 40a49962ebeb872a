//! Setting Repository (singleton row, id = 1)

use super::{RepoError, RepoResult};
use shared::models::{SETTING_SINGLETON_ID, Setting, SettingUpdate};
use shared::util::now_millis;
use sqlx::SqlitePool;

pub async fn find(pool: &SqlitePool) -> RepoResult<Option<Setting>> {
    let setting = sqlx::query_as::<_, Setting>(
        "SELECT id, company_name, company_website, platform_name, terms_use, privacy_policy, logo, \
         primary_color, secondary_color, accent_color, additional_color, updated_at \
         FROM setting WHERE id = ?",
    )
    .bind(SETTING_SINGLETON_ID)
    .fetch_optional(pool)
    .await?;
    Ok(setting)
}

/// Update the singleton row; `None` fields keep their stored value
pub async fn update(pool: &SqlitePool, data: SettingUpdate) -> RepoResult<Setting> {
    let rows = sqlx::query(
        "UPDATE setting SET \
            company_name = COALESCE(?1, company_name), \
            company_website = COALESCE(?2, company_website), \
            platform_name = COALESCE(?3, platform_name), \
            terms_use = COALESCE(?4, terms_use), \
            privacy_policy = COALESCE(?5, privacy_policy), \
            logo = COALESCE(?6, logo), \
            primary_color = COALESCE(?7, primary_color), \
            secondary_color = COALESCE(?8, secondary_color), \
            accent_color = COALESCE(?9, accent_color), \
            additional_color = COALESCE(?10, additional_color), \
            updated_at = ?11 \
         WHERE id = ?12",
    )
    .bind(data.company_name)
    .bind(data.company_website)
    .bind(data.platform_name)
    .bind(data.terms_use)
    .bind(data.privacy_policy)
    .bind(data.logo)
    .bind(data.primary_color)
    .bind(data.secondary_color)
    .bind(data.accent_color)
    .bind(data.additional_color)
    .bind(now_millis())
    .bind(SETTING_SINGLETON_ID)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound("Settings row not found".into()));
    }
    find(pool)
        .await?
        .ok_or_else(|| RepoError::NotFound("Settings row not found".into()))
}
