//! Role Repository

use super::{RepoError, RepoResult};
use crate::auth::is_valid_privilege;
use shared::models::Role;
use sqlx::SqlitePool;

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Role>> {
    let role = sqlx::query_as::<_, Role>(
        "SELECT id, name, description, permissions, is_system FROM role WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(role)
}

pub async fn find_by_name(pool: &SqlitePool, name: &str) -> RepoResult<Option<Role>> {
    let role = sqlx::query_as::<_, Role>(
        "SELECT id, name, description, permissions, is_system FROM role WHERE name = ? LIMIT 1",
    )
    .bind(name)
    .fetch_optional(pool)
    .await?;
    Ok(role)
}

/// Replace the role's permission list
///
/// Every entry must be a known system privilege.
pub async fn set_permissions(pool: &SqlitePool, id: i64, permissions: &[String]) -> RepoResult<Role> {
    if let Some(unknown) = permissions.iter().find(|p| !is_valid_privilege(p)) {
        return Err(RepoError::Validation(format!("Unknown privilege: {unknown}")));
    }

    let permissions_json = serde_json::to_string(permissions)
        .map_err(|e| RepoError::Validation(format!("Invalid permissions: {e}")))?;

    let rows = sqlx::query("UPDATE role SET permissions = ? WHERE id = ?")
        .bind(permissions_json)
        .bind(id)
        .execute(pool)
        .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Role {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Role {id} not found")))
}
