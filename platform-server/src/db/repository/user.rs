//! User Repository

use super::{RepoError, RepoResult};
use crate::auth::password::hash_password;
use shared::models::{User, UserCreate};
use shared::util::now_millis;
use sqlx::SqlitePool;

const USER_COLUMNS: &str = "id, username, email, password_hash, role, role_id, status, created_at";

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<User>> {
    let sql = format!("SELECT {USER_COLUMNS} FROM user WHERE id = ?");
    let user = sqlx::query_as::<_, User>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

pub async fn find_by_username(pool: &SqlitePool, username: &str) -> RepoResult<Option<User>> {
    let sql = format!("SELECT {USER_COLUMNS} FROM user WHERE username = ? LIMIT 1");
    let user = sqlx::query_as::<_, User>(&sql)
        .bind(username)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let n = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM user")
        .fetch_one(pool)
        .await?;
    Ok(n)
}

/// Insert a user, hashing the plain-text password with argon2
pub async fn create(pool: &SqlitePool, data: UserCreate) -> RepoResult<User> {
    let password_hash = hash_password(&data.password)
        .map_err(|e| RepoError::Database(format!("Failed to hash password: {e}")))?;

    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO user (username, email, password_hash, role, role_id, status, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(&data.username)
    .bind(&data.email)
    .bind(&password_hash)
    .bind(data.role)
    .bind(data.role_id)
    .bind(data.status)
    .bind(now_millis())
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create user".into()))
}
