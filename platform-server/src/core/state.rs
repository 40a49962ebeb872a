use std::path::PathBuf;

use sqlx::SqlitePool;

use crate::core::{Config, Result, ServerError};
use crate::db::DbService;

/// Server state shared by every handler
///
/// Cheap to clone: `Config` is small and `SqlitePool` is reference counted.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | config | Config | immutable configuration |
/// | pool | SqlitePool | SQLite connection pool |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub pool: SqlitePool,
}

impl ServerState {
    pub fn new(config: Config, pool: SqlitePool) -> Self {
        Self { config, pool }
    }

    /// Create the work directory, open the database and run migrations
    pub async fn initialize(config: &Config) -> Result<Self> {
        std::fs::create_dir_all(&config.work_dir)?;

        let db_path = config.database_path();
        let db_path = db_path
            .to_str()
            .ok_or_else(|| ServerError::Config(format!("Invalid database path: {}", db_path.display())))?;
        let db = DbService::new(db_path).await?;

        tracing::info!(
            work_dir = %config.work_dir,
            preset_failure_policy = %config.preset_failure_policy,
            "Server state initialized"
        );
        Ok(Self::new(config.clone(), db.pool))
    }

    pub fn work_dir(&self) -> PathBuf {
        PathBuf::from(&self.config.work_dir)
    }
}
