//! Data models
//!
//! Shared between platform-server and platform-client (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod preset;
pub mod role;
pub mod setting;
pub mod user;

// Re-exports
pub use preset::*;
pub use role::*;
pub use setting::*;
pub use user::*;
