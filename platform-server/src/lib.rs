//! Platform Server - installation and preset settings backend
//!
//! # Module layout
//!
//! ```text
//! platform-server/src/
//! ├── core/          # config, state, errors, HTTP server
//! ├── auth/          # privileges, password hashing
//! ├── install/       # install pipeline and logo handling
//! ├── api/           # HTTP routes and handlers
//! ├── utils/         # error re-exports, logging
//! └── db/            # SQLite pool and repositories
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod install;
pub mod utils;

// Re-export public types
pub use api::{build_app, build_router};
pub use core::{Config, PresetFailurePolicy, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ErrorBody, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env`, read configuration and initialize logging
pub fn setup_environment() -> Config {
    let dotenv_loaded = dotenv::dotenv().is_ok();

    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    if dotenv_loaded {
        tracing::debug!("Loaded environment from .env");
    }
    config
}
