use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// What the install pipeline does after a preset persistence failure
///
/// `Continue` keeps the legacy behaviour: the failure is recorded as the
/// final response but the default preset step still runs. `Halt` stops the
/// pipeline at the failing preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresetFailurePolicy {
    #[default]
    Continue,
    Halt,
}

impl PresetFailurePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Continue => "continue",
            Self::Halt => "halt",
        }
    }
}

impl fmt::Display for PresetFailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PresetFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "continue" => Ok(Self::Continue),
            "halt" => Ok(Self::Halt),
            other => Err(format!("unknown preset failure policy: {other}")),
        }
    }
}

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | WORK_DIR | /var/lib/platform | Working directory (database, uploads, logs) |
/// | HTTP_PORT | 3000 | HTTP port |
/// | DATABASE_PATH | `<WORK_DIR>/platform.db` | SQLite database file |
/// | ENVIRONMENT | development | development / staging / production |
/// | LOG_LEVEL | info | Log filter directive |
/// | LOG_DIR | unset | Daily rolling log file directory |
/// | REQUEST_TIMEOUT_MS | 30000 | Request timeout (ms) |
/// | PRESET_FAILURE_POLICY | continue | `continue` or `halt` |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/data/platform HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory for the database, uploaded logos and logs
    pub work_dir: String,
    pub http_port: u16,
    /// Explicit database path; falls back to `<work_dir>/platform.db`
    pub database_path: Option<String>,
    /// development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub request_timeout_ms: u64,
    pub preset_failure_policy: PresetFailurePolicy,
}

impl Config {
    /// Load configuration from environment variables, defaults for unset ones
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/platform".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database_path: std::env::var("DATABASE_PATH").ok().filter(|p| !p.is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
            preset_failure_policy: std::env::var("PRESET_FAILURE_POLICY")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or_default(),
        }
    }

    /// Override parts of the configuration
    ///
    /// Mostly used by tests
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config.database_path = None;
        config
    }

    pub fn with_preset_failure_policy(mut self, policy: PresetFailurePolicy) -> Self {
        self.preset_failure_policy = policy;
        self
    }

    /// Resolved SQLite database path
    pub fn database_path(&self) -> PathBuf {
        match &self.database_path {
            Some(path) => PathBuf::from(path),
            None => PathBuf::from(&self.work_dir).join("platform.db"),
        }
    }

    /// Directory where validated logos are stored
    pub fn logo_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("uploads").join("logos")
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
