//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! TOML files plus `HOSTEL__`-prefixed environment variables. Each
//! sub-module represents a logical configuration section.

pub mod admin;
pub mod app;
pub mod database;
pub mod logging;
pub mod receipt;
pub mod seed;
pub mod session;

use serde::{Deserialize, Serialize};
use tracing::warn;

pub use self::admin::AdminConfig;
pub use self::app::{CorsConfig, ServerConfig};
pub use self::database::{DatabaseConfig, DatabaseProvider};
pub use self::logging::LoggingConfig;
pub use self::receipt::ReceiptConfig;
pub use self::seed::{SeedConfig, SeedStudent};
pub use self::session::SessionConfig;

use crate::error::AppError;

/// Prefix for environment variable overrides (`HOSTEL__DATABASE__URL`, ...).
const ENV_PREFIX: &str = "HOSTEL";

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Administrator credential settings.
    #[serde(default)]
    pub admin: AdminConfig,
    /// Session cookie settings.
    #[serde(default)]
    pub session: SessionConfig,
    /// Receipt document settings.
    #[serde(default)]
    pub receipt: ReceiptConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration for the given environment name.
    ///
    /// Merges `config/default.toml`, `config/{env}.toml` and environment
    /// variables prefixed with `HOSTEL__`. Missing files are skipped.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(Self::env_source())
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Load configuration from a single file plus environment overrides.
    pub fn load_file(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(Self::env_source())
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Check cross-section constraints that serde defaults cannot express.
    ///
    /// Development placeholders for secrets are accepted but logged.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.database.provider == DatabaseProvider::Postgres && self.database.url.is_empty() {
            return Err(AppError::configuration(
                "database.url must be set when database.provider = \"postgres\"",
            ));
        }

        if self.session.secret.len() < 16 {
            return Err(AppError::configuration(
                "session.secret must be at least 16 characters",
            ));
        }

        if self.session.is_default_secret() {
            warn!("session.secret is the development default; set HOSTEL__SESSION__SECRET");
        }

        if !self.database.seed.students.is_empty() {
            warn!(
                count = self.database.seed.students.len(),
                "database.seed lists students with plaintext passwords; use only for development"
            );
        }

        if self.admin.password_hash.is_empty() {
            warn!("admin.password_hash is empty; admin login is disabled");
        }

        Ok(())
    }

    fn env_source() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
    }
}
