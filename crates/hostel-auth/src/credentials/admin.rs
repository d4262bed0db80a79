//! Administrator credential check against configuration.

use tracing::{info, warn};

use hostel_core::config::AdminConfig;
use hostel_core::error::AppError;
use hostel_core::result::AppResult;

use crate::password::PasswordHasher;

/// Verifies the configured admin username and Argon2 password hash.
#[derive(Debug, Clone)]
pub struct AdminAuthenticator {
    username: String,
    password_hash: Option<String>,
    hasher: PasswordHasher,
}

impl AdminAuthenticator {
    /// Build from configuration. A malformed hash is a configuration error;
    /// an empty one disables admin login.
    pub fn new(config: &AdminConfig) -> AppResult<Self> {
        let hasher = PasswordHasher::new();

        let password_hash = if config.password_hash.is_empty() {
            None
        } else {
            hasher.check_format(&config.password_hash).map_err(|_| {
                AppError::configuration("admin.password_hash is not a valid Argon2 PHC string")
            })?;
            Some(config.password_hash.clone())
        };

        Ok(Self {
            username: config.username.clone(),
            password_hash,
            hasher,
        })
    }

    /// Check whether admin login is possible at all.
    pub fn is_enabled(&self) -> bool {
        self.password_hash.is_some()
    }

    /// Returns the admin username on success.
    pub fn authenticate(&self, username: &str, password: &str) -> AppResult<String> {
        let Some(hash) = &self.password_hash else {
            warn!("Admin login attempted while admin login is disabled");
            return Err(AppError::authentication("Invalid admin login"));
        };

        // Timing must not depend on whether the username matches.
        let password_ok = self.hasher.verify_password(password, hash)?;
        if username != self.username || !password_ok {
            warn!(username = %username, "Admin login failed");
            return Err(AppError::authentication("Invalid admin login"));
        }

        info!(username = %username, "Admin logged in");
        Ok(self.username.clone())
    }
}
