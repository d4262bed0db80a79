//! Session cookie configuration.

use serde::{Deserialize, Serialize};

const DEV_SECRET: &str = "hostel-development-session-secret";

/// Settings for the signed session cookie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// HMAC secret used to sign session tokens.
    #[serde(default = "default_secret")]
    pub secret: String,
    /// Name of the session cookie.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Session lifetime in minutes.
    #[serde(default = "default_ttl")]
    pub ttl_minutes: u64,
    /// Set the `Secure` attribute (HTTPS deployments).
    #[serde(default)]
    pub secure_cookie: bool,
}

impl SessionConfig {
    /// Whether the secret is still the shipped development value.
    pub fn is_default_secret(&self) -> bool {
        self.secret == DEV_SECRET
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: default_secret(),
            cookie_name: default_cookie_name(),
            ttl_minutes: default_ttl(),
            secure_cookie: false,
        }
    }
}

fn default_secret() -> String {
    DEV_SECRET.to_string()
}

fn default_cookie_name() -> String {
    "hostel_session".to_string()
}

fn default_ttl() -> u64 {
    720
}
