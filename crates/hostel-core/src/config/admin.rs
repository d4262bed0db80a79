//! Administrator credential configuration.

use serde::{Deserialize, Serialize};

/// The single administrator account.
///
/// The password is never stored in clear text; `password_hash` holds an
/// Argon2 PHC string produced by `hostel-cli admin hash-password`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    /// Admin login name.
    #[serde(default = "default_username")]
    pub username: String,
    /// Argon2 PHC hash of the admin password. Empty disables admin login.
    #[serde(default)]
    pub password_hash: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            password_hash: String::new(),
        }
    }
}

fn default_username() -> String {
    "admin".to_string()
}
