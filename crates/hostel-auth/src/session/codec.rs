//! Issue and verify HS256 session tokens.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use tracing::debug;
use uuid::Uuid;

use hostel_core::config::SessionConfig;
use hostel_core::error::AppError;
use hostel_entity::Role;

use super::claims::SessionClaims;

/// Signs and verifies session cookie values.
#[derive(Clone)]
pub struct SessionCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_minutes: i64,
}

impl std::fmt::Debug for SessionCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionCodec")
            .field("ttl_minutes", &self.ttl_minutes)
            .finish()
    }
}

impl SessionCodec {
    /// Creates a codec from session configuration.
    pub fn new(config: &SessionConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5;

        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            ttl_minutes: config.ttl_minutes as i64,
        }
    }

    /// Issue a fresh token for `subject`.
    pub fn issue(
        &self,
        subject: &str,
        role: Role,
        pending_room: Option<String>,
    ) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = SessionClaims {
            sub: subject.to_string(),
            role,
            pending_room,
            iat: now.timestamp(),
            exp: (now + Duration::minutes(self.ttl_minutes)).timestamp(),
            jti: Uuid::new_v4(),
        };

        debug!(sub = %claims.sub, role = %claims.role, jti = %claims.jti, "Issuing session");

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode session token: {e}")))
    }

    /// Verify signature and expiry and return the claims.
    pub fn decode(&self, token: &str) -> Result<SessionClaims, AppError> {
        decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::authorization("Session has expired")
                }
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::authorization("Invalid session signature")
                }
                _ => AppError::authorization(format!("Invalid session: {e}")),
            })
    }
}
