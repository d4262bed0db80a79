//! `LenientJson` extractor: a JSON body that falls back to `T::default()`.

use std::convert::Infallible;

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Parses the body as JSON, substituting `T::default()` for an empty,
/// malformed or mistyped body. Required-field checks then report what is
/// missing instead of the client seeing a parser rejection.
#[derive(Debug, Clone, Default)]
pub struct LenientJson<T>(pub T);

impl<S, T> FromRequest<S> for LenientJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = match Bytes::from_request(req, state).await {
            Ok(body) => body,
            Err(e) => {
                debug!(error = %e, "Unreadable request body");
                return Ok(Self(T::default()));
            }
        };

        let value = serde_json::from_slice(&body).unwrap_or_else(|e| {
            debug!(error = %e, "Request body is not the expected JSON");
            T::default()
        });

        Ok(Self(value))
    }
}
