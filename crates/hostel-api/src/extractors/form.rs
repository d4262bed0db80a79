//! `LenientForm` extractor: a urlencoded body that falls back to `T::default()`.

use std::convert::Infallible;

use axum::Form;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Like [`Form`], but a missing body, wrong content type or undecodable
/// payload yields `T::default()`. Handlers still run their session check
/// and report the missing field themselves.
#[derive(Debug, Clone, Default)]
pub struct LenientForm<T>(pub T);

impl<S, T> FromRequest<S> for LenientForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Form::<T>::from_request(req, state).await {
            Ok(Form(value)) => Ok(Self(value)),
            Err(e) => {
                debug!(error = %e, "Form body unusable; treating as empty");
                Ok(Self(T::default()))
            }
        }
    }
}
