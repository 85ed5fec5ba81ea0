use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::RestError;
use crate::middleware::auth::access::NOT_LOGGED_IN;

use super::Identity;

/// Extractor that hands the gate's `Identity` to a handler.
/// Assumes the auth gate already inserted it into request extensions;
/// if it is missing (route mounted outside the gate) the request is rejected with 401.
pub struct CurrentIdentity(pub Identity);

impl<S> FromRequestParts<S> for CurrentIdentity
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(CurrentIdentity)
            .ok_or_else(|| RestError::unauthorized(NOT_LOGGED_IN))
    }
}
