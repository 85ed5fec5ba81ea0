//! Bearer access-token gate: header parsing -> remote validation -> Identity in extensions.
//!
//! Every failure short-circuits with a `RestError` response and the wrapped
//! handlers never run. On success exactly one `Identity` is inserted into the
//! request extensions before delegating.

use std::sync::Arc;

use axum::{
    Router,
    extract::{Request, State},
    http::{HeaderValue, header},
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::Identity;
use crate::error::RestError;
use crate::services::token::{Role, TokenValidator, ValidateError};

pub const BEARER_SCHEME: &str = "Bearer";

pub const MISSING_HEADER: &str = "no authorization header was provided";
pub const INVALID_HEADER_FORMAT: &str = "invalid authorization header format";
pub const UNSUPPORTED_SCHEME: &str = "authorization type not supported";
pub const UNVERIFIABLE_SESSION: &str = "couldn't verify session's validity";
pub const NOT_LOGGED_IN: &str = "you are not logged in";

/// Put every route of `router` behind the bearer gate.
///
/// Uses `route_layer`, so only routes already added to `router` are gated
/// (and unmatched paths still 404 instead of 400/401).
///
/// ```ignore
/// let me = Router::new().route("/me", get(me));
/// let v1 = middleware::auth::access::protect(me, state.validator.clone());
/// app = app.nest("/api/v1", v1);
/// ```
pub fn protect<S>(router: Router<S>, validator: Arc<dyn TokenValidator>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.route_layer(middleware::from_fn_with_state(validator, access_middleware))
}

async fn access_middleware(
    State(validator): State<Arc<dyn TokenValidator>>,
    mut req: Request,
    next: Next,
) -> Result<Response, RestError> {
    let identity = {
        let token = parse_bearer(req.headers().get(header::AUTHORIZATION))?;
        authenticate(validator.as_ref(), token).await?
    };

    tracing::debug!(user_id = identity.id, role = %identity.role, "request authenticated");

    // middleware -> extractor hand-off
    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}

/// Extract the credential from an `Authorization` header value.
///
/// The value must be exactly `Bearer <token>`: one single-space separator and
/// a case-sensitive scheme.
pub fn parse_bearer(header: Option<&HeaderValue>) -> Result<&str, RestError> {
    let header = match header {
        Some(value) if !value.is_empty() => value,
        _ => return Err(RestError::bad_request(MISSING_HEADER)),
    };

    // Split the raw bytes: header values may carry obs-text (non-ASCII) octets.
    let mut fields = header.as_bytes().split(|b| *b == b' ');
    let (scheme, token) = match (fields.next(), fields.next(), fields.next()) {
        (Some(scheme), Some(token), None) => (scheme, token),
        _ => return Err(RestError::bad_request(INVALID_HEADER_FORMAT)),
    };

    if scheme != BEARER_SCHEME.as_bytes() {
        return Err(RestError::bad_request(UNSUPPORTED_SCHEME));
    }

    // No authority can accept a credential that isn't text.
    std::str::from_utf8(token).map_err(|_| RestError::unauthorized(NOT_LOGGED_IN))
}

/// Validate `token` with the authority (single call, no retry) and decode the identity.
///
/// Infrastructure faults and rejected credentials are both 401 but carry
/// different messages.
pub async fn authenticate(
    validator: &dyn TokenValidator,
    token: &str,
) -> Result<Identity, RestError> {
    let validated = match validator.validate(token).await {
        Ok(validated) => validated,
        Err(ValidateError::Infrastructure(detail)) => {
            tracing::warn!(
                backend = validator.backend_name(),
                error = %detail,
                "token authority unavailable"
            );
            return Err(RestError::unauthorized(UNVERIFIABLE_SESSION));
        }
        Err(ValidateError::Rejected { reason, detail }) => {
            tracing::debug!(?reason, detail = %detail, "access token rejected");
            return Err(RestError::unauthorized(NOT_LOGGED_IN));
        }
    };

    if validated.user_id < 0 {
        tracing::warn!(
            user_id = validated.user_id,
            "token authority returned a negative user id"
        );
        return Err(RestError::unauthorized(UNVERIFIABLE_SESSION));
    }

    let Some(role) = Role::from_code(validated.role_code) else {
        tracing::warn!(
            role_code = validated.role_code,
            "token authority returned an unknown role code"
        );
        return Err(RestError::unauthorized(UNVERIFIABLE_SESSION));
    };

    Ok(Identity::new(validated.user_id, role))
}
