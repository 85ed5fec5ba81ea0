//! HTTP client for the token authority's validate RPC.
//!
//! `POST {base}/oauth/validate` with `{"access_token": ".."}`.
//!
//! Outcome mapping:
//! - 2xx + `{"user_payload": {"user_id", "role"}}` => `ValidatedToken`
//! - 4xx => `Rejected` (reason from status, refined by `{"reason": ..}` if present)
//! - 5xx, transport errors, timeouts, undecodable success bodies => `Infrastructure`

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use super::client::{RejectReason, TokenValidator, ValidateError, ValidatedToken};

const VALIDATE_PATH: &str = "oauth/validate";

#[derive(Debug, Error)]
pub enum RemoteValidatorError {
    #[error("invalid token authority url: {0}")]
    Url(#[from] url::ParseError),
    #[error("http client init failed: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Serialize)]
struct ValidateTokenRequest<'a> {
    access_token: &'a str,
}

#[derive(Deserialize)]
struct ValidateTokenResponse {
    user_payload: UserPayload,
}

#[derive(Deserialize)]
struct UserPayload {
    user_id: i64,
    role: i32,
}

#[derive(Deserialize, Default)]
struct RejectionBody {
    #[serde(default)]
    reason: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Token validator backed by the remote authority.
///
/// Cheap to clone (`reqwest::Client` is an `Arc` inside).
#[derive(Debug, Clone)]
pub struct RemoteTokenValidator {
    http: reqwest::Client,
    endpoint: Url,
}

impl RemoteTokenValidator {
    /// `timeout` bounds the whole call (connect + response). There is no retry.
    pub fn new(base_url: &Url, timeout: Duration) -> Result<Self, RemoteValidatorError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        // `join` replaces the last segment unless the base path ends in '/'.
        let mut base = base_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let endpoint = base.join(VALIDATE_PATH)?;

        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl TokenValidator for RemoteTokenValidator {
    fn backend_name(&self) -> &'static str {
        "remote"
    }

    async fn validate(&self, token: &str) -> Result<ValidatedToken, ValidateError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&ValidateTokenRequest {
                access_token: token,
            })
            .send()
            .await
            .map_err(|e| ValidateError::Infrastructure(e.to_string()))?;

        let status = response.status();

        if status.is_success() {
            let body: ValidateTokenResponse = response.json().await.map_err(|e| {
                ValidateError::Infrastructure(format!("undecodable validate response: {e}"))
            })?;

            return Ok(ValidatedToken {
                user_id: body.user_payload.user_id,
                role_code: body.user_payload.role,
            });
        }

        if status.is_client_error() {
            // The body is optional detail; a missing or foreign body keeps the status-derived reason.
            let body = response
                .json::<RejectionBody>()
                .await
                .unwrap_or_default();
            let reason = body
                .reason
                .as_deref()
                .and_then(reason_from_str)
                .unwrap_or_else(|| reason_from_status(status));
            let detail = body.message.unwrap_or_else(|| status.to_string());

            return Err(ValidateError::rejected(reason, detail));
        }

        Err(ValidateError::Infrastructure(format!(
            "token authority responded {status}"
        )))
    }
}

fn reason_from_status(status: StatusCode) -> RejectReason {
    match status {
        StatusCode::NOT_FOUND => RejectReason::NotFound,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => RejectReason::Invalid,
        _ => RejectReason::Other,
    }
}

fn reason_from_str(reason: &str) -> Option<RejectReason> {
    match reason.to_ascii_lowercase().as_str() {
        "not_found" => Some(RejectReason::NotFound),
        "expired" => Some(RejectReason::Expired),
        "invalid" | "malformed" => Some(RejectReason::Invalid),
        "revoked" => Some(RejectReason::Revoked),
        _ => None,
    }
}
