/*
 * Responsibility
 * - User-facing error model shared by every failure path (RestError)
 * - Wire form: {"message": .., "status": .., "error": ..}
 * - IntoResponse (HTTP status + JSON body) and parsing the wire form back
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const BAD_REQUEST: &str = "bad_request";
pub const NOT_FOUND: &str = "not_found";
pub const UNAUTHORIZED: &str = "unauthorized";
pub const INTERNAL_SERVER_ERROR: &str = "internal_server_error";

/// A failure as the caller sees it.
///
/// `Display` is the diagnostic rendering used in logs; the response body is
/// the JSON produced by [`RestError::to_bytes`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("message: {message} - status: {status} - error: {error}")]
pub struct RestError {
    message: String,
    status: u16,
    error: String,
}

/// Returned by [`RestError::from_bytes`] when the input is not a wire-form error.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid rest error payload: {0}")]
    Json(#[from] serde_json::Error),
}

impl RestError {
    pub fn new(message: impl Into<String>, status: u16, error: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status,
            error: error.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::BAD_REQUEST.as_u16(), BAD_REQUEST)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::NOT_FOUND.as_u16(), NOT_FOUND)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::UNAUTHORIZED.as_u16(), UNAUTHORIZED)
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(
            message,
            StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            INTERNAL_SERVER_ERROR,
        )
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn error_code(&self) -> &str {
        &self.error
    }

    /// Wire encoding of the error (JSON object).
    pub fn to_bytes(&self) -> Vec<u8> {
        // A struct of a String/u16/String cannot fail to serialize.
        serde_json::to_vec(self).unwrap_or_default()
    }

    /// Inverse of [`RestError::to_bytes`].
    ///
    /// Fails when the bytes are not a JSON object or a required field is
    /// missing or has the wrong type. Unknown fields are ignored.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ParseError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(self)).into_response()
    }
}
