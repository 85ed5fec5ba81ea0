//! Token validator interface used by the auth gate.
use async_trait::async_trait;
use thiserror::Error;

/// What the token authority returns for a credential it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedToken {
    pub user_id: i64,
    pub role_code: i32,
}

/// Why a credential was rejected by the authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    NotFound,
    Expired,
    Invalid,
    Revoked,
    Other,
}

/// Classified validation failure.
///
/// Note:
/// - `Infrastructure` means the authority (or the way to it) is unhealthy,
///   the credential itself was never judged.
/// - Everything the authority did judge is `Rejected`.
#[derive(Debug, Error)]
pub enum ValidateError {
    #[error("token authority unavailable: {0}")]
    Infrastructure(String),
    #[error("token rejected ({reason:?}): {detail}")]
    Rejected { reason: RejectReason, detail: String },
}

impl ValidateError {
    pub fn rejected(reason: RejectReason, detail: impl Into<String>) -> Self {
        Self::Rejected {
            reason,
            detail: detail.into(),
        }
    }
}

/// The remote token authority, as seen by the gate.
///
/// One call per request, no retry. Any deadline is the implementation's own.
#[async_trait]
pub trait TokenValidator: Send + Sync + 'static {
    // Returns the backend name (for logging).
    fn backend_name(&self) -> &'static str;

    async fn validate(&self, token: &str) -> Result<ValidatedToken, ValidateError>;
}
