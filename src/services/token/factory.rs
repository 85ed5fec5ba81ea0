//! Factory: build the token validator from application `Config`.
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::services::token::remote::RemoteValidatorError;
use crate::services::token::{RemoteTokenValidator, TokenValidator};

pub fn build_token_validator(
    config: &Config,
) -> Result<Arc<dyn TokenValidator>, RemoteValidatorError> {
    let validator = RemoteTokenValidator::new(
        &config.token_authority_url,
        Duration::from_secs(config.token_authority_timeout_secs),
    )?;

    tracing::info!(endpoint = %validator.endpoint(), "token validator ready");

    Ok(Arc::new(validator))
}
