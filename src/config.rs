/*
 * Responsibility
 * - Load settings from the environment (.env via dotenvy)
 * - Validate them up front (missing/invalid => fail at startup)
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,

    // Base URL of the token authority (validate RPC lives under it)
    pub token_authority_url: Url,
    // Deadline for a single validate call, enforced by the validator client
    pub token_authority_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&'static str) -> Option<String>) -> Result<Self, ConfigError> {
        let port: u16 = match get("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            None => 3000,
        };

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = get("APP_ENV")
            .map(|raw| AppEnv::parse(&raw))
            .unwrap_or(AppEnv::Development);

        let token_authority_url = get("TOKEN_AUTHORITY_URL")
            .ok_or(ConfigError::Missing("TOKEN_AUTHORITY_URL"))
            .and_then(|raw| {
                Url::parse(raw.trim()).map_err(|_| ConfigError::Invalid("TOKEN_AUTHORITY_URL"))
            })?;

        let token_authority_timeout_secs = match get("TOKEN_AUTHORITY_TIMEOUT_SECONDS") {
            Some(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::Invalid("TOKEN_AUTHORITY_TIMEOUT_SECONDS"))?,
            None => 5,
        };

        Ok(Self {
            addr,
            app_env,
            token_authority_url,
            token_authority_timeout_secs,
        })
    }
}
