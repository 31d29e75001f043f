//! API credential resolution.
//!
//! The key is read once at startup from the environment variable named by
//! `model.api_key_env`, optionally populated from a `.env` file first.

use std::fmt;

use teller_common::ConfigError;
use tracing::debug;

use crate::schema::ModelConfig;

/// A bearer credential for the model API. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiCredential(String);

impl ApiCredential {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiCredential([REDACTED])")
    }
}

/// Load `KEY=VALUE` pairs from a `.env` file in the current directory or
/// any parent. Variables already set in the environment win.
pub fn load_dotenv() {
    match dotenv::dotenv() {
        Ok(path) => debug!("loaded environment from {}", path.display()),
        Err(e) => debug!("no .env file loaded: {e}"),
    }
}

/// Resolve the credential named by `config.api_key_env` from the process
/// environment.
pub fn resolve_credential(config: &ModelConfig) -> Result<ApiCredential, ConfigError> {
    resolve_credential_with(config, |name| std::env::var(name).ok())
}

/// Resolve the credential through an arbitrary lookup. Blank values count
/// as missing.
pub fn resolve_credential_with<F>(
    config: &ModelConfig,
    lookup: F,
) -> Result<ApiCredential, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(&config.api_key_env) {
        Some(value) if !value.trim().is_empty() => Ok(ApiCredential::new(value.trim())),
        _ => Err(ConfigError::MissingCredential(config.api_key_env.clone())),
    }
}
