//! Teller configuration system.
//!
//! Provides TOML-based configuration, `.env` loading, and credential
//! resolution. All config sections use sensible defaults so partial configs
//! work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use teller_config::{load_config, resolve_credential};
//!
//! teller_config::load_dotenv();
//! let config = load_config(None).expect("failed to load config");
//! let key = resolve_credential(&config.model).expect("MISTRAL_API_KEY not set");
//! ```

pub mod credentials;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use credentials::{load_dotenv, resolve_credential, resolve_credential_with, ApiCredential};
pub use schema::{TellerConfig, BANKING_DIRECTIVE};

use std::path::Path;

use teller_common::ConfigError;

/// Load config from `path` if given, otherwise from the platform default
/// location (creating it on first run), then validate the result.
pub fn load_config(path: Option<&Path>) -> Result<TellerConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_config_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[web]\nport = 0\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn load_config_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[model]\nmodel = \"open-mistral-nemo\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.model.model, "open-mistral-nemo");
    }
}
