//! Configuration schema types for Teller.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod logging;
mod model;
mod persona;
mod web;

pub use logging::*;
pub use model::*;
pub use persona::*;
pub use web::*;

use serde::{Deserialize, Serialize};

/// Root configuration for Teller.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TellerConfig {
    pub model: ModelConfig,
    pub persona: PersonaConfig,
    pub web: WebConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_model_is_mistral_large() {
        let config = TellerConfig::default();
        assert_eq!(config.model.model, "mistral-large-latest");
        assert_eq!(config.model.api_key_env, "MISTRAL_API_KEY");
        assert_eq!(config.model.base_url, "https://api.mistral.ai/v1");
        assert!(config.model.temperature.is_none());
    }

    #[test]
    fn default_directive_describes_banking_persona() {
        let config = TellerConfig::default();
        assert!(config
            .persona
            .system_directive
            .starts_with("You are a helpful banking assistant bot."));
        assert!(config
            .persona
            .system_directive
            .contains("Never ask for or store actual banking credentials."));
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config: TellerConfig = toml::from_str(
            r#"
[web]
port = 9000
"#,
        )
        .unwrap();
        assert_eq!(config.web.port, 9000);
        assert_eq!(config.web.bind, "127.0.0.1");
        assert_eq!(config.model.model, "mistral-large-latest");
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn log_level_parses_lowercase() {
        let config: TellerConfig = toml::from_str("[logging]\nlevel = \"debug\"\n").unwrap();
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.level.as_directive(), "debug");
    }
}
