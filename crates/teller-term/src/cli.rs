use std::path::PathBuf;

use clap::Parser;
use teller_common::ConfigError;
use teller_config::TellerConfig;

/// Teller: a terminal banking assistant backed by Mistral.
#[derive(Parser, Debug)]
#[command(name = "teller", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. debug, teller_ai=trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Model identifier override.
    #[arg(short, long)]
    pub model: Option<String>,
}

impl Args {
    /// Apply command-line overrides to `config`, then validate the result.
    pub fn apply_overrides(&self, config: &mut TellerConfig) -> Result<(), ConfigError> {
        if let Some(ref model) = self.model {
            config.model.model = model.clone();
        }
        teller_config::validation::validate(config)
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_override_is_applied() {
        let args = Args::try_parse_from(["teller", "-m", "mistral-small-latest"]).unwrap();
        let mut config = TellerConfig::default();

        args.apply_overrides(&mut config).unwrap();
        assert_eq!(config.model.model, "mistral-small-latest");
    }

    #[test]
    fn blank_model_override_fails_validation() {
        let args = Args::try_parse_from(["teller", "--model", ""]).unwrap();
        let mut config = TellerConfig::default();

        let err = args.apply_overrides(&mut config).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(ref m) if m.contains("model.model")));
    }

    #[test]
    fn no_overrides_keeps_config() {
        let args = Args::try_parse_from(["teller"]).unwrap();
        let mut config = TellerConfig::default();

        args.apply_overrides(&mut config).unwrap();
        assert_eq!(config.model.model, "mistral-large-latest");
    }
}
