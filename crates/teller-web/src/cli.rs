use std::path::PathBuf;

use clap::Parser;
use teller_common::ConfigError;
use teller_config::TellerConfig;

/// Teller web: the banking assistant served to a browser.
#[derive(Parser, Debug)]
#[command(name = "teller-web", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. debug, teller_web=trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Address to bind, overriding `[web] bind`.
    #[arg(long)]
    pub bind: Option<String>,

    /// Port to listen on, overriding `[web] port`.
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl Args {
    /// Apply command-line overrides to `config`, then validate the result.
    pub fn apply_overrides(&self, config: &mut TellerConfig) -> Result<(), ConfigError> {
        if let Some(ref bind) = self.bind {
            config.web.bind = bind.clone();
        }
        if let Some(port) = self.port {
            config.web.port = port;
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
    fn bind_and_port_overrides_are_applied() {
        let args =
            Args::try_parse_from(["teller-web", "--bind", "0.0.0.0", "--port", "9000"]).unwrap();
        let mut config = TellerConfig::default();

        args.apply_overrides(&mut config).unwrap();
        assert_eq!(config.web.bind, "0.0.0.0");
        assert_eq!(config.web.port, 9000);
    }

    #[test]
    fn zero_port_override_fails_validation() {
        let args = Args::try_parse_from(["teller-web", "--port", "0"]).unwrap();
        let mut config = TellerConfig::default();

        let err = args.apply_overrides(&mut config).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(ref m) if m.contains("web.port")));
    }

    #[test]
    fn blank_bind_override_fails_validation() {
        let args = Args::try_parse_from(["teller-web", "--bind", " "]).unwrap();
        let mut config = TellerConfig::default();

        assert!(args.apply_overrides(&mut config).is_err());
    }
}
