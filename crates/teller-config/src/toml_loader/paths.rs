//! Where the config file lives, and writing the first-run template.

use std::path::{Path, PathBuf};

use teller_common::ConfigError;
use tracing::{debug, info};

use super::template::default_config_toml;

/// Environment variable that points at a config file, overriding the
/// platform location. `--config` still wins over it.
pub const CONFIG_PATH_ENV: &str = "TELLER_CONFIG";

/// Resolve the config path: `$TELLER_CONFIG` if set and non-blank,
/// otherwise `<config_dir>/teller/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    config_path_with(|name| std::env::var_os(name).map(PathBuf::from))
}

/// Path resolution through an arbitrary environment lookup.
pub fn config_path_with<F>(lookup: F) -> Result<PathBuf, ConfigError>
where
    F: Fn(&str) -> Option<PathBuf>,
{
    if let Some(path) = lookup(CONFIG_PATH_ENV).filter(|p| !p.as_os_str().is_empty()) {
        debug!("{CONFIG_PATH_ENV} points at {}", path.display());
        return Ok(path);
    }

    dirs::config_dir()
        .map(|dir| dir.join("teller").join("config.toml"))
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))
}

/// Write the commented template to `path`, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_err = |what: &str, at: &Path, e: std::io::Error| {
        ConfigError::ParseError(format!("failed to {what} {}: {e}", at.display()))
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| write_err("create config directory", parent, e))?;
    }
    std::fs::write(path, default_config_toml())
        .map_err(|e| write_err("write default config to", path, e))?;

    info!("created default config at {}", path.display());
    Ok(())
}
