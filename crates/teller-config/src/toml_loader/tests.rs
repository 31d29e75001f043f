//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::{Path, PathBuf};

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_teller_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, teller_common::ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[model]
model = "mistral-small-latest"
temperature = 0.2

[web]
port = 9090
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.model.model, "mistral-small-latest");
    assert_eq!(config.model.temperature, Some(0.2));
    assert_eq!(config.web.port, 9090);
    // Defaults preserved
    assert_eq!(config.model.api_key_env, "MISTRAL_API_KEY");
    assert_eq!(config.web.bind, "127.0.0.1");
}

#[test]
fn load_custom_directive() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[persona]
system_directive = "You are a terse loan officer."
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(
        config.persona.system_directive,
        "You are a terse loan officer."
    );
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, teller_common::ConfigError::ParseError(_)));
}

#[test]
fn load_config_with_invalid_values_returns_parsed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[web]
port = 0
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.web.port, 0);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("teller").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.model.model, "mistral-large-latest");
    assert_eq!(config.web.port, 8501);
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::TellerConfig;

    let config: TellerConfig = toml::from_str(&default_config_toml()).unwrap();
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn platform_path_is_used_without_override() {
    if let Ok(path) = config_path_with(|_| None) {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("teller"));
        assert!(path_str.ends_with("config.toml"));
    }
}

#[test]
fn env_override_replaces_platform_path() {
    let path = config_path_with(|name| {
        (name == CONFIG_PATH_ENV).then(|| PathBuf::from("/srv/teller/bank.toml"))
    })
    .unwrap();
    assert_eq!(path, PathBuf::from("/srv/teller/bank.toml"));
}

#[test]
fn blank_env_override_is_ignored() {
    let overridden = config_path_with(|_| Some(PathBuf::new()));
    let platform = config_path_with(|_| None);
    assert_eq!(overridden.ok(), platform.ok());
}

#[test]
fn create_default_config_makes_nested_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("teller.toml");

    create_default_config(&path).unwrap();
    assert!(load_from_path(&path).is_ok());
}
