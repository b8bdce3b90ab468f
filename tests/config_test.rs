//! Configuration loading: JSON file, environment overrides, validation.
//!
//! Tests touching process environment run under `#[serial]`.

use serial_test::serial;
use std::fs;
use tempfile::TempDir;
use wellspring::config::{AppConfig, ENV_BREATHS, ENV_CONFIG_PATH, ENV_TICK_MS};
use wellspring::error::{ConfigError, ErrorCategory, WellspringError};

fn clear_env() {
    std::env::remove_var(ENV_CONFIG_PATH);
    std::env::remove_var(ENV_TICK_MS);
    std::env::remove_var(ENV_BREATHS);
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = AppConfig::load_from(&dir.path().join("config.json")).unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.breathing.tick_interval_ms, 5000);
    assert_eq!(config.breathing.tick_ceiling, 10);
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "breathing": { "tick_interval_ms": 4000 } }"#).unwrap();

    let config = AppConfig::load_from(&path).unwrap();
    assert_eq!(config.breathing.tick_interval_ms, 4000);
    assert_eq!(config.breathing.tick_ceiling, 10);
    assert!(config.show_milestones);
}

#[test]
fn test_malformed_file_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "{ not json").unwrap();

    let err = AppConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("config.json"));
}

#[test]
#[serial]
fn test_load_reads_path_from_env() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.json");
    fs::write(
        &path,
        r#"{ "breathing": { "tick_interval_ms": 3000, "tick_ceiling": 6 }, "show_milestones": false }"#,
    )
    .unwrap();
    std::env::set_var(ENV_CONFIG_PATH, &path);

    let config = AppConfig::load().unwrap();
    clear_env();

    assert_eq!(config.breathing.tick_interval_ms, 3000);
    assert_eq!(config.breathing.total_breaths(), 3);
    assert!(!config.show_milestones);
}

#[test]
#[serial]
fn test_env_overrides_win_over_file() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "breathing": { "tick_interval_ms": 3000 } }"#).unwrap();
    std::env::set_var(ENV_CONFIG_PATH, &path);
    std::env::set_var(ENV_TICK_MS, "1500");
    std::env::set_var(ENV_BREATHS, "4");

    let config = AppConfig::load().unwrap();
    clear_env();

    assert_eq!(config.breathing.tick_interval_ms, 1500);
    assert_eq!(config.breathing.tick_ceiling, 8);
}

#[test]
#[serial]
fn test_unparsable_env_value_is_rejected() {
    clear_env();
    let dir = TempDir::new().unwrap();
    std::env::set_var(ENV_CONFIG_PATH, dir.path().join("absent.json"));
    std::env::set_var(ENV_TICK_MS, "slow");

    let err = AppConfig::load().unwrap_err();
    clear_env();

    match &err {
        ConfigError::InvalidEnv { var, value } => {
            assert_eq!(var, ENV_TICK_MS);
            assert_eq!(value, "slow");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    let unified: WellspringError = err.into();
    assert_eq!(unified.category(), ErrorCategory::Configuration);
}

#[test]
#[serial]
fn test_zero_interval_fails_validation() {
    clear_env();
    let dir = TempDir::new().unwrap();
    std::env::set_var(ENV_CONFIG_PATH, dir.path().join("absent.json"));
    std::env::set_var(ENV_TICK_MS, "0");

    let err = AppConfig::load().unwrap_err();
    clear_env();

    assert!(matches!(
        err,
        ConfigError::InvalidValue {
            key: "tick_interval_ms",
            ..
        }
    ));
}

#[test]
fn test_odd_ceiling_fails_validation() {
    let mut config = AppConfig::default();
    config.breathing.tick_ceiling = 7;
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serializes_round_trip_through_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    let original = AppConfig::default()
        .with_tick_interval_ms(2500)
        .with_show_milestones(false);
    fs::write(&path, serde_json::to_string_pretty(&original).unwrap()).unwrap();

    assert_eq!(AppConfig::load_from(&path).unwrap(), original);
}
