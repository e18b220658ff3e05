//! Tests for loading and saving config files.

use std::fs;

use tempfile::TempDir;
use wirecube::{Config, ConfigError};

#[test]
fn save_then_load_returns_same_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.render.decay_rate = 1.25;
    config.cube.size = Some(9.0);
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn partial_file_uses_defaults_for_the_rest() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[rotation]\nz = 0.05\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.rotation.z, 0.05);
    assert_eq!(config.rotation.x, 0.015);
    assert_eq!(config.render.frame_delay_ms, 60);
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[render\ndecay_rate = ").unwrap();

    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::Parse { .. })
    ));
}

#[test]
fn invalid_values_are_rejected_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[color]\ncycle_wrap = 10.0\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("color.cycle_wrap"));
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::Read { .. })
    ));
}
