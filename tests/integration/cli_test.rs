//! CLI tests for the non-interactive subcommands.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn wirecube() -> Command {
    Command::cargo_bin("wirecube").unwrap()
}

#[test]
fn help_lists_config_subcommand() {
    wirecube()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("--decay"));
}

#[test]
fn config_show_prints_effective_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[render]\nframe_delay_ms = 30\n").unwrap();

    wirecube()
        .args(["config", "show", "--config"])
        .arg(&path)
        .args(["--decay", "1.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("frame_delay_ms = 30"))
        .stdout(predicate::str::contains("decay_rate = 1.5"));
}

#[test]
fn config_init_writes_defaults_and_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("wirecube.toml");

    wirecube()
        .args(["config", "init", "--config"])
        .arg(&path)
        .assert()
        .success();
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("decay_rate = 0.8"));
    assert!(written.contains("cycle_wrap = 70.0"));

    wirecube()
        .args(["config", "init", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    wirecube()
        .args(["config", "init", "--force", "--config"])
        .arg(&path)
        .assert()
        .success();
}

#[test]
fn config_path_echoes_explicit_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");

    wirecube()
        .args(["config", "path", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.toml"));
}

#[test]
fn invalid_override_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "").unwrap();

    wirecube()
        .args(["config", "show", "--config"])
        .arg(&path)
        .args(["--palette", "#"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("render.palette"));
}

#[test]
fn no_frame_counter_flag_turns_counter_off() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "").unwrap();

    wirecube()
        .args(["config", "show", "--no-frame-counter", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("show_frame_counter = false"))
        .stdout(predicate::str::contains("show_hint = true"));
}
