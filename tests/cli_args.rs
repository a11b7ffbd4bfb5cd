//! Tests for CLI argument parsing against the built binary.
//!
//! Every case here fails or exits before the terminal is set up.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn shoplist_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_shoplist"))
}

fn temp_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}

#[test]
fn test_help_lists_options() {
    let output = shoplist_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--config", "--log-level", "--no-log", "--no-mouse", "--tick-rate"] {
        assert!(stdout.contains(flag), "missing {flag} in help: {stdout}");
    }
}

#[test]
fn test_version_flag() {
    let output = shoplist_cmd()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_invalid_tick_rate_exits_with_error() {
    let (_dir, path) = temp_config("");
    let output = shoplist_cmd()
        .arg("--config")
        .arg(&path)
        .arg("--tick-rate")
        .arg("0")
        .arg("--no-log")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Config validation failed"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn test_unparseable_config_exits_with_error() {
    let (_dir, path) = temp_config("[ui\n");
    let output = shoplist_cmd()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse config file"), "unexpected stderr: {stderr}");
}

#[test]
fn test_flag_can_fix_invalid_file_value() {
    // The override replaces the out-of-range file value; only the level is reported.
    let (_dir, path) = temp_config("[ui]\ntick_rate_ms = 1\n");
    let output = shoplist_cmd()
        .arg("--config")
        .arg(&path)
        .arg("--tick-rate")
        .arg("100")
        .arg("--log-level")
        .arg("loud")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown log level 'loud'"), "unexpected stderr: {stderr}");
    assert!(!stderr.contains("tick_rate_ms"), "unexpected stderr: {stderr}");
}

#[test]
fn test_missing_tick_rate_value_shows_error() {
    let output = shoplist_cmd()
        .arg("--tick-rate")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("a value is required") || stderr.contains("requires a value"),
        "Expected clap error about missing value, got: {}",
        stderr
    );
}
