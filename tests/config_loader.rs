use shoplist::config::{Config, ConfigError, LoggingConfig, UiConfig};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.ui.tick_rate(), Duration::from_millis(250));
    assert!(config.ui.show_hints);
    assert!(config.logging.enabled);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("shoplist/config.toml"));
}

#[test]
fn test_default_log_file_location() {
    let path = LoggingConfig::default().resolved_file();
    assert!(path.ends_with("shoplist/shoplist.log"));

    let custom = LoggingConfig {
        file: Some(PathBuf::from("/tmp/custom.log")),
        ..LoggingConfig::default()
    };
    assert_eq!(custom.resolved_file(), PathBuf::from("/tmp/custom.log"));
}

#[test]
fn test_empty_file_gives_defaults() {
    let (_dir, path) = write_config("");
    let config = Config::load_from(&path).expect("empty config should load");
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_sections_fill_defaults() {
    let (_dir, path) = write_config(
        r#"
[ui]
show_hints = false

[logging]
level = "debug"
file = "/var/tmp/list.log"
"#,
    );
    let config = Config::load_from(&path).expect("config should load");
    assert_eq!(
        config.ui,
        UiConfig {
            tick_rate_ms: 250,
            show_hints: false,
            mouse: true,
        }
    );
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.enabled);
    assert_eq!(config.logging.file, Some(PathBuf::from("/var/tmp/list.log")));
}

#[test]
fn test_mouse_capture_can_be_turned_off() {
    let (_dir, path) = write_config("[ui]\nmouse = false\n");
    let config = Config::load_from(&path).expect("config should load");
    assert!(!config.ui.mouse);
    assert!(config.ui.show_hints);
}

#[test]
fn test_missing_file_is_read_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("absent.toml");
    match Config::load_from(&path) {
        Err(ConfigError::ReadError { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Expected ReadError, got {:?}", other),
    }
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = write_config("[ui\ntick_rate_ms = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_wrong_type_is_parse_error() {
    let (_dir, path) = write_config("[ui]\ntick_rate_ms = \"fast\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_tick_rate_out_of_range_fails_validation() {
    for tick in [0, 9, 10_001] {
        let mut config = Config::default();
        config.ui.tick_rate_ms = tick;
        match config.validate() {
            Err(ConfigError::ValidationError { message }) => {
                assert!(message.contains("tick_rate_ms"), "{message}");
            }
            other => panic!("Expected ValidationError for {tick}, got {:?}", other),
        }
    }
}

#[test]
fn test_tick_rate_bounds_are_inclusive() {
    for tick in [10, 10_000] {
        let mut config = Config::default();
        config.ui.tick_rate_ms = tick;
        assert!(config.validate().is_ok());
    }
}

#[test]
fn test_log_level_validation() {
    let mut config = Config::default();
    config.logging.level = "WARN".to_string();
    assert!(config.validate().is_ok());

    config.logging.level = "loud".to_string();
    match config.validate() {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("Unknown log level 'loud'"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_load_from_validates() {
    let (_dir, path) = write_config("[logging]\nlevel = \"chatty\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
    assert!(Config::read_from(&path).is_ok());
}
