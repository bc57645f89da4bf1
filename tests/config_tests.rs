use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use justkv::config::{read_dotenv, DEFAULT_HOST, DEFAULT_PORT};
use justkv::{ConfigError, Settings};

fn write_env_file(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("justkv-{}-{}", std::process::id(), name));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(".env");
    fs::write(&path, contents).unwrap();
    path
}

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn test_dotenv_log_level_is_used() {
    let path = write_env_file("level", "RUST_LOG=debug\nPORT=18181\n");
    let file = read_dotenv(&path).unwrap();

    let settings = Settings::from_sources(&file, no_env).unwrap();
    assert_eq!(settings.log_filter, "debug");
    assert_eq!(settings.port, 18181);
    assert_eq!(settings.host, DEFAULT_HOST);
}

#[test]
fn test_process_env_beats_dotenv() {
    let path = write_env_file("precedence", "RUST_LOG=debug\nHOST=0.0.0.0\n");
    let file = read_dotenv(&path).unwrap();

    let settings = Settings::from_sources(&file, |key| match key {
        "RUST_LOG" => Some("warn".to_string()),
        _ => None,
    })
    .unwrap();
    assert_eq!(settings.log_filter, "warn");
    assert_eq!(settings.host, "0.0.0.0");
}

#[test]
fn test_defaults_without_any_source() {
    let settings = Settings::from_sources(&HashMap::new(), no_env).unwrap();
    assert_eq!(settings.log_filter, "info");
    assert_eq!(settings.listen_address(), (DEFAULT_HOST, DEFAULT_PORT));
    assert_eq!(settings.to_string(), "127.0.0.1:8081");
}

#[test]
fn test_bad_port_is_rejected() {
    let file = HashMap::from([("PORT".to_string(), "80a".to_string())]);
    match Settings::from_sources(&file, no_env) {
        Err(ConfigError::InvalidPort(raw)) => assert_eq!(raw, "80a"),
        other => panic!("expected InvalidPort, got {:?}", other),
    }

    let too_big = |key: &str| (key == "PORT").then(|| "70000".to_string());
    assert!(Settings::from_sources(&HashMap::new(), too_big).is_err());
}

#[test]
fn test_missing_dotenv_reports_not_found() {
    let path = std::env::temp_dir().join("justkv-definitely-missing").join(".env");
    let err = read_dotenv(&path).unwrap_err();
    assert!(err.not_found());
}
