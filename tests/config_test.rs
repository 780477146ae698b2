//! Tests for TOML configuration loading.

use std::fs;
use std::time::Duration;
use tempfile::TempDir;

use triad_client::ClientConfig;

/// Writes a config TOML into the temp directory and returns its path.
fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("client.toml");
    fs::write(&path, content).expect("Failed to write TOML");
    path
}

#[test]
fn test_load_full_config() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(
        &dir,
        r#"base_url = "https://game.example.com"
timeout_secs = 3
"#,
    );

    let config = ClientConfig::from_file(path).expect("Load failed");
    assert_eq!(config.base_url(), "https://game.example.com");
    assert_eq!(config.timeout(), Duration::from_secs(3));
}

#[test]
fn test_missing_fields_use_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "base_url = \"http://10.0.0.7:3000\"\n");

    let config = ClientConfig::from_file(path).expect("Load failed");
    assert_eq!(config.base_url(), "http://10.0.0.7:3000");
    assert_eq!(*config.timeout_secs(), 10);
}

#[test]
fn test_empty_file_is_all_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "");

    let config = ClientConfig::from_file(path).expect("Load failed");
    assert_eq!(config.base_url(), "http://localhost:3000");
}

#[test]
fn test_invalid_toml_fails() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "this is not valid toml !!!@@@");

    assert!(ClientConfig::from_file(path).is_err());
}

#[test]
fn test_missing_file_fails() {
    let result = ClientConfig::from_file("/this/path/does/not/exist/client.toml");
    assert!(result.is_err());
}
