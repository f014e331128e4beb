//! Config loading from files and environment.

use postforge::config::{self, DRIVE_API_KEY_ENV, TMDB_API_KEY_ENV};
use serial_test::serial;
use std::fs;
use tempfile::tempdir;

fn clear_env() {
    std::env::remove_var(TMDB_API_KEY_ENV);
    std::env::remove_var(DRIVE_API_KEY_ENV);
}

#[test]
#[serial]
fn file_values_are_loaded() {
    clear_env();
    let dir = tempdir().unwrap();
    let path = dir.path().join("postforge.toml");
    fs::write(
        &path,
        r#"
[tmdb]
api_key = "file-tmdb"
language = "ko-KR"

[drive]
api_key = "file-drive"
timeout_secs = 10

[post]
site_name = "KDramaHub"
season = 2
"#,
    )
    .unwrap();

    let config = config::load_config(&path).unwrap();
    assert_eq!(config.tmdb.api_key, "file-tmdb");
    assert_eq!(config.tmdb.language, "ko-KR");
    assert_eq!(config.drive.timeout_secs, 10);
    assert_eq!(config.post.site_name, "KDramaHub");
    assert_eq!(config.post.season, 2);
    assert_eq!(config.post.languages, "Hindi-Korean");
}

#[test]
#[serial]
fn environment_overrides_file_keys() {
    clear_env();
    let dir = tempdir().unwrap();
    let path = dir.path().join("postforge.toml");
    fs::write(&path, "[tmdb]\napi_key = \"file-tmdb\"\n").unwrap();

    std::env::set_var(TMDB_API_KEY_ENV, "env-tmdb");
    std::env::set_var(DRIVE_API_KEY_ENV, "  ");
    let config = config::load_config(&path).unwrap();
    clear_env();

    assert_eq!(config.tmdb.api_key, "env-tmdb");
    assert_eq!(config.drive.api_key, "");
}

#[test]
#[serial]
fn explicit_missing_file_is_an_error() {
    clear_env();
    let dir = tempdir().unwrap();
    let result = config::load_config_or_default(Some(dir.path().join("absent.toml").as_path()));
    assert!(result.is_err());
}

#[test]
#[serial]
fn invalid_values_are_rejected() {
    clear_env();
    let dir = tempdir().unwrap();
    let path = dir.path().join("postforge.toml");

    fs::write(&path, "[drive]\ntimeout_secs = 0\n").unwrap();
    let err = config::load_config(&path).unwrap_err();
    assert!(err.to_string().contains("timeout"));

    fs::write(&path, "[post]\nseason = 0\n").unwrap();
    assert!(config::load_config(&path).is_err());

    fs::write(&path, "[post\nseason = ").unwrap();
    let err = config::load_config(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}
