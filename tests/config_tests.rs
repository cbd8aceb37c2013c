mod common;
use common::sqlfacade_cmd;
use serial_test::serial;
use std::fs;
use tempfile::tempdir;

#[test]
#[serial]
fn test_config_generation() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("test-config.toml");

    sqlfacade_cmd()
        .arg("config")
        .arg("--output")
        .arg(&config_path)
        .current_dir(&temp_dir)
        .assert()
        .success();

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[database]"));
    assert!(content.contains("[drivers]"));
    assert!(content.contains("[logging]"));
}

#[test]
#[serial]
fn test_config_generation_with_env() {
    let temp_dir = tempdir().unwrap();

    sqlfacade_cmd()
        .arg("config")
        .arg("--env")
        .arg("test")
        .current_dir(&temp_dir)
        .assert()
        .success();

    assert!(temp_dir.path().join("config.toml").exists());
    assert!(temp_dir.path().join("config/test.toml").exists());
}

#[test]
#[serial]
fn test_generated_config_round_trips() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    sqlfacade_cmd()
        .arg("config")
        .current_dir(&temp_dir)
        .assert()
        .success();

    let config =
        sqlfacade_rs::model::Config::load_from_file(&config_path.display().to_string()).unwrap();
    assert_eq!(config.drivers.sqlite, "SQLite3");
    assert_eq!(config.logging.level, "info");
}

#[test]
#[serial]
fn test_config_file_feeds_test_command() {
    // a config file with no url still leads to the fail-fast path
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("empty.toml");
    fs::write(&config_path, "[database]\n").unwrap();

    sqlfacade_cmd()
        .arg("--config")
        .arg(&config_path)
        .arg("test")
        .current_dir(&temp_dir)
        .assert()
        .failure();
}
