//! Integration tests for loading and saving configuration.

use condition_coach::config::{load_config_from, save_config_to, AppConfig, ConfigError};
use condition_coach::UserRole;
use tempfile::TempDir;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = load_config_from(&dir.path().join("config.toml")).unwrap();

    assert_eq!(config.calendar.utc_offset_minutes, 0);
    assert_eq!(config.advice.default_role, UserRole::Athlete);
}

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = AppConfig::default();
    config.calendar.utc_offset_minutes = -300;
    config.advice.default_role = UserRole::Trainer;
    save_config_to(&config, &path).unwrap();

    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded.calendar.utc_offset_minutes, -300);
    assert_eq!(loaded.advice.default_role, UserRole::Trainer);

    let boundary = loaded.calendar.day_boundary().unwrap();
    assert_eq!(boundary.offset().local_minus_utc(), -300 * 60);
}

#[test]
fn test_out_of_range_offset_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "version = \"0.1.0\"\n\n[calendar]\nutc_offset_minutes = 1000\n",
    )
    .unwrap();

    assert!(matches!(load_config_from(&path), Err(ConfigError::ParseError(_))));
}

#[test]
fn test_extreme_offsets_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    for offset in [i32::MIN, i32::MAX, -841, 841] {
        std::fs::write(
            &path,
            format!("version = \"0.1.0\"\n\n[calendar]\nutc_offset_minutes = {}\n", offset),
        )
        .unwrap();
        assert!(
            matches!(load_config_from(&path), Err(ConfigError::ParseError(_))),
            "offset {} should be rejected",
            offset
        );
    }

    std::fs::write(&path, "version = \"0.1.0\"\n\n[calendar]\nutc_offset_minutes = -840\n").unwrap();
    assert_eq!(load_config_from(&path).unwrap().calendar.utc_offset_minutes, -840);
}

#[test]
fn test_malformed_file_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "version = [").unwrap();

    let err = load_config_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
    assert!(err.to_string().starts_with("Parse error:"));
}
