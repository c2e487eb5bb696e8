//! Configuration system tests
//!
//! Tests for the config directory layout and drawer config loading.

use std::io::Write;

use sidedrawer::config::{DrawerConfig, DEFAULT_COMMIT_RATIO, DEFAULT_EDGE_ZONE};
use sidedrawer::paths::{config_base, AppDirs};

// ========================================================================
// Config Directory Tests
// ========================================================================

#[test]
fn test_xdg_config_home_directory_holds_config_and_logs() {
    let xdg = tempfile::tempdir().unwrap();
    let base = config_base(Some(xdg.path().as_os_str().to_owned()), None).unwrap();
    let dirs = AppDirs::under(&base);

    assert_eq!(dirs.root(), xdg.path().join("sidedrawer"));
    assert!(dirs.config_file().starts_with(xdg.path()));
    assert!(dirs.config_file().ends_with("config.yaml"));

    let logs = dirs.ensure_logs_dir().unwrap();
    assert!(logs.is_dir());
    assert_eq!(logs, dirs.logs_dir());
    assert!(logs.starts_with(dirs.root()));

    // Idempotent once the directory exists
    assert_eq!(dirs.ensure_logs_dir().unwrap(), logs);
}

#[test]
fn test_home_fallback_uses_dot_config() {
    let home = tempfile::tempdir().unwrap();
    let base = config_base(None, Some(home.path().to_path_buf())).unwrap();
    assert_eq!(
        AppDirs::under(base).config_file(),
        home.path().join(".config/sidedrawer/config.yaml")
    );
}

#[test]
fn test_ensure_logs_dir_reports_blocked_path() {
    let root = tempfile::tempdir().unwrap();
    // A regular file where the app directory should be
    std::fs::write(root.path().join("sidedrawer"), "not a dir").unwrap();

    let err = AppDirs::under(root.path()).ensure_logs_dir().unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to create log directory"));
}

#[test]
fn test_config_file_in_xdg_dir_is_loaded() {
    let xdg = tempfile::tempdir().unwrap();
    let dirs = AppDirs::under(xdg.path());
    std::fs::create_dir_all(dirs.root()).unwrap();
    std::fs::write(dirs.config_file(), "settle_duration_ms: 180\n").unwrap();

    let config = DrawerConfig::load_from(&dirs.config_file());
    assert_eq!(config.settle_duration_ms, 180);
    assert_eq!(config.edge_zone, DEFAULT_EDGE_ZONE);
}

// ========================================================================
// Drawer Config Tests
// ========================================================================

#[test]
fn test_load_from_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = DrawerConfig::load_from(&dir.path().join("nope.yaml"));
    assert_eq!(config, DrawerConfig::default());
}

#[test]
fn test_load_from_file_overrides_fields() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "edge_zone: 40").unwrap();
    writeln!(file, "settle_duration_ms: 300").unwrap();

    let config = DrawerConfig::load_from(file.path());
    assert_eq!(config.edge_zone, 40.0);
    assert_eq!(config.settle_duration_ms, 300);
    assert_eq!(config.commit_ratio, DEFAULT_COMMIT_RATIO);
}

#[test]
fn test_load_from_malformed_file_uses_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "edge_zone: [not, a, number").unwrap();

    let config = DrawerConfig::load_from(file.path());
    assert_eq!(config.edge_zone, DEFAULT_EDGE_ZONE);
}

#[test]
fn test_yaml_roundtrip_of_defaults() {
    let yaml = DrawerConfig::default().to_yaml().unwrap();
    assert!(yaml.contains("edge_zone"));
    assert_eq!(
        DrawerConfig::from_yaml_str(&yaml).unwrap(),
        DrawerConfig::default()
    );
}

#[test]
fn test_empty_mapping_is_all_defaults() {
    assert_eq!(
        DrawerConfig::from_yaml_str("{}").unwrap(),
        DrawerConfig::default()
    );
}
