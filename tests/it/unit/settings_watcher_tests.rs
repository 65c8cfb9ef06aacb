//! Unit tests for settings_watcher module.

use reorderboard::settings_watcher::{SettingsEvent, SettingsWatcher, default_settings_path};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_watcher_creation() {
    let dir = tempdir().unwrap();
    let settings_path = dir.path().join("settings.json");
    fs::write(&settings_path, "{}").unwrap();

    let watcher = SettingsWatcher::new(settings_path.clone()).unwrap();
    assert_eq!(watcher.path(), settings_path.as_path());
}

#[test]
fn test_watcher_on_missing_file() {
    // The directory is watched, so the file may appear later
    let dir = tempdir().unwrap();
    let watcher = SettingsWatcher::new(dir.path().join("settings.json"));
    assert!(watcher.is_ok());
}

#[test]
fn test_watcher_on_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope").join("settings.json");
    assert!(SettingsWatcher::new(path).is_err());
}

#[test]
fn test_default_paths() {
    let settings = default_settings_path();
    assert!(settings.is_some() || cfg!(target_os = "unknown"));
    if let Some(path) = settings {
        assert!(path.ends_with("reorderboard/settings.json"));
    }
}

#[test]
fn test_poll_collapses_burst() {
    let dir = tempdir().unwrap();
    let mut watcher = SettingsWatcher::new(dir.path().join("settings.json")).unwrap();

    watcher.inject(SettingsEvent::Created);
    watcher.inject(SettingsEvent::Modified);
    watcher.inject(SettingsEvent::Deleted);

    assert_eq!(watcher.poll(), Some(SettingsEvent::Deleted));
    assert_eq!(watcher.poll(), None);
}

#[test]
fn test_poll_empty() {
    let dir = tempdir().unwrap();
    let mut watcher = SettingsWatcher::new(dir.path().join("settings.json")).unwrap();
    assert_eq!(watcher.poll(), None);
}
