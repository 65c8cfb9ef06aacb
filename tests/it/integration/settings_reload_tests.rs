//! Settings changes applied to a live board.

use crate::helpers::{
    TestBoardBuilder, assert_clean, assert_order, below_entries, board_with, center_of, move_to,
    press, press_with, release,
};
use reorderboard::error::SettingsError;
use reorderboard::feedback::FeedbackExclusion;
use reorderboard::settings::Settings;
use reorderboard::settings_watcher::{SettingsEvent, SettingsWatcher};
use reorderboard::types::PointerButton;
use std::fs;
use tempfile::TempDir;

fn lifted() -> Settings {
    let mut settings = Settings::default();
    settings.markers.dragging = "lifted".to_string();
    settings
}

#[test]
fn test_custom_drag_marker() {
    let mut board = TestBoardBuilder::new()
        .with_group("todo", &["A", "B"])
        .with_settings(lifted())
        .build();
    let a = board.document.find_entry("A").unwrap();

    let at = center_of(&board, "A");
    press(&mut board, at);
    assert!(board.document.has_class(a, "lifted"));
    assert!(!board.document.has_class(a, "temp"));

    let at = center_of(&board, "A");
    release(&mut board, at);
    assert!(!board.document.has_class(a, "lifted"));
    assert_clean(&board);
}

#[test]
fn test_custom_primary_button() {
    let mut settings = Settings::default();
    settings.primary_button = 2;
    let mut board = TestBoardBuilder::new()
        .with_group("todo", &["A"])
        .with_settings(settings)
        .build();

    let at = center_of(&board, "A");
    press(&mut board, at);
    assert!(board.session().is_idle());

    let at = center_of(&board, "A");
    press_with(&mut board, at, PointerButton::Secondary);
    assert!(board.session().is_dragging());
}

#[test]
fn test_pointer_events_exclusion_drags_the_same() {
    let mut settings = Settings::default();
    settings.feedback_exclusion = FeedbackExclusion::PointerEventsNone;
    let mut board = TestBoardBuilder::new()
        .with_group("todo", &["A", "B", "C"])
        .with_settings(settings)
        .build();

    let target = below_entries(&board, "todo");
    let at = center_of(&board, "A");
    press(&mut board, at);
    move_to(&mut board, target);
    release(&mut board, target);

    assert_order(&board, "todo", &["start", "B", "C", "A"]);
    assert!(board.document.is_hit_excluded(board.document.feedback_layer()));
}

#[test]
fn test_settings_deferred_until_drag_ends() {
    let mut board = board_with("todo", &["A", "B"]);
    let a = board.document.find_entry("A").unwrap();

    let at = center_of(&board, "A");
    press(&mut board, at);
    board.apply_settings(lifted());

    // Active drag keeps the old marker
    assert!(board.document.has_class(a, "temp"));
    assert_eq!(board.settings().markers.dragging, "temp");

    let at = center_of(&board, "A");
    release(&mut board, at);
    assert_eq!(board.settings().markers.dragging, "lifted");
    assert_eq!(board.document.markers().dragging, "lifted");
    assert!(!board.document.has_class(a, "temp"));
    assert!(!board.document.has_class(a, "lifted"));
}

#[test]
fn test_settings_applied_immediately_when_idle() {
    let mut board = board_with("todo", &["A"]);
    board.apply_settings(lifted());
    assert_eq!(board.document.markers().dragging, "lifted");

    let a = board.document.find_entry("A").unwrap();
    let at = center_of(&board, "A");
    press(&mut board, at);
    assert!(board.document.has_class(a, "lifted"));
}

#[test]
fn test_renamed_start_marker_retags_sentinels() {
    let mut board = TestBoardBuilder::new()
        .with_group("todo", &["A"])
        .with_group("done", &[])
        .build();

    let mut settings = Settings::default();
    settings.markers.start = "head".to_string();
    board.apply_settings(settings);

    for container in board.document.containers() {
        let sentinel = board.document.sentinel_of(container).expect("sentinel");
        assert!(board.document.has_class(sentinel, "head"));
        assert!(board.document.is_sentinel(sentinel));
    }
    board.document.check_invariants().expect("invariants");
}

#[test]
fn test_reload_from_watched_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");
    fs::write(&path, r#"{ "markers": { "dragging": "lifted" } }"#).unwrap();

    let watcher = SettingsWatcher::new(path).unwrap();
    let mut board = board_with("todo", &["A"]).with_settings_watcher(watcher);

    board
        .system
        .settings_watcher
        .as_ref()
        .unwrap()
        .inject(SettingsEvent::Modified);

    assert!(board.check_settings_reload());
    assert_eq!(board.settings().markers.dragging, "lifted");
}

#[test]
fn test_reload_without_watcher_is_noop() {
    let mut board = board_with("todo", &["A"]);
    assert!(!board.check_settings_reload());
}

#[test]
fn test_deleted_settings_file_keeps_current() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");

    let watcher = SettingsWatcher::new(path).unwrap();
    let mut board = TestBoardBuilder::new()
        .with_group("todo", &["A"])
        .with_settings(lifted())
        .build()
        .with_settings_watcher(watcher);

    board
        .system
        .settings_watcher
        .as_ref()
        .unwrap()
        .inject(SettingsEvent::Deleted);

    assert!(!board.check_settings_reload());
    assert_eq!(board.settings().markers.dragging, "lifted");
}

#[test]
fn test_invalid_settings_file_falls_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");
    fs::write(&path, "{ not json").unwrap();

    let watcher = SettingsWatcher::new(path).unwrap();
    let mut board = TestBoardBuilder::new()
        .with_group("todo", &["A"])
        .with_settings(lifted())
        .build()
        .with_settings_watcher(watcher);

    board
        .system
        .settings_watcher
        .as_ref()
        .unwrap()
        .inject(SettingsEvent::Created);

    assert!(board.check_settings_reload());
    assert_eq!(board.settings(), &Settings::default());
}

#[test]
fn test_init_logging_is_idempotent() {
    let board = board_with("todo", &["A"]);
    assert!(board.init_logging().is_ok());
    assert!(board.init_logging().is_ok());
}

fn clashing() -> Settings {
    let mut settings = Settings::default();
    settings.markers.dragging = settings.markers.start.clone();
    settings
}

#[test]
fn test_clashing_markers_rejected_on_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");
    fs::write(&path, r#"{ "markers": { "start": "x", "dragging": "x" } }"#).unwrap();

    let err = Settings::load_from(&path).unwrap_err();
    assert!(matches!(err, SettingsError::ConflictingMarkers(ref m) if m == "x"));
    assert_eq!(Settings::load_or_default(&path), Settings::default());
}

#[test]
fn test_clashing_markers_ignored_when_applied() {
    let mut board = board_with("todo", &["A", "B"]);
    board.apply_settings(clashing());
    assert_eq!(board.settings(), &Settings::default());

    // Pressed entry must not turn into a sentinel mid-drag
    let a = board.document.find_entry("A").unwrap();
    let at = center_of(&board, "A");
    press(&mut board, at);
    assert!(!board.document.is_sentinel(a));
    assert_eq!(board.document.entries(board.document.find_container("todo").unwrap()).len(), 2);
    board.document.check_invariants().expect("invariants");
}

#[test]
fn test_clashing_markers_at_construction_fall_back() {
    let board = TestBoardBuilder::new()
        .with_group("todo", &["A"])
        .with_settings(clashing())
        .build();
    assert_eq!(board.settings(), &Settings::default());
    assert_order(&board, "todo", &["start", "A"]);
    board.document.check_invariants().expect("invariants");
}

#[test]
fn test_exclusion_strategy_swapped_between_drags() {
    let mut board = board_with("todo", &["A", "B"]);
    assert_eq!(board.feedback().exclusion(), FeedbackExclusion::Hide);

    let mut settings = Settings::default();
    settings.feedback_exclusion = FeedbackExclusion::PointerEventsNone;
    board.apply_settings(settings);

    assert_eq!(board.feedback().exclusion(), FeedbackExclusion::PointerEventsNone);
    assert!(board.document.is_hit_excluded(board.document.feedback_layer()));
}

#[test]
fn test_layout_change_reflows_document() {
    let mut board = board_with("todo", &["A", "B"]);
    let mut settings = Settings::default();
    settings.layout.entry_height = 60.0;
    board.apply_settings(settings);

    assert_eq!(board.document.metrics().entry_height, 60.0);
    // Sentinel row ends at 48, rows are 60 tall now
    assert_eq!(center_of(&board, "B").y, 48.0 + 60.0 + 30.0);
}
