//! Editor config loading from disk.

use layout_canvas::{ConfigError, EditorConfig};
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, json: &str) -> std::path::PathBuf {
    let path = dir.path().join("editor.json");
    fs::write(&path, json).unwrap();
    path
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = EditorConfig::load_or_default(&dir.path().join("absent.json")).unwrap();
    assert_eq!(config, EditorConfig::default());
}

#[test]
fn test_load_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, r#"{"zoom": 4, "snapThreshold": 0, "resizeDebounceMs": 250}"#);

    let config = EditorConfig::load(&path).unwrap();
    assert_eq!(config.zoom, 4.0);
    assert_eq!(config.snap_threshold, 0.0);
    assert_eq!(config.resize_debounce().as_millis(), 250);
}

#[test]
fn test_invalid_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, r#"{"zoom": -3}"#);

    assert!(matches!(EditorConfig::load(&path), Err(ConfigError::InvalidZoom(z)) if z == -3.0));

    let err = EditorConfig::load_or_default(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to load editor config"));
}

#[test]
fn test_round_trips_through_json() {
    let dir = TempDir::new().unwrap();
    let original = EditorConfig {
        zoom: 2.5,
        snap_center: false,
        ..EditorConfig::default()
    };
    let path = write_config(&dir, &serde_json::to_string_pretty(&original).unwrap());

    assert_eq!(EditorConfig::load(&path).unwrap(), original);
}
