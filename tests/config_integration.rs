//! Config file load and save against a temporary directory

use scatter_editor::config::{AppConfig, ChartConfig, Margin};
use scatter_editor::ScatterError;
use tempfile::TempDir;

#[test]
fn test_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = AppConfig::default();
    config.ui.dark_mode = false;
    config.chart = ChartConfig {
        width: 1024.0,
        tick_count: 5,
        ..ChartConfig::default()
    };
    config.dataset.seed = Some(7);

    config.save_to(&path).unwrap();
    let loaded = AppConfig::load_from(&path).unwrap();

    assert_eq!(loaded, config);
}

#[test]
fn test_missing_file_is_error() {
    let dir = TempDir::new().unwrap();
    let err = AppConfig::load_from(dir.path().join("absent.toml")).unwrap_err();

    assert!(matches!(err, ScatterError::WithContext { .. }));
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[chart]\nwidth = \"wide\"\n").unwrap();

    let err = AppConfig::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_empty_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "").unwrap();

    assert_eq!(AppConfig::load_from(&path).unwrap(), AppConfig::default());
}

#[test]
fn test_partial_margin_keeps_other_sides() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[chart]\nwidth = 900.0\n\n[chart.margin]\ntop = 10.0\n").unwrap();

    let config = AppConfig::load_from(&path).unwrap();
    assert_eq!(config.chart.width, 900.0);
    assert_eq!(config.chart.margin.top, 10.0);
    assert_eq!(config.chart.margin.left, Margin::default().left);
    assert_eq!(config.chart.margin.bottom, Margin::default().bottom);
}

#[test]
fn test_infinite_coordinate_max_still_builds_points() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[dataset]\ncoordinate_max = inf\nseed = 1\n").unwrap();

    let config = AppConfig::load_from(&path).unwrap();
    let points = config.dataset.build_points();
    assert_eq!(points.len(), config.dataset.initial_points);
    assert!(points.iter().all(|p| p.is_finite()));
}
