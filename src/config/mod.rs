//! Configuration module for the scatter editor
//!
//! Only display and startup options live here. The point collection itself
//! is never written to disk.
//!
//! # App Data Location
//!
//! Application data is stored in the platform-appropriate location:
//! - **Linux**: `~/.local/share/dev.scatter-editor/`
//! - **macOS**: `~/Library/Application Support/dev.scatter-editor/`
//! - **Windows**: `%APPDATA%\dev.scatter-editor\`
//!
//! # Files
//!
//! - `config.toml` - UI preferences, chart geometry, startup dataset
//! - `logs/` - Daily rolling log files
//!
//! Every section is optional; missing keys fall back to their defaults.
//!
//! ```toml
//! [ui]
//! dark_mode = false
//!
//! [chart]
//! width = 1024.0
//! height = 768.0
//!
//! [dataset]
//! initial_points = 50
//! seed = 42
//! ```

use crate::error::{ResultExt, Result, ScatterError};
use crate::points::PointSet;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application identifier for data directories
pub const APP_ID: &str = "dev.scatter-editor";

/// Config filename
pub const CONFIG_FILE: &str = "config.toml";

/// Log directory name inside the app data directory
pub const LOG_DIR: &str = "logs";

// ==================== App Data Directory ====================

/// Get the application data directory path
pub fn app_data_dir() -> Option<PathBuf> {
    dirs_next::data_dir().map(|p| p.join(APP_ID))
}

/// Ensure the app data directory exists
pub fn ensure_app_data_dir() -> Result<PathBuf> {
    let dir = app_data_dir().ok_or_else(|| {
        ScatterError::Config("Could not determine app data directory".to_string())
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir).context("Failed to create app data directory")?;
    }

    Ok(dir)
}

/// Get the path to the config file
pub fn config_path() -> Option<PathBuf> {
    app_data_dir().map(|p| p.join(CONFIG_FILE))
}

/// Get the log directory, creating it if needed
pub fn log_dir() -> Result<PathBuf> {
    let dir = ensure_app_data_dir()?.join(LOG_DIR);
    std::fs::create_dir_all(&dir).context("Failed to create log directory")?;
    Ok(dir)
}

// ==================== App Config ====================

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiPreferences,

    #[serde(default)]
    pub chart: ChartConfig,

    #[serde(default)]
    pub dataset: DatasetConfig,
}

impl AppConfig {
    /// Load configuration from a specific file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;

        toml::from_str(&content).with_context(|| format!("Failed to parse config file {:?}", path))
    }

    /// Load configuration from the default location
    ///
    /// A missing file is not an error and yields the defaults.
    pub fn load() -> Result<Self> {
        let path = config_path().ok_or_else(|| {
            ScatterError::Config("Could not determine config path".to_string())
        })?;

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(path)
    }

    /// Load configuration, returning defaults on any error
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            Self::default()
        })
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file {:?}", path))
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        let dir = ensure_app_data_dir()?;
        self.save_to(dir.join(CONFIG_FILE))
    }
}

// ==================== UI Preferences ====================

/// Window-level preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiPreferences {
    /// Enable dark mode
    #[serde(default = "default_true")]
    pub dark_mode: bool,

    /// Font scale factor
    #[serde(default = "default_font_scale")]
    pub font_scale: f32,

    /// Width of the point list side panel
    #[serde(default = "default_sidebar_width")]
    pub sidebar_width: f32,
}

fn default_true() -> bool {
    true
}

fn default_font_scale() -> f32 {
    1.0
}

fn default_sidebar_width() -> f32 {
    320.0
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            dark_mode: true,
            font_scale: default_font_scale(),
            sidebar_width: default_sidebar_width(),
        }
    }
}

// ==================== Chart Config ====================

/// Space reserved around the inner drawing area, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 20.0,
            bottom: 40.0,
            left: 40.0,
        }
    }
}

impl Margin {
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Chart geometry and appearance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Total chart width in pixels
    pub width: f32,
    /// Total chart height in pixels
    pub height: f32,
    /// Marker radius in pixels, also the click tolerance
    pub marker_radius: f32,
    /// Label offset from the marker centre in pixels
    pub label_offset: [f32; 2],
    /// Ticks requested per axis
    pub tick_count: usize,
    pub show_grid: bool,
    pub margin: Margin,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            marker_radius: 6.0,
            label_offset: [8.0, 4.0],
            tick_count: crate::scale::DEFAULT_TICK_COUNT,
            show_grid: true,
            margin: Margin::default(),
        }
    }
}

// ==================== Dataset Config ====================

/// Synthetic startup dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Number of points generated at startup
    pub initial_points: usize,
    /// Coordinates are sampled from `[0, coordinate_max)`
    pub coordinate_max: f64,
    /// Fixed RNG seed for a reproducible dataset
    pub seed: Option<u64>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            initial_points: 20,
            coordinate_max: 100.0,
            seed: None,
        }
    }
}

impl DatasetConfig {
    /// Generate the startup point collection
    pub fn build_points(&self) -> PointSet {
        match self.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                PointSet::synthetic(self.initial_points, self.coordinate_max, &mut rng)
            }
            None => {
                let mut rng = rand::rng();
                PointSet::synthetic(self.initial_points, self.coordinate_max, &mut rng)
            }
        }
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = AppConfig::default();
        assert!(config.ui.dark_mode);
        assert_eq!(config.chart.width, 800.0);
        assert_eq!(config.chart.height, 600.0);
        assert_eq!(config.chart.margin, Margin::default());
        assert_eq!(config.chart.marker_radius, 6.0);
        assert_eq!(config.dataset.initial_points, 20);
        assert_eq!(config.dataset.coordinate_max, 100.0);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [chart]
            width = 1024.0

            [dataset]
            seed = 42
            "#,
        )
        .unwrap();

        assert_eq!(config.chart.width, 1024.0);
        assert_eq!(config.chart.height, 600.0);
        assert_eq!(config.dataset.seed, Some(42));
        assert_eq!(config.dataset.initial_points, 20);
        assert!(config.ui.dark_mode);
    }

    #[test]
    fn test_margin_sums() {
        let margin = Margin::default();
        assert_eq!(margin.horizontal(), 60.0);
        assert_eq!(margin.vertical(), 60.0);
    }

    #[test]
    fn test_seeded_dataset_is_reproducible() {
        let dataset = DatasetConfig {
            seed: Some(9),
            ..Default::default()
        };
        let a = dataset.build_points();
        let b = dataset.build_points();
        assert_eq!(a.as_slice(), b.as_slice());
        assert_eq!(a.len(), 20);
    }

    #[test]
    fn test_unseeded_dataset_size() {
        let dataset = DatasetConfig {
            initial_points: 5,
            coordinate_max: 10.0,
            seed: None,
        };
        let points = dataset.build_points();
        assert_eq!(points.len(), 5);
        assert!(points.iter().all(|p| p.x >= 0.0 && p.x < 10.0));
    }
}
