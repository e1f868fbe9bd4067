//! # Scatter Editor: Interactive Scatter Plot
//!
//! A desktop editor for a small collection of labelled 2D points. Points are
//! drawn on a scatter chart whose axes grow to fit the data; clicking a
//! marker opens it for editing, and a side list offers edit and delete per
//! point.
//!
//! ## Architecture
//!
//! - **Model**: [`points::PointSet`] owns the collection and assigns ids
//! - **Scales**: [`scale::LinearScale`] maps data to pixels with rounded
//!   domains and tick generation
//! - **Frontend**: eframe/egui UI with egui_plot for the chart
//!
//! ## Configuration
//!
//! Display and startup options are read from `config.toml` in the
//! platform-appropriate data directory under `dev.scatter-editor`:
//!
//! - **Linux**: `~/.local/share/dev.scatter-editor/`
//! - **macOS**: `~/Library/Application Support/dev.scatter-editor/`
//! - **Windows**: `%APPDATA%\dev.scatter-editor\`
//!
//! The points themselves live only in memory.
//!
//! ## Example
//!
//! ```ignore
//! use scatter_editor::{config::AppConfig, ScatterApp};
//!
//! fn main() -> eframe::Result<()> {
//!     let config = AppConfig::load_or_default();
//!     let points = config.dataset.build_points();
//!
//!     eframe::run_native(
//!         "Interactive Scatter Plot",
//!         eframe::NativeOptions::default(),
//!         Box::new(|cc| Ok(Box::new(ScatterApp::new(cc, config, points)))),
//!     )
//! }
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod frontend;
pub mod points;
pub mod scale;
pub mod types;

// Re-export commonly used types
pub use app::ScatterApp;
pub use config::AppConfig;
pub use error::{Result, ScatterError};
pub use points::PointSet;
pub use types::{Point, PointFormData, PointId};
