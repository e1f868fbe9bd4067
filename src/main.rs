//! Interactive Scatter Plot - Main Entry Point
//!
//! Opens the scatter editor seeded with a synthetic dataset.

use scatter_editor::{config, config::AppConfig, ScatterApp};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const APP_TITLE: &str = "Interactive Scatter Plot";

/// Set up stdout logging plus a daily log file when the data directory is usable
///
/// The returned guard flushes the file writer when dropped and must outlive
/// the application.
fn init_logging() -> Option<WorkerGuard> {
    let (file_layer, guard) = match config::log_dir() {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "scatter-editor.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false).boxed();
            (Some(layer), Some(guard))
        }
        Err(_) => (None, None),
    };

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,scatter_editor=debug")),
        )
        .with(fmt::layer())
        .with(file_layer)
        .init();

    if guard.is_none() {
        tracing::warn!("Log directory unavailable, logging to stdout only");
    }

    guard
}

fn main() -> eframe::Result<()> {
    let _log_guard = init_logging();

    tracing::info!("Starting {}", APP_TITLE);

    let config = AppConfig::load_or_default();
    let points = config.dataset.build_points();

    let window_width = config.chart.width + config.ui.sidebar_width + 48.0;
    let window_height = config.chart.height + 120.0;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([window_width, window_height])
            .with_min_inner_size([480.0, 360.0])
            .with_title(APP_TITLE),
        ..Default::default()
    };

    let dark_mode = config.ui.dark_mode;

    let result = eframe::run_native(
        APP_TITLE,
        native_options,
        Box::new(move |cc| {
            if dark_mode {
                cc.egui_ctx.set_visuals(egui::Visuals::dark());
            } else {
                cc.egui_ctx.set_visuals(egui::Visuals::light());
            }

            Ok(Box::new(ScatterApp::new(cc, config, points)))
        }),
    );

    tracing::info!("Shutting down...");

    result
}
