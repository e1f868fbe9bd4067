//! Frontend module for egui UI
//!
//! This module provides the main UI components using eframe/egui.
//!
//! # Architecture
//!
//! A single window: toolbar on top, status bar at the bottom, an optional
//! point list on the right, and the scatter chart filling the rest. The
//! add/edit form opens as a modal over everything.
//!
//! Views never mutate the point collection directly. They return
//! [`AppAction`]s which the app applies through
//! [`EditorState::handle_action`] once the frame's widgets are laid out.
//!
//! # Main Types
//!
//! - [`ScatterApp`] - Main application state implementing [`eframe::App`]
//! - [`ChartView`] - Chart rendering with egui_plot
//! - [`EditorState`] - Points, selection, form and sidebar flags
//!
//! # Submodules
//!
//! - `chart` - Chart layout and rendering
//! - `dialogs` - Modal dialog trait and the point form
//! - `panels` - Point list side panel
//! - `toolbar` / `status_bar` - Top and bottom bars

pub mod chart;
pub mod dialogs;
mod panels;
pub mod state;
pub mod status_bar;
pub mod toolbar;

pub use chart::{ChartLayout, ChartView};
pub use panels::*;
pub use state::{AppAction, EditorState, FormMode};

use dialogs::{show_dialog, PointFormAction, PointFormDialog};
use status_bar::{render_status_bar, StatusBarContext};
use toolbar::{render_toolbar, ToolbarContext};

use crate::config::AppConfig;
use crate::points::PointSet;

/// Main application
pub struct ScatterApp {
    config: AppConfig,
    state: EditorState,
    chart: ChartView,
}

impl ScatterApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig, points: PointSet) -> Self {
        let mut style = (*cc.egui_ctx.style()).clone();
        style.text_styles.iter_mut().for_each(|(_, font_id)| {
            font_id.size *= config.ui.font_scale;
        });
        cc.egui_ctx.set_style(style);

        tracing::info!("Editor started with {} points", points.len());

        Self {
            config,
            state: EditorState::new(points),
            chart: ChartView::new(),
        }
    }

    /// Editor state, read-only
    pub fn state(&self) -> &EditorState {
        &self.state
    }

    fn handle_action(&mut self, action: AppAction) {
        self.state.handle_action(action);
    }

    fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        use egui::{Key, Modifiers};

        // The modal owns the keyboard while it is open
        if self.state.form_open {
            return;
        }

        let (add_point, toggle_sidebar) = ctx.input_mut(|i| {
            (
                i.consume_key(Modifiers::COMMAND, Key::N),
                i.consume_key(Modifiers::COMMAND, Key::B),
            )
        });

        if add_point {
            self.handle_action(AppAction::OpenAddForm);
        }
        if toggle_sidebar {
            self.handle_action(AppAction::ToggleSidebar);
        }
    }
}

impl eframe::App for ScatterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard_shortcuts(ctx);

        let mut actions = Vec::new();

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            let toolbar_ctx = ToolbarContext {
                sidebar_open: self.state.sidebar_open,
            };
            actions.extend(render_toolbar(ui, &toolbar_ctx));
        });

        let layout = self.chart.layout(self.state.points.as_slice(), &self.config.chart);
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            let status_ctx = StatusBarContext {
                point_count: self.state.points.len(),
                layout: &layout,
            };
            render_status_bar(ui, &status_ctx);
        });

        if self.state.sidebar_open {
            egui::SidePanel::right("point_list")
                .default_width(self.config.ui.sidebar_width)
                .resizable(true)
                .show(ctx, |ui| {
                    actions.extend(render_point_list(ui, self.state.points.as_slice()));
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().show(ui, |ui| {
                if let Some(point) =
                    self.chart
                        .show(ui, self.state.points.as_slice(), &self.config.chart)
                {
                    actions.push(AppAction::OpenEditForm(point));
                }
            });
        });

        if let Some(PointFormAction::Submit(data)) = show_dialog::<PointFormDialog>(
            ctx,
            &mut self.state.form_open,
            &mut self.state.form,
            (),
        ) {
            actions.push(AppAction::SubmitForm(data));
        }

        if !actions.is_empty() {
            for action in actions {
                self.handle_action(action);
            }
            ctx.request_repaint();
        }
    }
}
