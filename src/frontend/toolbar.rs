//! Toolbar panel: title, sidebar toggle, and the add button
//!
//! Sits at the top of the window above the chart.

use egui::{RichText, Ui};

use crate::frontend::state::AppAction;

/// Context needed to render the toolbar.
pub struct ToolbarContext {
    pub sidebar_open: bool,
}

/// Render the main application toolbar.
///
/// Returns actions to be applied by the app.
pub fn render_toolbar(ui: &mut Ui, ctx: &ToolbarContext) -> Vec<AppAction> {
    let mut actions = Vec::new();

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let toggle_hint = if ctx.sidebar_open {
            "Hide point list (Ctrl+B)"
        } else {
            "Show point list (Ctrl+B)"
        };
        if ui
            .selectable_label(ctx.sidebar_open, RichText::new("☰").size(16.0))
            .on_hover_text(toggle_hint)
            .clicked()
        {
            actions.push(AppAction::ToggleSidebar);
        }

        ui.label(RichText::new("Interactive Scatter Plot").heading());

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .button("➕ Add Point")
                .on_hover_text("Add a new point (Ctrl+N)")
                .clicked()
            {
                actions.push(AppAction::OpenAddForm);
            }
        });
    });

    actions
}
