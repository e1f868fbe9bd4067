//! Point list side panel
//!
//! Lists every point with its label and coordinates. Rows carry edit and
//! delete buttons; the panel itself never mutates the collection and returns
//! [`AppAction`]s instead.

use crate::frontend::state::AppAction;
use crate::types::Point;
use egui::{Align, Color32, Layout, RichText, ScrollArea, Ui};

/// Format coordinates for display, two decimals each
pub fn format_coordinates(point: &Point) -> String {
    format!("({:.2}, {:.2})", point.x, point.y)
}

/// Render the point list panel
///
/// Returns actions to be applied by the app.
pub fn render_point_list(ui: &mut Ui, points: &[Point]) -> Vec<AppAction> {
    let mut actions = Vec::new();

    ui.horizontal(|ui| {
        ui.heading("Data Points");
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.small_button("✕").on_hover_text("Close").clicked() {
                actions.push(AppAction::CloseSidebar);
            }
        });
    });
    ui.separator();

    if points.is_empty() {
        ui.label(RichText::new("No points").italics().color(Color32::GRAY));
        return actions;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for point in points {
                render_point_row(ui, point, &mut actions);
            }
        });

    actions
}

fn render_point_row(ui: &mut Ui, point: &Point, actions: &mut Vec<AppAction>) {
    ui.push_id(point.id.as_str(), |ui| {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(&point.label).strong());
                ui.label(
                    RichText::new(format_coordinates(point))
                        .small()
                        .color(Color32::GRAY),
                );
            });

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.small_button("🗑").on_hover_text("Delete point").clicked() {
                    actions.push(AppAction::DeletePoint(point.id.clone()));
                }
                if ui.small_button("✏").on_hover_text("Edit point").clicked() {
                    actions.push(AppAction::OpenEditForm(point.clone()));
                }
            });
        });
        ui.separator();
    });
}
