//! Point form dialog for adding and editing points
//!
//! Fields are kept as text while the dialog is open and converted with
//! [`coerce_number`] on submit. There is no validation: whatever the user
//! typed is submitted.

use super::{Dialog, DialogAction, DialogState, DialogWindowConfig};
use crate::frontend::state::FormMode;
use crate::types::{Point, PointFormData};
use egui::{Align, Key, Layout, TextEdit, Ui};

/// State for the point form
#[derive(Debug, Clone, PartialEq)]
pub struct PointFormState {
    pub mode: FormMode,
    /// X coordinate input text
    pub x: String,
    /// Y coordinate input text
    pub y: String,
    pub label: String,
}

impl Default for PointFormState {
    fn default() -> Self {
        Self::for_add()
    }
}

impl DialogState for PointFormState {}

impl PointFormState {
    /// Empty form for a new point
    pub fn for_add() -> Self {
        Self {
            mode: FormMode::Add,
            x: "0".to_string(),
            y: "0".to_string(),
            label: String::new(),
        }
    }

    /// Form seeded from an existing point
    pub fn for_edit(point: &Point) -> Self {
        Self {
            mode: FormMode::Edit,
            x: point.x.to_string(),
            y: point.y.to_string(),
            label: point.label.clone(),
        }
    }

    /// Package the current field values
    pub fn form_data(&self) -> PointFormData {
        PointFormData {
            x: coerce_number(&self.x),
            y: coerce_number(&self.y),
            label: self.label.clone(),
        }
    }
}

/// Convert form text to a number without rejecting anything
///
/// Blank input becomes `0.0`, unparseable input becomes NaN.
pub fn coerce_number(input: &str) -> f64 {
    let input = input.trim();
    if input.is_empty() {
        return 0.0;
    }
    input.parse::<f64>().unwrap_or(f64::NAN)
}

/// Action from the point form
#[derive(Debug, Clone, PartialEq)]
pub enum PointFormAction {
    /// The form was submitted with these values
    Submit(PointFormData),
}

/// The add/edit point dialog
pub struct PointFormDialog;

impl Dialog for PointFormDialog {
    type State = PointFormState;
    type Action = PointFormAction;
    type Context<'a> = ();

    fn title(state: &Self::State) -> &'static str {
        match state.mode {
            FormMode::Add => "Add New Point",
            FormMode::Edit => "Edit Point",
        }
    }

    fn window_config() -> DialogWindowConfig {
        DialogWindowConfig {
            width: 360.0,
            dismissable: true,
        }
    }

    fn render(
        state: &mut Self::State,
        _ctx: Self::Context<'_>,
        ui: &mut Ui,
    ) -> DialogAction<Self::Action> {
        let mut submit = false;
        let mut cancel = false;

        egui::Grid::new("point_form_grid")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("X Coordinate");
                submit |= form_field(ui, &mut state.x);
                ui.end_row();

                ui.label("Y Coordinate");
                submit |= form_field(ui, &mut state.y);
                ui.end_row();

                ui.label("Label");
                submit |= form_field(ui, &mut state.label);
                ui.end_row();
            });

        ui.add_space(8.0);
        ui.separator();

        let submit_text = match state.mode {
            FormMode::Add => "Add Point",
            FormMode::Edit => "Save Changes",
        };

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.button(submit_text).clicked() {
                submit = true;
            }
            if ui.button("Cancel").clicked() {
                cancel = true;
            }
        });

        if submit {
            DialogAction::CloseWithAction(PointFormAction::Submit(state.form_data()))
        } else if cancel {
            DialogAction::Close
        } else {
            DialogAction::None
        }
    }
}

/// Single-line text field; returns true when Enter was pressed in it
fn form_field(ui: &mut Ui, text: &mut String) -> bool {
    let response = ui.add(TextEdit::singleline(text).desired_width(200.0));
    response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter))
}
