//! Editor state and the actions that change it
//!
//! Views borrow [`EditorState`] read-only and return [`AppAction`]s; the app
//! applies them through [`EditorState::handle_action`] at the end of the
//! frame. This keeps every mutation in one place and testable without a UI.

use crate::frontend::dialogs::PointFormState;
use crate::points::PointSet;
use crate::types::{Point, PointFormData, PointId};

/// Whether the form creates a new point or edits the selected one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Add,
    Edit,
}

/// Actions that any view can emit
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    /// Open the form with default values for a new point
    OpenAddForm,
    /// Open the form seeded from a point, selecting it for editing
    OpenEditForm(Point),
    /// Apply submitted form values according to the current form mode
    SubmitForm(PointFormData),
    /// Remove a point by identifier
    DeletePoint(PointId),
    /// Show or hide the point list
    ToggleSidebar,
    /// Hide the point list
    CloseSidebar,
}

/// Authoritative editor state
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    /// The point collection
    pub points: PointSet,
    pub form_open: bool,
    pub sidebar_open: bool,
    pub form_mode: FormMode,
    /// Point being edited, captured when the edit form opened
    pub selected: Option<Point>,
    /// Text currently in the form fields
    pub form: PointFormState,
}

impl EditorState {
    pub fn new(points: PointSet) -> Self {
        Self {
            points,
            ..Default::default()
        }
    }

    /// Apply a single action
    pub fn handle_action(&mut self, action: AppAction) {
        tracing::debug!("Handling action {:?}", action);

        match action {
            AppAction::OpenAddForm => {
                self.selected = None;
                self.form_mode = FormMode::Add;
                self.form = PointFormState::for_add();
                self.form_open = true;
            }
            AppAction::OpenEditForm(point) => {
                self.form = PointFormState::for_edit(&point);
                self.selected = Some(point);
                self.form_mode = FormMode::Edit;
                self.form_open = true;
            }
            AppAction::SubmitForm(data) => {
                self.submit_form(data);
                self.form_open = false;
            }
            AppAction::DeletePoint(id) => {
                self.points.delete(&id);
            }
            AppAction::ToggleSidebar => {
                self.sidebar_open = !self.sidebar_open;
            }
            AppAction::CloseSidebar => {
                self.sidebar_open = false;
            }
        }
    }

    fn submit_form(&mut self, data: PointFormData) {
        match self.form_mode {
            FormMode::Add => {
                self.points.add(data);
            }
            FormMode::Edit => match &self.selected {
                Some(selected) => {
                    self.points.edit(&selected.id, data);
                }
                None => tracing::debug!("Edit submitted with no point selected"),
            },
        }
    }
}
