//! Dialog trait system for modal dialogs
//!
//! Each dialog implements the [`Dialog`] trait, encapsulating its state,
//! actions, and rendering. [`show_dialog`] drives the lifecycle: it draws the
//! dialog as an `egui::Modal` over a dimmed backdrop, closes it when the
//! dialog asks to, and resets the state on close.

use egui::{Align, Context, Id, Layout, Modal, Ui};

/// Actions that a dialog can return after rendering
#[derive(Debug, Clone, Default)]
pub enum DialogAction<A> {
    /// Keep the dialog open, no action needed
    #[default]
    None,
    /// Close the dialog without performing any action
    Close,
    /// Close the dialog and perform the specified action
    CloseWithAction(A),
}

impl<A> DialogAction<A> {
    /// Check if the action indicates the dialog should close
    pub fn should_close(&self) -> bool {
        matches!(self, DialogAction::Close | DialogAction::CloseWithAction(_))
    }

    /// Extract the action if present
    pub fn into_action(self) -> Option<A> {
        match self {
            DialogAction::CloseWithAction(a) => Some(a),
            _ => None,
        }
    }
}

/// Trait for dialog state management
///
/// State is reset whenever the dialog closes, so a dialog reopened without
/// seeding starts from its defaults.
pub trait DialogState: Default {
    /// Reset the dialog state to its default values
    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Configuration for dialog appearance and behavior
#[derive(Debug, Clone)]
pub struct DialogWindowConfig {
    /// Width of the dialog content
    pub width: f32,
    /// Whether Escape or a click on the backdrop dismisses the dialog
    pub dismissable: bool,
}

impl Default for DialogWindowConfig {
    fn default() -> Self {
        Self {
            width: 400.0,
            dismissable: true,
        }
    }
}

/// Main dialog trait for implementing dialogs
///
/// # Example
///
/// ```ignore
/// pub struct MyDialog;
///
/// impl Dialog for MyDialog {
///     type State = MyDialogState;
///     type Action = MyDialogAction;
///     type Context<'a> = &'a SomeData;
///
///     fn title(_state: &Self::State) -> &'static str { "My Dialog" }
///
///     fn render(
///         state: &mut Self::State,
///         ctx: Self::Context<'_>,
///         ui: &mut Ui,
///     ) -> DialogAction<Self::Action> {
///         DialogAction::None
///     }
/// }
/// ```
pub trait Dialog {
    /// The state type for this dialog
    type State: DialogState;

    /// The action type this dialog can produce
    type Action;

    /// The context type needed to render this dialog
    type Context<'a>;

    /// Get the title for this dialog
    fn title(state: &Self::State) -> &'static str;

    /// Get the window configuration for this dialog
    fn window_config() -> DialogWindowConfig {
        DialogWindowConfig::default()
    }

    /// Render the dialog content
    fn render(
        state: &mut Self::State,
        ctx: Self::Context<'_>,
        ui: &mut Ui,
    ) -> DialogAction<Self::Action>;
}

/// Show a dialog using the Dialog trait
///
/// - Only renders if `is_open` is true
/// - Draws a title row with a close button above the dialog content
/// - Closes on `Close`/`CloseWithAction`, on the close button, and on
///   Escape or a backdrop click when the dialog is dismissable
/// - Resets the state whenever the dialog closes
///
/// Returns `Some(action)` if the dialog produced an action, `None` otherwise.
pub fn show_dialog<D: Dialog>(
    ctx: &Context,
    is_open: &mut bool,
    state: &mut D::State,
    dialog_ctx: D::Context<'_>,
) -> Option<D::Action> {
    if !*is_open {
        return None;
    }

    let config = D::window_config();
    let title = D::title(state);
    let mut dismissed = false;

    let modal = Modal::new(Id::new(std::any::type_name::<D>())).show(ctx, |ui| {
        ui.set_width(config.width);

        ui.horizontal(|ui| {
            ui.heading(title);
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.small_button("✕").on_hover_text("Close").clicked() {
                    dismissed = true;
                }
            });
        });
        ui.add_space(8.0);

        D::render(state, dialog_ctx, ui)
    });

    dismissed |= config.dismissable && modal.should_close();

    let (should_close, action) = resolve_action(modal.inner, dismissed);
    if should_close {
        *is_open = false;
        state.reset();
    }

    action
}

/// Decide whether a dialog closes and which action it yields
///
/// A dismissal closes the dialog on its own; an action submitted by the
/// content in the same frame is still returned.
fn resolve_action<A>(action: DialogAction<A>, dismissed: bool) -> (bool, Option<A>) {
    let should_close = dismissed || action.should_close();
    (should_close, action.into_action())
}

pub mod point_form;

pub use point_form::{
    coerce_number, PointFormAction, PointFormDialog, PointFormState,
};
