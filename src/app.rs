//! Application module
//!
//! Re-exports the main application type from the frontend module.

pub use crate::frontend::ScatterApp;

// Re-export commonly used types for convenience
pub use crate::frontend::{AppAction, EditorState};
