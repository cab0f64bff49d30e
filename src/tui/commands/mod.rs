//! # Command Pattern
//!
//! Maps key events to semantic [`CommandEvent`]s. Commands only look at the
//! key and a read-only [`CommandContext`]; the controller applies the events
//! they return to the view model and dispatches any resulting flows.

use anyhow::Result;
use crossterm::event::KeyEvent;

use crate::tui::events::Focus;
use crate::tui::view_models::ViewModel;

pub mod app;
pub mod form;
pub mod navigation;
pub mod post;
pub mod registry;

pub use app::QuitCommand;
pub use form::{FieldCycleCommand, FormEnterCommand, TextInputCommand};
pub use navigation::{ListNavigationCommand, NewPostFocusCommand, OpenPostCommand};
pub use post::{BeginEditCommand, DeletePostCommand, LeaveFormCommand, SubmitFormCommand};
pub use registry::CommandRegistry;

/// Semantic intents produced by commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandEvent {
    /// Move the list highlight by `delta` rows
    SelectionMoveRequested { delta: isize },
    /// Fetch the highlighted post into the detail region
    OpenSelectedRequested,
    /// Give key input to the new-post form
    NewPostFormFocusRequested,
    /// Leave the new-post form, keeping its contents
    NewPostFormLeaveRequested,
    /// Submit the new-post form
    NewPostSubmitRequested,
    /// Swap the detail region for the edit form
    EditBeginRequested,
    /// Submit the edit form
    EditSaveRequested,
    /// Discard the edit form
    EditCancelRequested,
    /// Delete the shown post
    DeleteRequested,
    /// Type a character into the focused input
    TextInsertRequested { ch: char },
    /// Remove the last character of the focused input
    TextDeleteRequested,
    /// Enter inside a form
    NewlineOrAdvanceRequested,
    /// Next or previous input of the focused form
    FieldCycleRequested { forward: bool },
    /// Leave the application
    QuitRequested,
}

/// Read-only application state used to decide command relevance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandContext {
    /// Area receiving key input
    pub focus: Focus,
    /// Whether the detail region shows a post
    pub has_detail_post: bool,
    /// Whether the detail panel is in the editing state
    pub is_editing: bool,
}

impl CommandContext {
    /// Create CommandContext from current ViewModel state
    pub fn from_view_model(view_model: &ViewModel) -> Self {
        Self {
            focus: view_model.focus(),
            has_detail_post: view_model.current_detail_id().is_some(),
            is_editing: view_model.detail().is_editing(),
        }
    }
}

/// A key binding
pub trait Command: Send + Sync {
    /// Check if this command should handle the given key event
    fn is_relevant(&self, key: KeyEvent, context: &CommandContext) -> bool;

    /// Translate the key into intents
    fn execute(&self, key: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>>;

    /// Get command name for debugging and logging
    fn name(&self) -> &'static str;
}
