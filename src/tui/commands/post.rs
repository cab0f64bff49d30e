//! # Post Action Commands
//!
//! Edit, delete, submit and leave. These start (or end) write flows.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Command, CommandContext, CommandEvent};
use crate::tui::events::Focus;

/// `e` in the post list while a post is shown
pub struct BeginEditCommand;

impl Command for BeginEditCommand {
    fn is_relevant(&self, key: KeyEvent, context: &CommandContext) -> bool {
        context.focus == Focus::PostList
            && context.has_detail_post
            && !context.is_editing
            && key.modifiers.is_empty()
            && key.code == KeyCode::Char('e')
    }

    fn execute(&self, _key: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::EditBeginRequested])
    }

    fn name(&self) -> &'static str {
        "BeginEdit"
    }
}

/// `d` in the post list while a post is shown
pub struct DeletePostCommand;

impl Command for DeletePostCommand {
    fn is_relevant(&self, key: KeyEvent, context: &CommandContext) -> bool {
        context.focus == Focus::PostList
            && context.has_detail_post
            && key.modifiers.is_empty()
            && key.code == KeyCode::Char('d')
    }

    fn execute(&self, _key: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::DeleteRequested])
    }

    fn name(&self) -> &'static str {
        "DeletePost"
    }
}

/// `Ctrl+S` inside a form
pub struct SubmitFormCommand;

impl Command for SubmitFormCommand {
    fn is_relevant(&self, key: KeyEvent, context: &CommandContext) -> bool {
        context.focus.is_form()
            && key.modifiers.contains(KeyModifiers::CONTROL)
            && key.code == KeyCode::Char('s')
    }

    fn execute(&self, _key: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>> {
        let event = match context.focus {
            Focus::EditForm => CommandEvent::EditSaveRequested,
            Focus::NewPostForm => CommandEvent::NewPostSubmitRequested,
            Focus::PostList => anyhow::bail!("Submit outside of a form"),
        };
        Ok(vec![event])
    }

    fn name(&self) -> &'static str {
        "SubmitForm"
    }
}

/// `Esc` inside a form: cancel the edit, or step out of the new-post form
pub struct LeaveFormCommand;

impl Command for LeaveFormCommand {
    fn is_relevant(&self, key: KeyEvent, context: &CommandContext) -> bool {
        context.focus.is_form() && key.code == KeyCode::Esc
    }

    fn execute(&self, _key: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>> {
        let event = match context.focus {
            Focus::EditForm => CommandEvent::EditCancelRequested,
            Focus::NewPostForm => CommandEvent::NewPostFormLeaveRequested,
            Focus::PostList => anyhow::bail!("Leave outside of a form"),
        };
        Ok(vec![event])
    }

    fn name(&self) -> &'static str {
        "LeaveForm"
    }
}
