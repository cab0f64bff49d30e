//! # List Navigation Commands
//!
//! Moving the highlight, opening a post and jumping to the new-post form.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::{Command, CommandContext, CommandEvent};
use crate::tui::events::Focus;

/// `j`/`k`/arrow keys in the post list
pub struct ListNavigationCommand;

impl Command for ListNavigationCommand {
    fn is_relevant(&self, key: KeyEvent, context: &CommandContext) -> bool {
        context.focus == Focus::PostList
            && key.modifiers.is_empty()
            && matches!(
                key.code,
                KeyCode::Char('j') | KeyCode::Char('k') | KeyCode::Down | KeyCode::Up
            )
    }

    fn execute(&self, key: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        let delta = match key.code {
            KeyCode::Char('j') | KeyCode::Down => 1,
            _ => -1,
        };
        Ok(vec![CommandEvent::SelectionMoveRequested { delta }])
    }

    fn name(&self) -> &'static str {
        "ListNavigation"
    }
}

/// `Enter` in the post list
pub struct OpenPostCommand;

impl Command for OpenPostCommand {
    fn is_relevant(&self, key: KeyEvent, context: &CommandContext) -> bool {
        context.focus == Focus::PostList && key.modifiers.is_empty() && key.code == KeyCode::Enter
    }

    fn execute(&self, _key: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::OpenSelectedRequested])
    }

    fn name(&self) -> &'static str {
        "OpenPost"
    }
}

/// `n` in the post list
pub struct NewPostFocusCommand;

impl Command for NewPostFocusCommand {
    fn is_relevant(&self, key: KeyEvent, context: &CommandContext) -> bool {
        context.focus == Focus::PostList
            && key.modifiers.is_empty()
            && key.code == KeyCode::Char('n')
    }

    fn execute(&self, _key: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::NewPostFormFocusRequested])
    }

    fn name(&self) -> &'static str {
        "NewPostFocus"
    }
}
