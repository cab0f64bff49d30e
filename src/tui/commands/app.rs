//! # Application Commands
//!
//! `Ctrl+C` quits from anywhere; `q` quits from the post list.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Command, CommandContext, CommandEvent};
use crate::tui::events::Focus;

pub struct QuitCommand;

impl Command for QuitCommand {
    fn is_relevant(&self, key: KeyEvent, context: &CommandContext) -> bool {
        match key.code {
            KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
            KeyCode::Char('q') => key.modifiers.is_empty() && context.focus == Focus::PostList,
            _ => false,
        }
    }

    fn execute(&self, _key: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::QuitRequested])
    }

    fn name(&self) -> &'static str {
        "Quit"
    }
}
