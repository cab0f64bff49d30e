//! # Form Input Commands
//!
//! Typing, deleting and moving between inputs of the focused form.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Command, CommandContext, CommandEvent};

/// Printable characters and `Backspace`
pub struct TextInputCommand;

impl Command for TextInputCommand {
    fn is_relevant(&self, key: KeyEvent, context: &CommandContext) -> bool {
        if !context.focus.is_form() {
            return false;
        }
        match key.code {
            KeyCode::Char(_) => (key.modifiers - KeyModifiers::SHIFT).is_empty(),
            KeyCode::Backspace => true,
            _ => false,
        }
    }

    fn execute(&self, key: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        let event = match key.code {
            KeyCode::Char(ch) => CommandEvent::TextInsertRequested { ch },
            _ => CommandEvent::TextDeleteRequested,
        };
        Ok(vec![event])
    }

    fn name(&self) -> &'static str {
        "TextInput"
    }
}

/// `Enter` inside a form
pub struct FormEnterCommand;

impl Command for FormEnterCommand {
    fn is_relevant(&self, key: KeyEvent, context: &CommandContext) -> bool {
        context.focus.is_form() && key.code == KeyCode::Enter && key.modifiers.is_empty()
    }

    fn execute(&self, _key: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::NewlineOrAdvanceRequested])
    }

    fn name(&self) -> &'static str {
        "FormEnter"
    }
}

/// `Tab` / `Shift+Tab` inside a form
pub struct FieldCycleCommand;

impl Command for FieldCycleCommand {
    fn is_relevant(&self, key: KeyEvent, context: &CommandContext) -> bool {
        context.focus.is_form() && matches!(key.code, KeyCode::Tab | KeyCode::BackTab)
    }

    fn execute(&self, key: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        let forward =
            key.code == KeyCode::Tab && !key.modifiers.contains(KeyModifiers::SHIFT);
        Ok(vec![CommandEvent::FieldCycleRequested { forward }])
    }

    fn name(&self) -> &'static str {
        "FieldCycle"
    }
}
