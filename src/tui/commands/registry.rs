//! # Command Registry
//!
//! Checks each command's `is_relevant()` in registration order and executes
//! the first match.

use anyhow::Result;
use crossterm::event::KeyEvent;

use super::{
    BeginEditCommand, Command, CommandContext, CommandEvent, DeletePostCommand, FieldCycleCommand,
    FormEnterCommand, LeaveFormCommand, ListNavigationCommand, NewPostFocusCommand,
    OpenPostCommand, QuitCommand, SubmitFormCommand, TextInputCommand,
};

pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create a new registry with default commands
    pub fn new() -> Self {
        let mut registry = Self {
            commands: Vec::new(),
        };
        registry.register_default_commands();
        registry
    }

    fn register_default_commands(&mut self) {
        // Quit and submit first: both use Ctrl chords that text input must not see
        self.add_command(Box::new(QuitCommand));
        self.add_command(Box::new(SubmitFormCommand));
        self.add_command(Box::new(LeaveFormCommand));
        self.add_command(Box::new(FieldCycleCommand));
        self.add_command(Box::new(FormEnterCommand));
        self.add_command(Box::new(TextInputCommand));
        self.add_command(Box::new(ListNavigationCommand));
        self.add_command(Box::new(OpenPostCommand));
        self.add_command(Box::new(NewPostFocusCommand));
        self.add_command(Box::new(BeginEditCommand));
        self.add_command(Box::new(DeletePostCommand));
    }

    pub fn add_command(&mut self, command: Box<dyn Command>) {
        self.commands.push(command);
    }

    /// Process a key event through the first relevant command.
    /// Unbound keys produce no events.
    pub fn process_event(
        &self,
        key: KeyEvent,
        context: &CommandContext,
    ) -> Result<Vec<CommandEvent>> {
        match self
            .commands
            .iter()
            .find(|command| command.is_relevant(key, context))
        {
            Some(command) => {
                tracing::debug!("Key {:?} handled by {}", key.code, command.name());
                command.execute(key, context)
            }
            None => Ok(Vec::new()),
        }
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::commands::test_support::{context, ctrl, key};
    use crate::tui::events::Focus;
    use crossterm::event::KeyCode;

    #[test]
    fn q_should_type_in_forms_but_quit_in_list() {
        let registry = CommandRegistry::new();
        let q = key(KeyCode::Char('q'));

        assert_eq!(
            registry
                .process_event(q, &context(Focus::PostList))
                .unwrap(),
            vec![CommandEvent::QuitRequested]
        );
        assert_eq!(
            registry
                .process_event(q, &context(Focus::NewPostForm))
                .unwrap(),
            vec![CommandEvent::TextInsertRequested { ch: 'q' }]
        );
    }

    #[test]
    fn ctrl_s_should_submit_rather_than_type() {
        let registry = CommandRegistry::new();
        assert_eq!(
            registry
                .process_event(ctrl('s'), &context(Focus::NewPostForm))
                .unwrap(),
            vec![CommandEvent::NewPostSubmitRequested]
        );
    }

    #[test]
    fn unbound_key_should_produce_nothing() {
        let registry = CommandRegistry::new();
        assert!(registry
            .process_event(key(KeyCode::F(5)), &context(Focus::PostList))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn e_should_type_while_editing() {
        let registry = CommandRegistry::new();
        assert_eq!(
            registry
                .process_event(key(KeyCode::Char('e')), &context(Focus::EditForm))
                .unwrap(),
            vec![CommandEvent::TextInsertRequested { ch: 'e' }]
        );
    }
}
