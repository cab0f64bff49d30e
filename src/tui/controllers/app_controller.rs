//! # Application Controller
//!
//! One loop iteration collects finished flows, reads at most one terminal
//! event, and repaints whatever the view model marked as changed. Store
//! calls run on their own tasks, so the screen keeps answering keys while
//! requests are in flight.

use crate::config::BlogProfile;
use crate::tui::{
    commands::{CommandContext, CommandEvent, CommandRegistry},
    io::{EventStream, RenderStream},
    services::{FlowDispatcher, FlowOutcome, FlowRequest, HttpPostStore},
    view_models::ViewModel,
    views::TerminalRenderer,
};
use anyhow::Result;
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use std::time::Duration;

const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// The main application controller
pub struct AppController<ES: EventStream, RS: RenderStream> {
    view_model: ViewModel,
    view_renderer: TerminalRenderer<RS>,
    command_registry: CommandRegistry,
    dispatcher: FlowDispatcher,
    event_stream: ES,
    should_quit: bool,
}

impl<ES: EventStream, RS: RenderStream> AppController<ES, RS> {
    /// Create a controller talking to the store named by `profile`
    pub fn with_io_streams(profile: &BlogProfile, event_stream: ES, render_stream: RS) -> Result<Self> {
        let store = HttpPostStore::new(profile)?;
        tracing::debug!("Using post store at {}", store.base_url());

        let view_renderer = TerminalRenderer::with_render_stream(render_stream)?;
        let mut view_model = ViewModel::new();
        let (width, height) = view_renderer.terminal_size();
        view_model.update_terminal_size(width, height);

        Ok(Self {
            view_model,
            view_renderer,
            command_registry: CommandRegistry::new(),
            dispatcher: FlowDispatcher::new(store),
            event_stream,
            should_quit: false,
        })
    }

    pub fn view_model(&self) -> &ViewModel {
        &self.view_model
    }

    pub fn renderer(&self) -> &TerminalRenderer<RS> {
        &self.view_renderer
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Flows started but not yet applied
    pub fn in_flight(&self) -> usize {
        self.dispatcher.in_flight()
    }

    /// Kick off the start-up flows
    pub fn start(&mut self) {
        for request in self.view_model.start() {
            self.dispatch(request);
        }
    }

    /// Run the main application loop until quit
    pub async fn run(&mut self) -> Result<()> {
        self.view_renderer.initialize()?;
        self.start();
        let result = self.event_loop().await;
        // Restore the terminal even when the loop failed
        self.view_renderer.cleanup()?;
        result
    }

    async fn event_loop(&mut self) -> Result<()> {
        self.render_pending()?;

        while !self.should_quit {
            self.drain_outcomes();

            if self.event_stream.poll(EVENT_POLL_INTERVAL)? {
                match self.event_stream.read()? {
                    Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                        self.handle_key(key_event);
                    }
                    Event::Resize(width, height) => {
                        self.view_model.update_terminal_size(width, height);
                        self.view_renderer.update_size(width, height);
                    }
                    _ => {}
                }
            }

            if !self.should_quit {
                self.render_pending()?;
            }
            // Let flow tasks progress on single-threaded runtimes
            tokio::task::yield_now().await;
        }
        Ok(())
    }

    /// Handle one key and repaint, without the event loop
    pub fn process_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        self.handle_key(key_event);
        self.render_pending()
    }

    fn handle_key(&mut self, key_event: KeyEvent) {
        tracing::trace!("Received key event: {:?}", key_event);
        let context = CommandContext::from_view_model(&self.view_model);

        match self.command_registry.process_event(key_event, &context) {
            Ok(events) => {
                for event in events {
                    self.apply_command_event(event);
                }
            }
            Err(e) => tracing::warn!("Failed to process key event {:?}: {e}", key_event.code),
        }
    }

    /// Apply a command event to the view model, dispatching any flow it asks for
    fn apply_command_event(&mut self, event: CommandEvent) {
        tracing::debug!("Applying {:?}", event);

        let request = match event {
            CommandEvent::SelectionMoveRequested { delta } => {
                self.view_model.move_selection(delta);
                None
            }
            CommandEvent::OpenSelectedRequested => self.view_model.open_selected(),
            CommandEvent::NewPostFormFocusRequested => {
                self.view_model.focus_new_post_form();
                None
            }
            CommandEvent::NewPostFormLeaveRequested => {
                self.view_model.leave_new_post_form();
                None
            }
            CommandEvent::NewPostSubmitRequested => self.view_model.submit_new_post(),
            CommandEvent::EditBeginRequested => {
                self.view_model.begin_edit();
                None
            }
            CommandEvent::EditSaveRequested => self.view_model.save_edit(),
            CommandEvent::EditCancelRequested => {
                self.view_model.cancel_edit();
                None
            }
            CommandEvent::DeleteRequested => self.view_model.delete_current(),
            CommandEvent::TextInsertRequested { ch } => {
                self.view_model.insert_char(ch);
                None
            }
            CommandEvent::TextDeleteRequested => {
                self.view_model.backspace();
                None
            }
            CommandEvent::NewlineOrAdvanceRequested => {
                self.view_model.newline_or_advance();
                None
            }
            CommandEvent::FieldCycleRequested { forward } => {
                self.view_model.cycle_field(forward);
                None
            }
            CommandEvent::QuitRequested => {
                tracing::info!("Quit requested");
                self.should_quit = true;
                None
            }
        };

        if let Some(request) = request {
            self.dispatch(request);
        }
    }

    fn dispatch(&mut self, request: FlowRequest) {
        self.dispatcher.dispatch(request);
    }

    fn apply_outcome(&mut self, outcome: FlowOutcome) {
        for follow_up in self.view_model.apply_outcome(outcome) {
            self.dispatch(follow_up);
        }
    }

    /// Apply every outcome that has already arrived
    fn drain_outcomes(&mut self) {
        while let Some(outcome) = self.dispatcher.poll_outcome() {
            self.apply_outcome(outcome);
        }
    }

    /// Wait until no flow is in flight, applying outcomes (and their
    /// follow-ups) as they arrive, then repaint
    pub async fn settle(&mut self) -> Result<()> {
        while let Some(outcome) = self.dispatcher.next_outcome().await {
            self.apply_outcome(outcome);
        }
        self.render_pending()
    }

    fn render_pending(&mut self) -> Result<()> {
        let view_events = self.view_model.collect_pending_view_events();
        self.view_renderer
            .handle_view_events(&view_events, &self.view_model)
    }
}
