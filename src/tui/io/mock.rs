//! # Mock I/O Implementations for Testing
//!
//! `MockEventStream` replays scripted events. `MockRenderStream` keeps an
//! in-memory screen so tests can read back what each row shows and in which
//! color.

use super::{EventStream, RenderStream, TerminalSize};
use anyhow::Result;
use crossterm::event::Event;
use crossterm::style::Color;
use std::collections::VecDeque;
use std::io::Write;
use std::time::Duration;

/// Scripted event source
pub struct MockEventStream {
    events: VecDeque<Event>,
}

impl MockEventStream {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn push_event(&mut self, event: Event) {
        self.events.push_back(event);
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl Default for MockEventStream {
    fn default() -> Self {
        Self::empty()
    }
}

impl EventStream for MockEventStream {
    fn poll(&mut self, _timeout: Duration) -> Result<bool> {
        Ok(!self.events.is_empty())
    }

    fn read(&mut self) -> Result<Event> {
        self.events
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("No events available"))
    }
}

/// Recorded terminal operation, text writes excluded
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    ClearScreen,
    MoveCursor(u16, u16),
    HideCursor,
    ShowCursor,
    SetForegroundColor(Color),
    ResetColor,
    EnterAlternateScreen,
    LeaveAlternateScreen,
    EnableRawMode,
    DisableRawMode,
    Flush,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    ch: char,
    color: Option<Color>,
}

const BLANK: Cell = Cell {
    ch: ' ',
    color: None,
};

/// In-memory terminal
///
/// Writes land at the cursor, one char per cell, and are cut at the right
/// edge.
pub struct MockRenderStream {
    commands: Vec<RenderCommand>,
    cells: Vec<Vec<Cell>>,
    terminal_size: TerminalSize,
    cursor: (u16, u16),
    color: Option<Color>,
    cursor_visible: bool,
    raw_mode: bool,
    alternate_screen: bool,
}

impl MockRenderStream {
    pub fn new() -> Self {
        Self::with_size((80, 24))
    }

    pub fn with_size(size: TerminalSize) -> Self {
        let (width, height) = size;
        Self {
            commands: Vec::new(),
            cells: vec![vec![BLANK; width as usize]; height as usize],
            terminal_size: size,
            cursor: (0, 0),
            color: None,
            cursor_visible: true,
            raw_mode: false,
            alternate_screen: false,
        }
    }

    /// Recorded operations, in order
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    pub fn has_command(&self, command: &RenderCommand) -> bool {
        self.commands.contains(command)
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    /// Text of row `y` without trailing blanks
    pub fn row_text(&self, y: u16) -> String {
        self.cells
            .get(y as usize)
            .map(|row| row.iter().map(|cell| cell.ch).collect::<String>())
            .unwrap_or_default()
            .trim_end()
            .to_string()
    }

    /// All rows joined by newlines
    pub fn screen_text(&self) -> String {
        (0..self.terminal_size.1)
            .map(|y| self.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn contains(&self, text: &str) -> bool {
        (0..self.terminal_size.1).any(|y| self.row_text(y).contains(text))
    }

    /// Color of the first char of the first on-screen occurrence of `text`
    ///
    /// `None` when the text is not on screen; `Some(None)` when it is drawn
    /// in the default color.
    pub fn color_of(&self, text: &str) -> Option<Option<Color>> {
        (0..self.terminal_size.1).find_map(|y| {
            let row = &self.cells[y as usize];
            let line: String = row.iter().map(|cell| cell.ch).collect();
            let byte_index = line.find(text)?;
            let column = line[..byte_index].chars().count();
            Some(row[column].color)
        })
    }

    pub fn is_cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn is_raw_mode(&self) -> bool {
        self.raw_mode
    }

    pub fn is_alternate_screen(&self) -> bool {
        self.alternate_screen
    }

    fn put_char(&mut self, ch: char) {
        let (x, y) = self.cursor;
        if let Some(cell) = self
            .cells
            .get_mut(y as usize)
            .and_then(|row| row.get_mut(x as usize))
        {
            *cell = Cell {
                ch,
                color: self.color,
            };
        }
        self.cursor.0 = x.saturating_add(1);
    }
}

impl Default for MockRenderStream {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for MockRenderStream {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        for ch in String::from_utf8_lossy(buf).chars() {
            self.put_char(ch);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.commands.push(RenderCommand::Flush);
        Ok(())
    }
}

impl RenderStream for MockRenderStream {
    fn clear_screen(&mut self) -> Result<()> {
        self.commands.push(RenderCommand::ClearScreen);
        for row in &mut self.cells {
            row.fill(BLANK);
        }
        Ok(())
    }

    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        self.commands.push(RenderCommand::MoveCursor(x, y));
        self.cursor = (x, y);
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<()> {
        self.commands.push(RenderCommand::HideCursor);
        self.cursor_visible = false;
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<()> {
        self.commands.push(RenderCommand::ShowCursor);
        self.cursor_visible = true;
        Ok(())
    }

    fn set_foreground_color(&mut self, color: Color) -> Result<()> {
        self.commands.push(RenderCommand::SetForegroundColor(color));
        self.color = Some(color);
        Ok(())
    }

    fn reset_color(&mut self) -> Result<()> {
        self.commands.push(RenderCommand::ResetColor);
        self.color = None;
        Ok(())
    }

    fn get_size(&self) -> Result<TerminalSize> {
        Ok(self.terminal_size)
    }

    fn enter_alternate_screen(&mut self) -> Result<()> {
        self.commands.push(RenderCommand::EnterAlternateScreen);
        self.alternate_screen = true;
        Ok(())
    }

    fn leave_alternate_screen(&mut self) -> Result<()> {
        self.commands.push(RenderCommand::LeaveAlternateScreen);
        self.alternate_screen = false;
        Ok(())
    }

    fn enable_raw_mode(&mut self) -> Result<()> {
        self.commands.push(RenderCommand::EnableRawMode);
        self.raw_mode = true;
        Ok(())
    }

    fn disable_raw_mode(&mut self) -> Result<()> {
        self.commands.push(RenderCommand::DisableRawMode);
        self.raw_mode = false;
        Ok(())
    }
}
