//! # Terminal Renderer
//!
//! Paints the four screen regions (post list, detail or edit form, new-post
//! form, status line) through a [`RenderStream`]. Every row is padded to the
//! region width, so a region repaint never needs a screen clear.

use crate::tui::events::{EditField, Focus, NewPostField, ViewEvent};
use crate::tui::io::{RenderStream, TerminalSize};
use crate::tui::view_models::{DetailContent, EditForm, ListContent, PanelState, ViewModel};
use anyhow::Result;
use crossterm::style::Color;
use std::io::Write;

use super::layout::Layout;
use super::text::{fit_to_width, wrap_text};

/// Drawn after the text of the input receiving keys
const CARET: char = '█';
const ACTIVE_MARKER: &str = "› ";
const INACTIVE_MARKER: &str = "  ";
const SELECTED_MARKER: &str = "▸ ";
/// Marker plus the widest input label, "Content: "
const LABEL_WIDTH: usize = 11;

const LIST_HINTS: &str = "j/k move  Enter open  e edit  d delete  n new post  q quit";
const NEW_POST_HINTS: &str = "Tab next  Enter newline/next  Ctrl+S submit  Esc back";
const EDIT_HINTS: &str = "Tab switch  Ctrl+S save  Esc cancel";

/// One row of a region
#[derive(Debug, Clone, PartialEq)]
struct Line {
    text: String,
    color: Option<Color>,
}

impl Line {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }

    fn colored(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
        }
    }

    fn blank() -> Self {
        Self::plain("")
    }
}

fn marker(active: bool) -> &'static str {
    if active {
        ACTIVE_MARKER
    } else {
        INACTIVE_MARKER
    }
}

fn with_caret(text: &str, show: bool) -> String {
    if show {
        format!("{text}{CARET}")
    } else {
        text.to_string()
    }
}

/// Terminal-based view renderer
pub struct TerminalRenderer<RS: RenderStream> {
    render_stream: RS,
    terminal_size: TerminalSize,
}

impl<RS: RenderStream> TerminalRenderer<RS> {
    /// Create a renderer that owns `render_stream`
    pub fn with_render_stream(render_stream: RS) -> Result<Self> {
        let terminal_size = render_stream.get_size()?;
        Ok(Self {
            render_stream,
            terminal_size,
        })
    }

    pub fn render_stream(&self) -> &RS {
        &self.render_stream
    }

    pub fn terminal_size(&self) -> TerminalSize {
        self.terminal_size
    }

    pub fn update_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
    }

    fn layout(&self) -> Layout {
        Layout::for_size(self.terminal_size)
    }

    /// Raw mode, alternate screen, hidden cursor
    pub fn initialize(&mut self) -> Result<()> {
        self.render_stream.enable_raw_mode()?;
        self.render_stream.enter_alternate_screen()?;
        self.render_stream.hide_cursor()?;
        self.render_stream.clear_screen()?;
        self.render_stream.flush()?;
        Ok(())
    }

    /// Restore the terminal
    pub fn cleanup(&mut self) -> Result<()> {
        self.render_stream.reset_color()?;
        self.render_stream.show_cursor()?;
        self.render_stream.leave_alternate_screen()?;
        self.render_stream.disable_raw_mode()?;
        self.render_stream.flush()?;
        Ok(())
    }

    pub fn render_full(&mut self, view_model: &ViewModel) -> Result<()> {
        self.render_stream.clear_screen()?;
        self.render_list(view_model)?;
        self.render_detail(view_model)?;
        self.render_new_post_form(view_model)?;
        self.render_status_line(view_model)?;
        self.render_stream.flush()?;
        Ok(())
    }

    /// Repaint the regions named by `events`
    pub fn handle_view_events(&mut self, events: &[ViewEvent], view_model: &ViewModel) -> Result<()> {
        if events.is_empty() {
            return Ok(());
        }
        if events.contains(&ViewEvent::FullRedrawRequired) {
            return self.render_full(view_model);
        }

        for event in events {
            match event {
                ViewEvent::ListRegionChanged => self.render_list(view_model)?,
                ViewEvent::DetailRegionChanged => self.render_detail(view_model)?,
                ViewEvent::NewPostFormChanged => self.render_new_post_form(view_model)?,
                ViewEvent::StatusLineChanged => self.render_status_line(view_model)?,
                ViewEvent::FullRedrawRequired => {}
            }
        }
        self.render_stream.flush()?;
        Ok(())
    }

    // === Regions ===

    pub fn render_list(&mut self, view_model: &ViewModel) -> Result<()> {
        let layout = self.layout();
        let width = layout.list_width as usize;
        let height = layout.body_height as usize;
        let list = view_model.list();
        let focused = view_model.focus() == Focus::PostList;

        let mut lines = vec![Line::colored("Posts", Color::Cyan)];
        match list.content() {
            ListContent::Loading => lines.push(Line::colored("Loading...", Color::DarkGrey)),
            ListContent::Failed(message) => lines.extend(
                wrap_text(message, width)
                    .into_iter()
                    .map(|row| Line::colored(row, Color::Red)),
            ),
            ListContent::Entries(entries) => {
                let visible = height.saturating_sub(1);
                let selected = list.selected_index().unwrap_or(0);
                let first = (selected + 1).saturating_sub(visible);

                for (index, entry) in entries.iter().enumerate().skip(first).take(visible) {
                    if index == selected {
                        let text = format!("{SELECTED_MARKER}{}", entry.title);
                        lines.push(if focused {
                            Line::colored(text, Color::Yellow)
                        } else {
                            Line::plain(text)
                        });
                    } else {
                        lines.push(Line::plain(format!("{INACTIVE_MARKER}{}", entry.title)));
                    }
                }
            }
        }

        self.paint(0, 0, layout.list_width, layout.body_height, &lines)?;

        // Separator between the list and the detail region
        if layout.detail_x > layout.list_width {
            self.render_stream.set_foreground_color(Color::DarkGrey)?;
            for row in 0..layout.body_height {
                self.render_stream.move_cursor(layout.list_width, row)?;
                self.render_stream.write_all("│".as_bytes())?;
            }
            self.render_stream.reset_color()?;
        }
        Ok(())
    }

    pub fn render_detail(&mut self, view_model: &ViewModel) -> Result<()> {
        let layout = self.layout();
        let width = layout.detail_width as usize;
        let height = layout.body_height as usize;
        let detail = view_model.detail();

        let lines = match detail.state() {
            PanelState::Editing(form) => {
                Self::edit_form_lines(form, view_model.focus() == Focus::EditForm, width, height)
            }
            PanelState::Viewing => match detail.content() {
                DetailContent::Loading => vec![Line::colored("Loading...", Color::DarkGrey)],
                DetailContent::Notice(message) => {
                    wrap_text(message, width).into_iter().map(Line::plain).collect()
                }
                DetailContent::Failed(message) => wrap_text(message, width)
                    .into_iter()
                    .map(|row| Line::colored(row, Color::Red))
                    .collect(),
                DetailContent::Post(post) => {
                    let mut lines = vec![Line::colored(post.title.clone(), Color::Cyan)];
                    let byline = match (post.author.is_empty(), post.date.is_empty()) {
                        (false, false) => format!("by {} on {}", post.author, post.date),
                        (false, true) => format!("by {}", post.author),
                        (true, false) => format!("on {}", post.date),
                        (true, true) => String::new(),
                    };
                    if !byline.is_empty() {
                        lines.push(Line::colored(byline, Color::DarkGrey));
                    }
                    if !post.image.is_empty() {
                        lines.push(Line::colored(
                            format!("Image: {}", post.image),
                            Color::DarkGrey,
                        ));
                    }
                    lines.push(Line::blank());

                    // Last row is kept for the actions
                    let room = height.saturating_sub(lines.len() + 1);
                    lines.extend(
                        wrap_text(&post.content, width)
                            .into_iter()
                            .take(room)
                            .map(Line::plain),
                    );
                    Self::pin_footer(&mut lines, height, Line::colored("[e] Edit  [d] Delete", Color::Green));
                    lines
                }
            },
        };

        self.paint(layout.detail_x, 0, layout.detail_width, layout.body_height, &lines)
    }

    fn edit_form_lines(form: &EditForm, focused: bool, width: usize, height: usize) -> Vec<Line> {
        let active = form.active_field();
        let title_active = focused && active == EditField::Title;
        let content_active = focused && active == EditField::Content;

        let mut lines = vec![
            Line::colored(format!("Editing post {}", form.post_id()), Color::Yellow),
            Line::plain(format!(
                "{}{:<width$}{}",
                marker(title_active),
                format!("{}:", EditField::Title.label()),
                with_caret(form.field(EditField::Title).text(), title_active),
                width = LABEL_WIDTH - ACTIVE_MARKER.chars().count()
            )),
            Line::plain(format!(
                "{}{}:",
                marker(content_active),
                EditField::Content.label()
            )),
        ];

        let content = with_caret(form.field(EditField::Content).text(), content_active);
        let room = height.saturating_sub(lines.len() + 1);
        let wrapped = wrap_text(&content, width.saturating_sub(INACTIVE_MARKER.len()));
        // Keep the end of the content, where typing happens, on screen
        let skip = wrapped.len().saturating_sub(room);
        lines.extend(
            wrapped
                .into_iter()
                .skip(skip)
                .map(|row| Line::plain(format!("{INACTIVE_MARKER}{row}"))),
        );

        Self::pin_footer(&mut lines, height, Line::colored(EDIT_HINTS, Color::Green));
        lines
    }

    /// Put `footer` on the last row of a region `height` rows tall
    fn pin_footer(lines: &mut Vec<Line>, height: usize, footer: Line) {
        if height < 2 {
            return;
        }
        lines.truncate(height - 1);
        lines.resize(height - 1, Line::blank());
        lines.push(footer);
    }

    pub fn render_new_post_form(&mut self, view_model: &ViewModel) -> Result<()> {
        let layout = self.layout();
        let width = layout.width as usize;
        let form = view_model.new_post_form();
        let focused = view_model.focus() == Focus::NewPostForm;
        let active = form.active_field();

        let heading = if focused {
            " New post ".to_string()
        } else {
            " New post (press n) ".to_string()
        };
        let mut lines = vec![Line::colored(
            format!("──{heading}{}", "─".repeat(width)),
            if focused { Color::Yellow } else { Color::DarkGrey },
        )];

        for field in [NewPostField::Title, NewPostField::Author, NewPostField::Image] {
            let is_active = focused && active == field;
            lines.push(Line::plain(format!(
                "{}{:<width$}{}",
                marker(is_active),
                format!("{}:", field.label()),
                with_caret(form.field(field).text(), is_active),
                width = LABEL_WIDTH - ACTIVE_MARKER.chars().count()
            )));
        }

        let content_active = focused && active == NewPostField::Content;
        let content = with_caret(form.field(NewPostField::Content).text(), content_active);
        let room = (layout.form_height as usize).saturating_sub(lines.len()).max(1);
        let wrapped = wrap_text(&content, width.saturating_sub(LABEL_WIDTH));
        let skip = wrapped.len().saturating_sub(room);
        for (index, row) in wrapped.into_iter().skip(skip).enumerate() {
            let label = if index == 0 {
                format!(
                    "{}{:<width$}",
                    marker(content_active),
                    format!("{}:", NewPostField::Content.label()),
                    width = LABEL_WIDTH - ACTIVE_MARKER.chars().count()
                )
            } else {
                " ".repeat(LABEL_WIDTH)
            };
            lines.push(Line::plain(format!("{label}{row}")));
        }

        self.paint(0, layout.form_top, layout.width, layout.form_height, &lines)
    }

    pub fn render_status_line(&mut self, view_model: &ViewModel) -> Result<()> {
        let layout = self.layout();
        if self.terminal_size.1 == 0 {
            return Ok(());
        }

        let hints = match view_model.focus() {
            Focus::PostList => LIST_HINTS,
            Focus::NewPostForm => NEW_POST_HINTS,
            Focus::EditForm => EDIT_HINTS,
        };
        let line = match view_model.status_message() {
            Some(message) => Line::colored(format!(" {message}  │ {hints}"), Color::Green),
            None => Line::colored(format!(" {hints}"), Color::DarkGrey),
        };

        self.paint(0, layout.status_row, layout.width, 1, &[line])
    }

    /// Write `lines` into the box at (`x`, `top`), blanking the rows below them
    fn paint(&mut self, x: u16, top: u16, width: u16, height: u16, lines: &[Line]) -> Result<()> {
        if width == 0 {
            return Ok(());
        }
        let blank = Line::blank();
        for row in 0..height {
            let line = lines.get(row as usize).unwrap_or(&blank);
            self.render_stream.move_cursor(x, top + row)?;
            if let Some(color) = line.color {
                self.render_stream.set_foreground_color(color)?;
            }
            self.render_stream
                .write_all(fit_to_width(&line.text, width as usize).as_bytes())?;
            if line.color.is_some() {
                self.render_stream.reset_color()?;
            }
        }
        Ok(())
    }
}
