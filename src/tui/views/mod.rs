//! # View Layer
//!
//! Draws the view model onto a [`RenderStream`](crate::tui::io::RenderStream)
//! and repaints only the regions named by pending view events.

pub mod layout;
pub mod terminal_renderer;
pub mod text;

pub use layout::Layout;
pub use terminal_renderer::TerminalRenderer;
pub use text::{fit_to_width, wrap_text};
