//! Screen geometry.
//!
//! ```text
//! ┌ list ──────┬ detail / edit form ─────────────┐  rows 0..body_height
//! │            │                                 │
//! ├────────────┴─────────────────────────────────┤  form_top
//! │ new-post form                                │
//! ├──────────────────────────────────────────────┤
//! │ status line                                  │  status_row
//! └──────────────────────────────────────────────┘
//! ```

use crate::tui::io::TerminalSize;

/// Rows given to the new-post form: a header, three single-line inputs and
/// two rows of content
pub const NEW_POST_FORM_HEIGHT: u16 = 6;

const MIN_LIST_WIDTH: u16 = 16;
const MAX_LIST_WIDTH: u16 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub width: u16,
    pub list_width: u16,
    pub detail_x: u16,
    pub detail_width: u16,
    pub body_height: u16,
    pub form_top: u16,
    pub form_height: u16,
    pub status_row: u16,
}

impl Layout {
    pub fn for_size((width, height): TerminalSize) -> Self {
        let status_row = height.saturating_sub(1);
        let form_height = NEW_POST_FORM_HEIGHT.min(status_row);
        let form_top = status_row - form_height;

        let list_width = (width / 3)
            .clamp(MIN_LIST_WIDTH, MAX_LIST_WIDTH)
            .min(width.saturating_sub(1));
        // One column for the separator
        let detail_x = list_width.saturating_add(1).min(width);

        Self {
            width,
            list_width,
            detail_x,
            detail_width: width - detail_x,
            body_height: form_top,
            form_top,
            form_height,
            status_row,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_should_split_standard_terminal() {
        let layout = Layout::for_size((90, 24));
        assert_eq!(layout.list_width, 30);
        assert_eq!(layout.detail_x, 31);
        assert_eq!(layout.detail_width, 59);
        assert_eq!(layout.status_row, 23);
        assert_eq!(layout.form_top, 17);
        assert_eq!(layout.body_height, 17);
    }

    #[test]
    fn layout_should_clamp_list_width() {
        assert_eq!(Layout::for_size((300, 40)).list_width, MAX_LIST_WIDTH);
        assert_eq!(Layout::for_size((30, 40)).list_width, MIN_LIST_WIDTH);
    }

    #[test]
    fn layout_should_survive_tiny_terminals() {
        let layout = Layout::for_size((4, 3));
        assert_eq!(layout.status_row, 2);
        assert_eq!(layout.form_height, 2);
        assert_eq!(layout.body_height, 0);
        assert_eq!(layout.list_width, 3);
        assert_eq!(layout.detail_width, 0);

        let empty = Layout::for_size((0, 0));
        assert_eq!(empty.status_row, 0);
        assert_eq!(empty.detail_width, 0);
    }
}
