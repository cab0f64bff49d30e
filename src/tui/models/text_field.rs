//! # Text Field Model
//!
//! Editable text backing a single form input. Input is append-only at the
//! end of the text, which is all the post forms need.

/// Text content of one form input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    text: String,
    multiline: bool,
}

impl TextField {
    /// Create an empty single-line field
    pub fn single_line() -> Self {
        Self {
            text: String::new(),
            multiline: false,
        }
    }

    /// Create an empty field that accepts newlines
    pub fn multiline() -> Self {
        Self {
            text: String::new(),
            multiline: true,
        }
    }

    /// Replace the content, dropping newlines for single-line fields
    pub fn set_text(&mut self, text: &str) {
        self.text = if self.multiline {
            text.to_string()
        } else {
            text.replace(['\n', '\r'], " ")
        };
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_multiline(&self) -> bool {
        self.multiline
    }

    /// Append a character; returns false when a newline hits a single-line field
    pub fn insert_char(&mut self, ch: char) -> bool {
        if ch == '\n' && !self.multiline {
            return false;
        }
        self.text.push(ch);
        true
    }

    /// Remove the last character, if any
    pub fn backspace(&mut self) -> bool {
        self.text.pop().is_some()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// True when the field holds nothing but whitespace
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
