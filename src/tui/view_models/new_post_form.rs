//! # New Post Form
//!
//! Four inputs at the bottom of the screen. The form is cleared only after
//! the store confirms a create.

use crate::tui::events::NewPostField;
use crate::tui::models::{NewPost, TextField};

#[derive(Debug, Clone)]
pub struct NewPostForm {
    title: TextField,
    author: TextField,
    image: TextField,
    content: TextField,
    active_field: NewPostField,
}

impl NewPostForm {
    pub fn new() -> Self {
        Self {
            title: TextField::single_line(),
            author: TextField::single_line(),
            image: TextField::single_line(),
            content: TextField::multiline(),
            active_field: NewPostField::Title,
        }
    }

    pub fn field(&self, field: NewPostField) -> &TextField {
        match field {
            NewPostField::Title => &self.title,
            NewPostField::Author => &self.author,
            NewPostField::Image => &self.image,
            NewPostField::Content => &self.content,
        }
    }

    pub fn field_mut(&mut self, field: NewPostField) -> &mut TextField {
        match field {
            NewPostField::Title => &mut self.title,
            NewPostField::Author => &mut self.author,
            NewPostField::Image => &mut self.image,
            NewPostField::Content => &mut self.content,
        }
    }

    pub fn active_field(&self) -> NewPostField {
        self.active_field
    }

    pub fn active_field_mut(&mut self) -> &mut TextField {
        self.field_mut(self.active_field)
    }

    pub fn next_field(&mut self) {
        self.active_field = self.active_field.next();
    }

    pub fn previous_field(&mut self) {
        self.active_field = self.active_field.previous();
    }

    /// Clear every input and go back to the title
    pub fn reset(&mut self) {
        for field in NewPostField::ALL {
            self.field_mut(field).clear();
        }
        self.active_field = NewPostField::Title;
    }

    /// Create body dated today, or `None` when the title is blank
    pub fn to_new_post(&self) -> Option<NewPost> {
        if self.title.is_blank() {
            return None;
        }
        Some(NewPost::dated_today(
            self.title.text().to_string(),
            self.author.text().to_string(),
            self.image.text().to_string(),
            self.content.text().to_string(),
        ))
    }
}

impl Default for NewPostForm {
    fn default() -> Self {
        Self::new()
    }
}
