//! # Detail Panel
//!
//! The right-hand side of the screen. It either views the detail region or
//! edits the shown post; the two states are one enum so the panel is never
//! both or neither.
//!
//! ```text
//!            Edit (post shown)
//!   Viewing ───────────────────▶ Editing
//!      ▲                            │
//!      └────── Save ok / Cancel ────┘
//! ```

use crate::tui::events::EditField;
use crate::tui::models::{Post, PostId, PostPatch, TextField};

/// Detail region when the collection is empty
pub const NO_POSTS_MESSAGE: &str = "No posts available.";

/// Detail region after the shown post was deleted
pub const POST_DELETED_MESSAGE: &str = "Post deleted. Nothing selected yet.";

/// Shown in red when the start-up detail fetch fails
pub const INITIAL_DETAIL_FAILED: &str = "Failed to load initial post details.";

/// Shown in red when opening a post fails
pub const DETAIL_LOAD_FAILED: &str = "Failed to load post details.";

/// What the detail region currently holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailContent {
    /// Nothing received yet
    Loading,
    /// A post with its Edit/Delete affordances
    Post(Post),
    /// Plain informational message
    Notice(&'static str),
    /// Error message, rendered in red
    Failed(&'static str),
}

/// Edit form state; exists only while editing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditForm {
    post_id: PostId,
    title: TextField,
    content: TextField,
    active_field: EditField,
}

impl EditForm {
    fn for_post(post: &Post) -> Self {
        let mut title = TextField::single_line();
        title.set_text(&post.title);
        let mut content = TextField::multiline();
        content.set_text(&post.content);
        Self {
            post_id: post.id.clone(),
            title,
            content,
            active_field: EditField::Title,
        }
    }

    /// Id of the post being edited
    pub fn post_id(&self) -> &PostId {
        &self.post_id
    }

    pub fn field(&self, field: EditField) -> &TextField {
        match field {
            EditField::Title => &self.title,
            EditField::Content => &self.content,
        }
    }

    pub fn field_mut(&mut self, field: EditField) -> &mut TextField {
        match field {
            EditField::Title => &mut self.title,
            EditField::Content => &mut self.content,
        }
    }

    pub fn active_field(&self) -> EditField {
        self.active_field
    }

    pub fn active_field_mut(&mut self) -> &mut TextField {
        self.field_mut(self.active_field)
    }

    pub fn toggle_field(&mut self) {
        self.active_field = self.active_field.toggle();
    }

    /// The update body, or `None` when an id, title or content is missing
    pub fn to_patch(&self) -> Option<(PostId, PostPatch)> {
        if self.post_id.is_empty() || self.title.is_blank() || self.content.is_blank() {
            return None;
        }
        Some((
            self.post_id.clone(),
            PostPatch {
                title: self.title.text().to_string(),
                content: self.content.text().to_string(),
            },
        ))
    }
}

/// Viewing or editing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelState {
    Viewing,
    Editing(EditForm),
}

/// Detail region plus its viewing/editing state
#[derive(Debug, Clone)]
pub struct DetailPanel {
    content: DetailContent,
    state: PanelState,
}

impl DetailPanel {
    pub fn new() -> Self {
        Self {
            content: DetailContent::Loading,
            state: PanelState::Viewing,
        }
    }

    pub fn content(&self) -> &DetailContent {
        &self.content
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, PanelState::Editing(_))
    }

    /// Post currently shown in the detail region
    pub fn current_post(&self) -> Option<&Post> {
        match &self.content {
            DetailContent::Post(post) => Some(post),
            _ => None,
        }
    }

    pub fn current_post_id(&self) -> Option<&PostId> {
        self.current_post().map(|post| &post.id)
    }

    /// Id of the post in the edit form
    pub fn editing_id(&self) -> Option<&PostId> {
        self.edit_form().map(EditForm::post_id)
    }

    pub fn edit_form(&self) -> Option<&EditForm> {
        match &self.state {
            PanelState::Editing(form) => Some(form),
            PanelState::Viewing => None,
        }
    }

    pub fn edit_form_mut(&mut self) -> Option<&mut EditForm> {
        match &mut self.state {
            PanelState::Editing(form) => Some(form),
            PanelState::Viewing => None,
        }
    }

    /// Replace the region with a post. The panel state is left alone.
    pub fn show_post(&mut self, post: Post) {
        self.content = DetailContent::Post(post);
    }

    pub fn show_notice(&mut self, message: &'static str) {
        self.content = DetailContent::Notice(message);
    }

    pub fn fail(&mut self, message: &'static str) {
        self.content = DetailContent::Failed(message);
    }

    /// Switch to editing the shown post; false when no post is shown
    pub fn begin_edit(&mut self) -> bool {
        let Some(form) = self.current_post().map(EditForm::for_post) else {
            return false;
        };
        self.state = PanelState::Editing(form);
        true
    }

    /// Drop the edit form; false when not editing
    pub fn cancel_edit(&mut self) -> bool {
        let was_editing = self.is_editing();
        self.state = PanelState::Viewing;
        was_editing
    }

    /// Apply a saved post and return to viewing.
    ///
    /// Title and content are patched only when the region still shows the
    /// saved post.
    pub fn apply_update(&mut self, updated: &Post) -> bool {
        let patched = match &mut self.content {
            DetailContent::Post(shown) if shown.id == updated.id => {
                shown.title = updated.title.clone();
                shown.content = updated.content.clone();
                true
            }
            _ => false,
        };
        self.state = PanelState::Viewing;
        patched
    }

    /// Show the deleted notice if `id` is the shown post
    pub fn clear_if_current(&mut self, id: &PostId) -> bool {
        if self.current_post_id() != Some(id) {
            return false;
        }
        self.content = DetailContent::Notice(POST_DELETED_MESSAGE);
        true
    }
}

impl Default for DetailPanel {
    fn default() -> Self {
        Self::new()
    }
}
