//! # ViewModel Core
//!
//! Owns every screen region and turns user intents and flow outcomes into
//! region updates. Store calls are never made here: intents return a
//! [`FlowRequest`] for the controller to dispatch, and outcomes come back
//! through [`ViewModel::apply_outcome`].
//!
//! Store failures stop at this boundary. Read flows replace their region
//! with a red message; write flows only log.

use crate::tui::events::{Focus, ViewEvent};
use crate::tui::models::{Post, PostId};
use crate::tui::services::{FlowOutcome, FlowRequest, StoreError};

use super::detail_panel::{
    DetailPanel, DETAIL_LOAD_FAILED, INITIAL_DETAIL_FAILED, NO_POSTS_MESSAGE,
};
use super::list_region::ListRegion;
use super::new_post_form::NewPostForm;

/// Confirmation after a create
pub const POST_CREATED_NOTICE: &str = "New post added and persisted!";
/// Confirmation after an edit save
pub const POST_UPDATED_NOTICE: &str = "Post updated and persisted!";
/// Confirmation after a delete
pub const POST_DELETED_NOTICE: &str = "Post deleted and persisted!";

/// Type alias for terminal size (width, height)
pub type TerminalSize = (u16, u16);

pub struct ViewModel {
    list: ListRegion,
    detail: DetailPanel,
    new_post_form: NewPostForm,
    focus: Focus,
    status_message: Option<String>,
    terminal_size: TerminalSize,
    pending_view_events: Vec<ViewEvent>,
}

impl ViewModel {
    pub fn new() -> Self {
        Self {
            list: ListRegion::new(),
            detail: DetailPanel::new(),
            new_post_form: NewPostForm::new(),
            focus: Focus::PostList,
            status_message: None,
            terminal_size: (80, 24),
            pending_view_events: Vec::new(),
        }
    }

    // === Accessors ===

    pub fn list(&self) -> &ListRegion {
        &self.list
    }

    pub fn detail(&self) -> &DetailPanel {
        &self.detail
    }

    pub fn new_post_form(&self) -> &NewPostForm {
        &self.new_post_form
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Post shown in the detail region
    pub fn current_detail_id(&self) -> Option<&PostId> {
        self.detail.current_post_id()
    }

    /// Post in the edit form
    pub fn editing_id(&self) -> Option<&PostId> {
        self.detail.editing_id()
    }

    pub fn terminal_size(&self) -> TerminalSize {
        self.terminal_size
    }

    pub fn update_terminal_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
        self.emit(ViewEvent::FullRedrawRequired);
    }

    // === View events ===

    fn emit(&mut self, event: ViewEvent) {
        if !self.pending_view_events.contains(&event) {
            self.pending_view_events.push(event);
        }
    }

    /// Take the view events raised since the last call
    pub fn collect_pending_view_events(&mut self) -> Vec<ViewEvent> {
        std::mem::take(&mut self.pending_view_events)
    }

    fn set_status_message(&mut self, message: &str) {
        self.status_message = Some(message.to_string());
        self.emit(ViewEvent::StatusLineChanged);
    }

    fn set_focus(&mut self, focus: Focus) {
        if self.focus != focus {
            self.focus = focus;
            self.emit(ViewEvent::StatusLineChanged);
            self.emit(ViewEvent::ListRegionChanged);
            self.emit(ViewEvent::NewPostFormChanged);
        }
    }

    // === Start-up ===

    /// Flows to run when the app starts
    pub fn start(&mut self) -> Vec<FlowRequest> {
        self.emit(ViewEvent::FullRedrawRequired);
        vec![FlowRequest::ListPosts, FlowRequest::ShowFirstPost]
    }

    // === Post list ===

    pub fn move_selection(&mut self, delta: isize) {
        if self.list.move_selection(delta) {
            self.emit(ViewEvent::ListRegionChanged);
        }
    }

    /// Fetch the highlighted post into the detail region
    pub fn open_selected(&mut self) -> Option<FlowRequest> {
        let entry = self.list.selected_entry()?;
        Some(FlowRequest::ShowPost(entry.id.clone()))
    }

    pub fn focus_new_post_form(&mut self) {
        self.set_focus(Focus::NewPostForm);
    }

    /// Back to the list; form contents are kept
    pub fn leave_new_post_form(&mut self) {
        if self.focus == Focus::NewPostForm {
            self.set_focus(Focus::PostList);
        }
    }

    // === Text input ===

    pub fn insert_char(&mut self, ch: char) {
        match self.focus {
            Focus::NewPostForm => {
                if self.new_post_form.active_field_mut().insert_char(ch) {
                    self.emit(ViewEvent::NewPostFormChanged);
                }
            }
            Focus::EditForm => {
                if let Some(form) = self.detail.edit_form_mut() {
                    if form.active_field_mut().insert_char(ch) {
                        self.emit(ViewEvent::DetailRegionChanged);
                    }
                }
            }
            Focus::PostList => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            Focus::NewPostForm => {
                if self.new_post_form.active_field_mut().backspace() {
                    self.emit(ViewEvent::NewPostFormChanged);
                }
            }
            Focus::EditForm => {
                if let Some(form) = self.detail.edit_form_mut() {
                    if form.active_field_mut().backspace() {
                        self.emit(ViewEvent::DetailRegionChanged);
                    }
                }
            }
            Focus::PostList => {}
        }
    }

    /// Move to the next (or previous) input of the focused form
    pub fn cycle_field(&mut self, forward: bool) {
        match self.focus {
            Focus::NewPostForm => {
                if forward {
                    self.new_post_form.next_field();
                } else {
                    self.new_post_form.previous_field();
                }
                self.emit(ViewEvent::NewPostFormChanged);
            }
            Focus::EditForm => {
                if let Some(form) = self.detail.edit_form_mut() {
                    form.toggle_field();
                    self.emit(ViewEvent::DetailRegionChanged);
                }
            }
            Focus::PostList => {}
        }
    }

    /// Enter inside a form: newline in multi-line inputs, next input otherwise
    pub fn newline_or_advance(&mut self) {
        let multiline = match self.focus {
            Focus::NewPostForm => self.new_post_form.active_field_mut().is_multiline(),
            Focus::EditForm => self
                .detail
                .edit_form_mut()
                .is_some_and(|form| form.active_field_mut().is_multiline()),
            Focus::PostList => return,
        };
        if multiline {
            self.insert_char('\n');
        } else {
            self.cycle_field(true);
        }
    }

    // === Write flows ===

    /// Create request for the new-post form
    pub fn submit_new_post(&mut self) -> Option<FlowRequest> {
        match self.new_post_form.to_new_post() {
            Some(new_post) => Some(FlowRequest::CreatePost(new_post)),
            None => {
                tracing::error!("Missing title for new post; nothing sent.");
                None
            }
        }
    }

    /// Swap the detail region for the edit form
    pub fn begin_edit(&mut self) {
        if self.detail.begin_edit() {
            tracing::debug!("Editing post {:?}", self.detail.editing_id());
            self.set_focus(Focus::EditForm);
            self.emit(ViewEvent::DetailRegionChanged);
        } else {
            tracing::warn!("No post shown; edit ignored.");
        }
    }

    /// Update request for the edit form
    pub fn save_edit(&mut self) -> Option<FlowRequest> {
        let Some(form) = self.detail.edit_form() else {
            tracing::warn!("Save requested while not editing.");
            return None;
        };
        match form.to_patch() {
            Some((id, patch)) => Some(FlowRequest::UpdatePost { id, patch }),
            None => {
                tracing::error!("Missing post ID or new title/content for edit.");
                None
            }
        }
    }

    /// Discard the edit form and view the detail region again
    pub fn cancel_edit(&mut self) {
        if self.detail.cancel_edit() {
            self.emit(ViewEvent::DetailRegionChanged);
        }
        self.set_focus(Focus::PostList);
    }

    /// Delete request for the shown post
    pub fn delete_current(&mut self) -> Option<FlowRequest> {
        match self.detail.current_post_id() {
            Some(id) => Some(FlowRequest::DeletePost(id.clone())),
            None => {
                tracing::warn!("No post shown; delete ignored.");
                None
            }
        }
    }

    // === Flow outcomes ===

    /// Apply a finished flow. Returns follow-up flows to dispatch.
    pub fn apply_outcome(&mut self, outcome: FlowOutcome) -> Vec<FlowRequest> {
        match outcome {
            FlowOutcome::PostsListed(result) => self.apply_posts_listed(result),
            FlowOutcome::FirstPostLoaded(result) => self.apply_first_post(result),
            FlowOutcome::PostLoaded(result) => self.apply_post_loaded(result),
            FlowOutcome::PostCreated(result) => return self.apply_post_created(result),
            FlowOutcome::PostUpdated(result) => self.apply_post_updated(result),
            FlowOutcome::PostDeleted { id, result } => self.apply_post_deleted(&id, result),
        }
        Vec::new()
    }

    fn apply_posts_listed(&mut self, result: Result<Vec<Post>, StoreError>) {
        match result {
            Ok(posts) => {
                tracing::debug!("Listing {} posts", posts.len());
                self.list.replace(&posts);
            }
            Err(e) => {
                tracing::error!("Error fetching posts: {e}");
                self.list.fail();
            }
        }
        self.emit(ViewEvent::ListRegionChanged);
    }

    fn apply_first_post(&mut self, result: Result<Vec<Post>, StoreError>) {
        match result {
            Ok(posts) => match posts.into_iter().next() {
                Some(first) => self.detail.show_post(first),
                None => self.detail.show_notice(NO_POSTS_MESSAGE),
            },
            Err(e) => {
                tracing::error!("Error fetching first post details: {e}");
                self.detail.fail(INITIAL_DETAIL_FAILED);
            }
        }
        self.emit(ViewEvent::DetailRegionChanged);
    }

    fn apply_post_loaded(&mut self, result: Result<Post, StoreError>) {
        match result {
            Ok(post) => self.detail.show_post(post),
            Err(e) => {
                tracing::error!("Error fetching post details: {e}");
                self.detail.fail(DETAIL_LOAD_FAILED);
            }
        }
        self.emit(ViewEvent::DetailRegionChanged);
    }

    fn apply_post_created(&mut self, result: Result<Post, StoreError>) -> Vec<FlowRequest> {
        let post = match result {
            Ok(post) => post,
            Err(e) => {
                tracing::error!("Error adding new post: {e}");
                return Vec::new();
            }
        };

        let mut follow_ups = Vec::new();
        if self.list.append(&post) {
            self.emit(ViewEvent::ListRegionChanged);
        } else {
            tracing::warn!("Post list not available, reloading it.");
            follow_ups.push(FlowRequest::ListPosts);
        }

        tracing::info!("Created post {}", post.id);
        self.new_post_form.reset();
        self.emit(ViewEvent::NewPostFormChanged);
        self.set_status_message(POST_CREATED_NOTICE);
        follow_ups
    }

    fn apply_post_updated(&mut self, result: Result<Post, StoreError>) {
        let post = match result {
            Ok(post) => post,
            Err(e) => {
                tracing::error!("Error updating post: {e}");
                return;
            }
        };

        if !self.detail.apply_update(&post) {
            tracing::warn!("Post {} is no longer shown; detail left as is.", post.id);
        }
        if self.list.relabel(&post.id, &post.title) > 0 {
            self.emit(ViewEvent::ListRegionChanged);
        }

        tracing::info!("Updated post {}", post.id);
        self.emit(ViewEvent::DetailRegionChanged);
        if self.focus == Focus::EditForm {
            self.set_focus(Focus::PostList);
        }
        self.set_status_message(POST_UPDATED_NOTICE);
    }

    fn apply_post_deleted(&mut self, id: &PostId, result: Result<(), StoreError>) {
        if let Err(e) = result {
            tracing::error!("Error deleting post: {e}");
            return;
        }

        if self.list.remove(id) > 0 {
            self.emit(ViewEvent::ListRegionChanged);
        }
        if self.detail.clear_if_current(id) {
            self.emit(ViewEvent::DetailRegionChanged);
        }

        tracing::info!("Deleted post {}", id);
        self.set_status_message(POST_DELETED_NOTICE);
    }
}

impl Default for ViewModel {
    fn default() -> Self {
        Self::new()
    }
}
