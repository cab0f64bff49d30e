//! # List Region
//!
//! The post list on the left of the screen. It is rebuilt wholesale from
//! every list response; creates append, edits relabel and deletes remove
//! single entries.

use crate::tui::models::{Post, PostId};

/// Shown in red when the collection cannot be fetched
pub const LIST_LOAD_FAILED: &str =
    "Failed to load posts. Please ensure the server is running and accessible.";

/// One selectable row of the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub id: PostId,
    pub title: String,
}

impl From<&Post> for ListEntry {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.clone(),
            title: post.title.clone(),
        }
    }
}

/// What the list region currently holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListContent {
    /// Nothing received yet
    Loading,
    /// Entries in store order
    Entries(Vec<ListEntry>),
    /// Error message in place of the entries
    Failed(&'static str),
}

/// List region state, including the highlighted row
#[derive(Debug, Clone)]
pub struct ListRegion {
    content: ListContent,
    selected: usize,
}

impl ListRegion {
    pub fn new() -> Self {
        Self {
            content: ListContent::Loading,
            selected: 0,
        }
    }

    pub fn content(&self) -> &ListContent {
        &self.content
    }

    /// Entries, or an empty slice when the region holds no entries list
    pub fn entries(&self) -> &[ListEntry] {
        match &self.content {
            ListContent::Entries(entries) => entries,
            _ => &[],
        }
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self.content {
            ListContent::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Replace everything with one entry per post
    pub fn replace(&mut self, posts: &[Post]) {
        self.content = ListContent::Entries(posts.iter().map(ListEntry::from).collect());
        self.selected = 0;
    }

    /// Replace everything with the load failure message
    pub fn fail(&mut self) {
        self.content = ListContent::Failed(LIST_LOAD_FAILED);
        self.selected = 0;
    }

    /// Append a created post; false when there is no entries list to append to
    pub fn append(&mut self, post: &Post) -> bool {
        match &mut self.content {
            ListContent::Entries(entries) => {
                entries.push(ListEntry::from(post));
                true
            }
            _ => false,
        }
    }

    /// Set the title of every entry with `id`; returns how many changed
    pub fn relabel(&mut self, id: &PostId, title: &str) -> usize {
        let ListContent::Entries(entries) = &mut self.content else {
            return 0;
        };
        let mut changed = 0;
        for entry in entries.iter_mut().filter(|entry| &entry.id == id) {
            entry.title = title.to_string();
            changed += 1;
        }
        changed
    }

    /// Drop every entry with `id`; returns how many were removed
    pub fn remove(&mut self, id: &PostId) -> usize {
        let ListContent::Entries(entries) = &mut self.content else {
            return 0;
        };
        let before = entries.len();
        entries.retain(|entry| &entry.id != id);
        let removed = before - entries.len();
        if self.selected >= entries.len() {
            self.selected = entries.len().saturating_sub(1);
        }
        removed
    }

    /// Index of the highlighted row, if any rows exist
    pub fn selected_index(&self) -> Option<usize> {
        (!self.entries().is_empty()).then_some(self.selected)
    }

    pub fn selected_entry(&self) -> Option<&ListEntry> {
        self.entries().get(self.selected)
    }

    /// Move the highlight by `delta` rows, clamped to the list
    pub fn move_selection(&mut self, delta: isize) -> bool {
        let len = self.entries().len();
        if len == 0 {
            return false;
        }
        let target = self
            .selected
            .saturating_add_signed(delta)
            .min(len - 1);
        let moved = target != self.selected;
        self.selected = target;
        moved
    }
}

impl Default for ListRegion {
    fn default() -> Self {
        Self::new()
    }
}
