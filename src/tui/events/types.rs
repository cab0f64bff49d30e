//! # Core Event Types
//!
//! Small enums shared by commands, the view model and the renderer.

/// Which area receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Focus {
    /// Post list navigation and detail actions
    #[default]
    PostList,
    /// The new-post form at the bottom of the screen
    NewPostForm,
    /// The edit form shown in place of the detail region
    EditForm,
}

impl Focus {
    /// True when key input goes to a text form
    pub fn is_form(self) -> bool {
        matches!(self, Focus::NewPostForm | Focus::EditForm)
    }
}

/// Inputs of the new-post form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NewPostField {
    Title,
    Author,
    Image,
    Content,
}

impl NewPostField {
    pub const ALL: [NewPostField; 4] = [
        NewPostField::Title,
        NewPostField::Author,
        NewPostField::Image,
        NewPostField::Content,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NewPostField::Title => "Title",
            NewPostField::Author => "Author",
            NewPostField::Image => "Image",
            NewPostField::Content => "Content",
        }
    }

    fn index(self) -> usize {
        match self {
            NewPostField::Title => 0,
            NewPostField::Author => 1,
            NewPostField::Image => 2,
            NewPostField::Content => 3,
        }
    }

    /// Next field in tab order, wrapping around
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous field in tab order, wrapping around
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Inputs of the edit form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditField {
    Title,
    Content,
}

impl EditField {
    pub fn label(self) -> &'static str {
        match self {
            EditField::Title => "Title",
            EditField::Content => "Content",
        }
    }

    /// The other field; the edit form only has two
    pub fn toggle(self) -> Self {
        match self {
            EditField::Title => EditField::Content,
            EditField::Content => EditField::Title,
        }
    }
}
