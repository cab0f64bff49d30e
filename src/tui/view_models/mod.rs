//! # View Models
//!
//! Screen state and the rules for changing it.

pub mod core;
pub mod detail_panel;
pub mod list_region;
pub mod new_post_form;


pub use self::core::{
    TerminalSize, ViewModel, POST_CREATED_NOTICE, POST_DELETED_NOTICE, POST_UPDATED_NOTICE,
};
pub use detail_panel::{
    DetailContent, DetailPanel, EditForm, PanelState, DETAIL_LOAD_FAILED, INITIAL_DETAIL_FAILED,
    NO_POSTS_MESSAGE, POST_DELETED_MESSAGE,
};
pub use list_region::{ListContent, ListEntry, ListRegion, LIST_LOAD_FAILED};
pub use new_post_form::NewPostForm;
