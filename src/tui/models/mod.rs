//! # Models
//!
//! Plain data: posts as the store sends them and form input buffers.

pub mod post;
pub mod text_field;

pub use post::{today, NewPost, Post, PostId, PostPatch};
pub use text_field::TextField;
