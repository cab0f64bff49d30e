//! # Events Module
//!
//! Re-exports event types organized by category.

pub mod types;
pub mod view_events;

pub use types::{EditField, Focus, NewPostField};
pub use view_events::ViewEvent;
