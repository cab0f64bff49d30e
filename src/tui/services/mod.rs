//! # Services Layer
//!
//! Everything that leaves the process: the HTTP client for the post store
//! and the dispatcher that runs store calls in the background.

pub mod flows;
pub mod post_store;

// Re-export service types
pub use flows::{FlowDispatcher, FlowOutcome, FlowRequest};
pub use post_store::{HttpPostStore, StoreError};
