//! Step definitions for the cucumber suite
//!
//! - `store` - what the mock post store holds and how it answers
//! - `app` - starting the app and pressing keys
//! - `screen` - checks on regions, forms and the rendered screen
//! - `requests` - checks on what reached the store

pub mod app;
pub mod requests;
pub mod screen;
pub mod store;
