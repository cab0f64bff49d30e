//! # Terminal UI
//!
//! MVVM implementation of the blog client. Models hold post data, services
//! talk to the post store, the view model owns every region shown on screen,
//! views render it and the controller runs the event loop.

pub mod commands;
pub mod controllers;
pub mod events;
pub mod io;
pub mod models;
pub mod services;
pub mod view_models;
pub mod views;

// Re-export core types
pub use controllers::AppController;
pub use models::{NewPost, Post, PostId, PostPatch};
pub use services::{FlowDispatcher, FlowOutcome, HttpPostStore, StoreError};
pub use view_models::ViewModel;
