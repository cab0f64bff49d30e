//! # Controllers Module
//!
//! Owns the event loop that connects key input, the view model, flow
//! dispatch and rendering.

pub mod app_controller;

pub use app_controller::AppController;
