//! # Postline - Terminal Blog Client
//!
//! Lists, shows, creates, edits and deletes posts held by a REST-style
//! JSON post store. Built with the same MVVM layering as a terminal REPL:
//!
//! ```text
//! ┌─────────────┐   ViewEvents   ┌──────────────┐   FlowOutcome   ┌─────────────┐
//! │    View     │◄───────────────│  ViewModel   │◄────────────────│  Services   │
//! │             │                │              │                 │             │
//! │ - Terminal  │                │ - List       │                 │ - PostStore │
//! │ - Rendering │                │ - Detail     │                 │ - Flow      │
//! │             │                │ - Forms      │                 │   dispatch  │
//! └─────────────┘                └──────────────┘                 └─────────────┘
//!                                       ▲                                ▲
//!                                       │ CommandEvents                  │ requests
//!                                       ▼                                │
//!                                ┌──────────────┐                        │
//!                                │  Controller  │────────────────────────┘
//!                                │              │
//!                                │ - Key map    │
//!                                │ - Event loop │
//!                                └──────────────┘
//! ```

pub mod cmd_args;
pub mod config;
pub mod logging;
pub mod tui;

// Re-export main types for easy access
pub use tui::*;
