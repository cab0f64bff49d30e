//! # View Events
//!
//! Emitted by the view model when a screen area needs repainting.

/// Events emitted when view updates are needed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewEvent {
    /// Full screen redraw required (terminal resize, start-up)
    FullRedrawRequired,

    /// Post list entries, selection or error message changed
    ListRegionChanged,

    /// Detail region or edit form changed
    DetailRegionChanged,

    /// New-post form content or focus changed
    NewPostFormChanged,

    /// Status line message or focus indicator changed
    StatusLineChanged,
}
