//! Interaction layer: UI events, the debounce timer and the controller that
//! turns events into state changes, loads and renders.

pub mod controller;
pub mod debounce;

pub use controller::Controller;
pub use debounce::Debouncer;

use crate::state::{GenreFilter, SortOrder};

/// What: Discrete user interactions delivered to the controller in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Search box content changed (debounced).
    SearchInput(String),
    /// Genre selector changed.
    GenreChanged(GenreFilter),
    /// Sort selector changed.
    SortChanged(SortOrder),
    /// Clear button pressed.
    Clear,
    /// Pagination control clicked.
    PageClicked(u32),
    /// Play-trailer button clicked for a movie id.
    TrailerRequested(u64),
    /// Click inside the open trailer overlay.
    ModalClick(ClickTarget),
    /// Key pressed while the page has focus.
    Key(KeyInput),
}

/// Keys the overlay distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Tab without Shift.
    Tab,
    /// Shift+Tab.
    ShiftTab,
    /// Escape.
    Escape,
    /// Anything else.
    Other,
}

/// Where a click inside the overlay landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The backdrop itself, outside the dialog content.
    Backdrop,
    /// Inside the dialog content.
    Content,
    /// The close button.
    CloseButton,
}

/// Whether a key press was consumed by the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// Default key handling suppressed.
    Intercepted,
    /// Default key handling proceeds.
    PassThrough,
}
