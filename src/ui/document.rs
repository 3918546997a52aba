//! The document the controller renders into.
//!
//! Stands in for the host page: grid and pagination containers, the result
//! counter, the empty-state indicator, form control values, user-visible
//! notices and the trailer overlay.

use super::modal::TrailerModal;
use super::render::{
    LOADING_MARKUP, PageButton, RenderedPage, SelectOption, render_pagination,
};
use crate::state::{GenreFilter, SortOrder};

/// Values of the search box and the two selectors.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ControlValues {
    /// Search box text.
    pub search: String,
    /// Genre selector value.
    pub genre: GenreFilter,
    /// Sort selector value.
    pub sort: SortOrder,
}

/// Rendered page state.
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Card grid container content.
    pub grid_html: String,
    /// Pagination controls currently shown.
    pub pagination: Vec<PageButton>,
    /// Pagination container content.
    pub pagination_html: String,
    /// Result counter.
    pub total_results: u64,
    /// Whether the empty-state indicator is visible.
    pub empty_visible: bool,
    /// Genre selector options.
    pub genre_options: Vec<SelectOption>,
    /// Form control values.
    pub controls: ControlValues,
    /// Blocking notices shown to the user, oldest first.
    pub notices: Vec<String>,
    /// Open trailer overlay, if any.
    pub modal: Option<TrailerModal>,
    /// Number of scroll-to-top requests issued.
    pub scroll_to_top_requests: u32,
}

impl Document {
    /// Empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the grid with the loading skeleton.
    pub fn show_loading(&mut self) {
        self.grid_html = LOADING_MARKUP.to_string();
    }

    /// Replace the grid with an inline message block.
    pub fn show_grid_message(&mut self, html: String) {
        self.grid_html = html;
    }

    /// What: Apply the output of a render pass.
    ///
    /// Details:
    /// - Updates grid, counter, empty indicator and pagination together.
    pub fn apply(&mut self, rendered: RenderedPage) {
        self.total_results = rendered.total_results;
        self.empty_visible = rendered.empty;
        self.grid_html = rendered.grid_html;
        self.pagination_html = render_pagination(&rendered.pagination);
        self.pagination = rendered.pagination;
    }

    /// Whether the overlay key listener is attached (i.e. a modal is open).
    #[must_use]
    pub const fn key_listener_attached(&self) -> bool {
        self.modal.is_some()
    }
}
