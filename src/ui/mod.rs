//! Rendering: escaping, view models to markup, the document model and the
//! trailer overlay.

pub mod document;
pub mod escape;
pub mod modal;
pub mod render;

pub use document::{ControlValues, Document};
pub use escape::escape_html;
pub use modal::{FocusTarget, ModalKey, TrailerModal};
pub use render::{CardView, PageButton, RenderedPage, SelectOption};
