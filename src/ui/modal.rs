//! Trailer overlay: embedded player markup and the focus trap.

use super::escape::escape_html;
use crate::config::Settings;
use crate::events::{ClickTarget, KeyInput};
use crate::state::Video;
use crate::util::percent_encode;

/// Focusable controls inside the trailer overlay, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// The close button in the overlay header.
    CloseButton,
    /// The embedded player frame.
    Player,
}

/// What: Keeps keyboard focus cycling within a fixed set of controls.
///
/// Details:
/// - Focus starts on the first control.
/// - Moving past either end wraps to the other end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusTrap {
    /// Controls in tab order.
    targets: Vec<FocusTarget>,
    /// Index of the focused control in `targets`.
    index: usize,
}

impl FocusTrap {
    /// Trap over `targets`, focusing the first one.
    #[must_use]
    pub const fn new(targets: Vec<FocusTarget>) -> Self {
        Self { targets, index: 0 }
    }

    /// Currently focused control; `None` when the trap has no controls.
    #[must_use]
    pub fn focused(&self) -> Option<FocusTarget> {
        self.targets.get(self.index).copied()
    }

    /// Move focus forward, wrapping from last to first.
    pub fn next(&mut self) {
        if !self.targets.is_empty() {
            self.index = (self.index + 1) % self.targets.len();
        }
    }

    /// Move focus backward, wrapping from first to last.
    pub fn prev(&mut self) {
        if !self.targets.is_empty() {
            self.index = self
                .index
                .checked_sub(1)
                .unwrap_or(self.targets.len() - 1);
        }
    }
}

/// What the overlay did with a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKey {
    /// Focus moved inside the overlay; default handling suppressed.
    Moved,
    /// The overlay asked to be closed.
    Close,
    /// Not a key the overlay cares about.
    Ignored,
}

/// An open trailer overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailerModal {
    /// Movie the trailer belongs to.
    pub movie_id: u64,
    /// Player URL built from the video key.
    pub embed_url: String,
    /// Overlay markup attached to the document.
    pub markup: String,
    trap: FocusTrap,
}

impl TrailerModal {
    /// What: Build the overlay for a resolved trailer video.
    ///
    /// Inputs:
    /// - `movie_id`: Movie the trailer was requested for.
    /// - `video`: Trailer video (its key goes into the embed URL).
    /// - `settings`: Embed URL prefix.
    ///
    /// Output:
    /// - Overlay with markup rendered and focus on the close button.
    #[must_use]
    pub fn open(movie_id: u64, video: &Video, settings: &Settings) -> Self {
        let embed_url = format!("{}{}?rel=0", settings.embed_base, percent_encode(&video.key));
        let markup = format!(
            concat!(
                r#"<div id="modal-backdrop" class="modal-backdrop" role="dialog" aria-modal="true" aria-labelledby="modal-title">"#,
                r#"<div class="modal">"#,
                r#"<header><h3 id="modal-title">Trailer</h3>"#,
                r#"<button id="modal-close" class="btn close" aria-label="Close">✕</button></header>"#,
                r#"<iframe id="modal-iframe" src="{src}" tabindex="0" allow="autoplay; encrypted-media" allowfullscreen></iframe>"#,
                r#"</div></div>"#,
            ),
            src = escape_html(&embed_url),
        );
        Self {
            movie_id,
            embed_url,
            markup,
            trap: FocusTrap::new(vec![FocusTarget::CloseButton, FocusTarget::Player]),
        }
    }

    /// Control that currently has focus.
    #[must_use]
    pub fn focused(&self) -> Option<FocusTarget> {
        self.trap.focused()
    }

    /// What: Apply a key press to the overlay.
    ///
    /// Output:
    /// - `Moved` for Tab / Shift+Tab, `Close` for Escape, `Ignored` otherwise.
    pub fn handle_key(&mut self, key: KeyInput) -> ModalKey {
        match key {
            KeyInput::Tab => {
                self.trap.next();
                ModalKey::Moved
            }
            KeyInput::ShiftTab => {
                self.trap.prev();
                ModalKey::Moved
            }
            KeyInput::Escape => ModalKey::Close,
            KeyInput::Other => ModalKey::Ignored,
        }
    }

    /// Whether a click on `target` closes the overlay.
    #[must_use]
    pub const fn closes_on(target: ClickTarget) -> bool {
        matches!(target, ClickTarget::Backdrop | ClickTarget::CloseButton)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yt(key: &str) -> Video {
        Video {
            site: "YouTube".to_string(),
            key: key.to_string(),
        }
    }

    #[test]
    /// What: Opening builds the embed URL and focuses the first control.
    fn open_builds_embed_and_focuses_first() {
        let modal = TrailerModal::open(603, &yt("vKQi3bBA1y8"), &Settings::default());
        assert_eq!(
            modal.embed_url,
            "https://www.youtube.com/embed/vKQi3bBA1y8?rel=0"
        );
        assert!(modal.markup.contains(r#"src="https://www.youtube.com/embed/vKQi3bBA1y8?rel=0""#));
        assert_eq!(modal.focused(), Some(FocusTarget::CloseButton));
    }

    #[test]
    /// What: Tab and Shift+Tab wrap within the overlay.
    ///
    /// - Input: Tab twice, then Shift+Tab twice from the first control
    /// - Output: Player, CloseButton, Player, CloseButton
    fn tab_cycles_with_wrap() {
        let mut modal = TrailerModal::open(1, &yt("k"), &Settings::default());
        assert_eq!(modal.handle_key(KeyInput::Tab), ModalKey::Moved);
        assert_eq!(modal.focused(), Some(FocusTarget::Player));
        modal.handle_key(KeyInput::Tab);
        assert_eq!(modal.focused(), Some(FocusTarget::CloseButton));
        modal.handle_key(KeyInput::ShiftTab);
        assert_eq!(modal.focused(), Some(FocusTarget::Player));
        modal.handle_key(KeyInput::ShiftTab);
        assert_eq!(modal.focused(), Some(FocusTarget::CloseButton));
    }

    #[test]
    fn escape_requests_close_and_other_keys_are_ignored() {
        let mut modal = TrailerModal::open(1, &yt("k"), &Settings::default());
        assert_eq!(modal.handle_key(KeyInput::Escape), ModalKey::Close);
        assert_eq!(modal.handle_key(KeyInput::Other), ModalKey::Ignored);
    }

    #[test]
    fn backdrop_and_close_button_close_but_content_does_not() {
        assert!(TrailerModal::closes_on(ClickTarget::Backdrop));
        assert!(TrailerModal::closes_on(ClickTarget::CloseButton));
        assert!(!TrailerModal::closes_on(ClickTarget::Content));
    }

    #[test]
    fn empty_trap_has_no_focus() {
        let mut trap = FocusTrap::new(Vec::new());
        trap.next();
        trap.prev();
        assert_eq!(trap.focused(), None);
    }

    #[test]
    fn video_key_is_encoded_in_embed_url() {
        let modal = TrailerModal::open(1, &yt("a\"b<c"), &Settings::default());
        assert_eq!(modal.embed_url, "https://www.youtube.com/embed/a%22b%3Cc?rel=0");
        assert!(!modal.markup.contains("a\"b"));
    }
}
