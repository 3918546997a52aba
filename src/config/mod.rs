//! Client configuration: fixed policy constants and user-tunable settings.
//!
//! Settings are read from `settings.conf` (see [`paths`]) in a simple
//! `key = value` format; anything missing keeps its default.

mod parse;
pub mod paths;

use std::path::Path;

use tracing::{debug, info, warn};

pub use parse::parse_settings;
pub use paths::{config_dir, logs_dir};

/// Quiet window for search input before a load is triggered, in milliseconds.
pub const DEBOUNCE_MS: u64 = 350;

/// Maximum number of pagination buttons rendered, regardless of page count.
pub const MAX_PAGE_BUTTONS: u32 = 5;

/// Video platform whose entries are accepted as playable trailers.
pub const TRAILER_SITE: &str = "YouTube";

/// User-tunable client settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Origin that a relative `api_base` is resolved against.
    pub page_origin: String,
    /// Backend base path or absolute URL.
    pub api_base: String,
    /// Prefix prepended to poster path fragments.
    pub image_base: String,
    /// Image shown when a movie has no poster.
    pub placeholder_image: String,
    /// Prefix of the embeddable trailer player URL; the video key is appended.
    pub embed_base: String,
    /// Per-request timeout for backend calls.
    pub request_timeout_secs: u64,
    /// Drop movie responses older than the latest request instead of rendering
    /// whichever arrives last.
    pub discard_stale_responses: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_origin: "http://localhost:8000".to_string(),
            api_base: "/api".to_string(),
            image_base: "https://image.tmdb.org/t/p/w500".to_string(),
            placeholder_image: "https://via.placeholder.com/400x600?text=No+Image".to_string(),
            embed_base: "https://www.youtube.com/embed/".to_string(),
            request_timeout_secs: 10,
            discard_stale_responses: false,
        }
    }
}

impl Settings {
    /// What: Load settings from a specific file on top of the defaults.
    ///
    /// Inputs:
    /// - `path`: Settings file path.
    ///
    /// Output:
    /// - Parsed settings, or defaults when the file cannot be read.
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        let mut settings = Self::default();
        match std::fs::read_to_string(path) {
            Ok(content) => {
                parse_settings(&content, &mut settings);
                info!(path = %path.display(), "settings loaded");
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read settings; using defaults");
            }
        }
        settings
    }

    /// What: Load settings from the resolved config location.
    ///
    /// Output:
    /// - Parsed settings when a `settings.conf` exists; defaults otherwise.
    #[must_use]
    pub fn load() -> Self {
        paths::resolve_settings_config_path().map_or_else(
            || {
                debug!("no settings file found; using defaults");
                Self::default()
            },
            |p| Self::load_from(&p),
        )
    }
}

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
