//! Core value types decoded from the catalog backend.

use serde::Deserialize;

/// Movie genre as listed by the backend.
///
/// Fetched once at startup and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Genre {
    /// Numeric genre identifier.
    pub id: u32,
    /// Display name.
    pub name: String,
}

/// Minimal movie entry used for one render pass of the card grid.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct MovieSummary {
    /// Backend movie identifier, used for trailer lookups.
    pub id: u64,
    /// Title text exactly as the backend returned it (unescaped).
    #[serde(default)]
    pub title: String,
    /// Poster path fragment appended to the image base URL.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Release date, usually `YYYY-MM-DD`; may be empty.
    #[serde(default)]
    pub release_date: Option<String>,
    /// Average vote on a 0-10 scale.
    #[serde(default)]
    pub vote_average: Option<f64>,
    /// Genre ids in backend order.
    #[serde(default)]
    pub genre_ids: Vec<u32>,
}

impl MovieSummary {
    /// What: Return the poster path when it is present and non-empty.
    ///
    /// Output:
    /// - `Some(&str)` with the path fragment; `None` for missing or blank values.
    #[must_use]
    pub fn poster(&self) -> Option<&str> {
        self.poster_path.as_deref().filter(|p| !p.trim().is_empty())
    }

    /// What: Extract the release year from the release date.
    ///
    /// Output:
    /// - `Some(year)` as the text before the first `-`; `None` when the date is missing or blank.
    #[must_use]
    pub fn release_year(&self) -> Option<&str> {
        let date = self.release_date.as_deref()?.trim();
        if date.is_empty() {
            return None;
        }
        date.split('-').next().filter(|y| !y.is_empty())
    }
}

/// One page of movie results.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct MoviePage {
    /// Movies on this page, in backend order.
    #[serde(default)]
    pub results: Vec<MovieSummary>,
    /// Total number of matching movies across all pages.
    #[serde(default)]
    pub total_results: u64,
    /// Total number of pages available.
    #[serde(default)]
    pub total_pages: u32,
}

/// Video reference used to resolve a playable trailer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Video {
    /// Hosting platform name (e.g. `YouTube`).
    #[serde(default)]
    pub site: String,
    /// Platform-specific video key.
    #[serde(default)]
    pub key: String,
}
