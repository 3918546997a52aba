//! View models for the card grid, pagination and selectors, and their markup.
//!
//! Every piece of backend-supplied text goes through [`escape_html`] before it
//! reaches a markup string; view models hold the raw values.

use std::fmt::Write;

use super::escape::escape_html;
use crate::config::{MAX_PAGE_BUTTONS, Settings};
use crate::sources::FetchError;
use crate::state::{Genre, MoviePage, MovieSummary, QueryState};

/// Grid content shown while a movie load is in flight.
pub const LOADING_MARKUP: &str = r#"<div class="skeleton">Loading…</div>"#;

/// Shown in place of a missing release year.
pub const MISSING_YEAR: &str = "N/A";

/// Shown in place of a missing rating.
pub const MISSING_RATING: &str = "–";

/// What: Display-ready data for one movie card.
///
/// Details:
/// - Text fields are unescaped; escaping happens in [`render_card`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// Movie id carried by the trailer button.
    pub id: u64,
    /// Title text.
    pub title: String,
    /// Poster URL, or the placeholder image.
    pub poster_src: String,
    /// Release year or [`MISSING_YEAR`].
    pub year: String,
    /// Rating with one decimal or [`MISSING_RATING`].
    pub rating: String,
    /// Names of the movie's known genres, in the movie's order.
    pub genres: Vec<String>,
}

impl CardView {
    /// What: Build a card view model from a movie summary.
    ///
    /// Inputs:
    /// - `movie`: Movie from the current page.
    /// - `genres`: Genres known to the session, used to resolve `genre_ids`.
    /// - `settings`: Image base and placeholder.
    ///
    /// Output:
    /// - Card with fallbacks applied for poster, year and rating.
    ///
    /// Details:
    /// - Genre ids without a known genre are dropped.
    #[must_use]
    pub fn from_movie(movie: &MovieSummary, genres: &[Genre], settings: &Settings) -> Self {
        let poster_src = movie.poster().map_or_else(
            || settings.placeholder_image.clone(),
            |p| format!("{}{p}", settings.image_base),
        );
        let year = movie
            .release_year()
            .map_or_else(|| MISSING_YEAR.to_string(), str::to_string);
        let rating = movie
            .vote_average
            .filter(|v| v.is_finite())
            .map_or_else(|| MISSING_RATING.to_string(), |v| format!("{v:.1}"));
        let genres = movie
            .genre_ids
            .iter()
            .filter_map(|id| genres.iter().find(|g| g.id == *id))
            .map(|g| g.name.clone())
            .collect();
        Self {
            id: movie.id,
            title: movie.title.clone(),
            poster_src,
            year,
            rating,
            genres,
        }
    }
}

/// Render one card as an `<article>` element.
#[must_use]
pub fn render_card(card: &CardView) -> String {
    let title = escape_html(&card.title);
    let mut badges = String::new();
    for name in &card.genres {
        let _ = write!(badges, r#"<span class="genre">{}</span>"#, escape_html(name));
    }
    format!(
        concat!(
            r#"<article class="card">"#,
            r#"<img class="poster" src="{src}" alt="{title} poster">"#,
            r#"<div class="card-body">"#,
            r#"<h4 class="title">{title}</h4>"#,
            r#"<div class="meta"><span>{year}</span><span>•</span><span>⭐ {rating}</span></div>"#,
            r#"<div class="genres">{badges}</div>"#,
            r#"<div class="actions">"#,
            r#"<button class="btn play" data-id="{id}" aria-label="Watch trailer for {title}">Play Trailer</button>"#,
            r#"</div></div></article>"#,
        ),
        src = escape_html(&card.poster_src),
        title = title,
        year = escape_html(&card.year),
        rating = escape_html(&card.rating),
        badges = badges,
        id = card.id,
    )
}

/// Render a list of cards as grid content.
#[must_use]
pub fn render_grid(cards: &[CardView]) -> String {
    cards.iter().map(render_card).collect::<Vec<_>>().join("\n")
}

/// One pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    /// Page number this control loads (1-based).
    pub number: u32,
    /// Whether this is the current page.
    pub active: bool,
}

/// What: Compute pagination controls.
///
/// Inputs:
/// - `total_pages`: Page count reported by the backend.
/// - `current`: Current page number.
///
/// Output:
/// - Buttons `1..=min(total_pages, MAX_PAGE_BUTTONS)`; the current page is active.
#[must_use]
pub fn pagination(total_pages: u32, current: u32) -> Vec<PageButton> {
    (1..=total_pages.min(MAX_PAGE_BUTTONS))
        .map(|number| PageButton {
            number,
            active: number == current,
        })
        .collect()
}

/// Render pagination controls as `<button>` elements.
#[must_use]
pub fn render_pagination(buttons: &[PageButton]) -> String {
    buttons
        .iter()
        .map(|b| {
            let class = if b.active { "page active" } else { "page" };
            format!(
                r#"<button class="{class}" data-page="{n}">{n}</button>"#,
                n = b.number
            )
        })
        .collect()
}

/// What: Inline error block that replaces the grid after a failed load.
///
/// Inputs:
/// - `what`: Name of the thing that failed to load (`movies`, `genres`).
/// - `err`: The failure.
#[must_use]
pub fn render_error(what: &str, err: &FetchError) -> String {
    format!(
        r#"<div class="error">Error loading {}: {}</div>"#,
        escape_html(what),
        escape_html(&err.to_string())
    )
}

/// One `<option>` of a selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Submitted value.
    pub value: String,
    /// Visible label.
    pub label: String,
}

/// What: Genre selector options: "All genres" followed by every known genre.
#[must_use]
pub fn genre_options(genres: &[Genre]) -> Vec<SelectOption> {
    std::iter::once(SelectOption {
        value: "all".to_string(),
        label: "All genres".to_string(),
    })
    .chain(genres.iter().map(|g| SelectOption {
        value: g.id.to_string(),
        label: g.name.clone(),
    }))
    .collect()
}

/// Render selector options, marking `selected` if present.
#[must_use]
pub fn render_options(options: &[SelectOption], selected: &str) -> String {
    options
        .iter()
        .map(|o| {
            let sel = if o.value == selected { " selected" } else { "" };
            format!(
                r#"<option value="{}"{sel}>{}</option>"#,
                escape_html(&o.value),
                escape_html(&o.label)
            )
        })
        .collect()
}

/// Output of one render pass over a movie page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    /// Grid markup; empty when there are no results.
    pub grid_html: String,
    /// Pagination controls for the page.
    pub pagination: Vec<PageButton>,
    /// Total result count for the counter.
    pub total_results: u64,
    /// Whether the empty-state indicator is shown.
    pub empty: bool,
}

/// What: Render a movie page against the current state.
///
/// Inputs:
/// - `page`: Decoded movie page.
/// - `state`: Current state (known genres and page number).
/// - `settings`: Image settings.
///
/// Output:
/// - Grid markup, pagination controls, total and empty flag.
///
/// Details:
/// - An empty result list produces no cards and no pagination controls.
#[must_use]
pub fn render_page(page: &MoviePage, state: &QueryState, settings: &Settings) -> RenderedPage {
    if page.results.is_empty() {
        return RenderedPage {
            grid_html: String::new(),
            pagination: Vec::new(),
            total_results: page.total_results,
            empty: true,
        };
    }
    let cards: Vec<CardView> = page
        .results
        .iter()
        .map(|m| CardView::from_movie(m, &state.genres, settings))
        .collect();
    RenderedPage {
        grid_html: render_grid(&cards),
        pagination: pagination(page.total_pages, state.page()),
        total_results: page.total_results,
        empty: false,
    }
}
