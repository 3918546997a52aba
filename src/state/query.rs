//! Query/filter/pagination state owned by the interaction controller.

use tracing::debug;

use super::types::Genre;

/// Genre selection: either every genre or a single genre id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenreFilter {
    /// No genre filtering (wire value `"all"`).
    #[default]
    All,
    /// Only movies tagged with this genre id.
    Id(u32),
}

impl GenreFilter {
    /// What: Parse a selector value into a filter.
    ///
    /// Inputs:
    /// - `value`: `"all"` or a decimal genre id.
    ///
    /// Output:
    /// - `Some(GenreFilter)` on success; `None` for anything else.
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        let v = value.trim();
        if v.eq_ignore_ascii_case("all") {
            return Some(Self::All);
        }
        v.parse::<u32>().ok().map(Self::Id)
    }

    /// Selector value for this filter (`"all"` or the id).
    #[must_use]
    pub fn as_value(self) -> String {
        match self {
            Self::All => "all".to_string(),
            Self::Id(id) => id.to_string(),
        }
    }
}

/// Sort order requested from the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Most popular first.
    #[default]
    Popular,
    /// Most recent release first.
    Newest,
    /// Highest rated first.
    Rating,
}

impl SortOrder {
    /// Wire value sent as the `sort` parameter.
    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Popular => "popular",
            Self::Newest => "newest",
            Self::Rating => "rating",
        }
    }

    /// What: Map a selector or command-line value to a sort order.
    ///
    /// Inputs:
    /// - `s`: Case-insensitive value; a few aliases are accepted.
    ///
    /// Output:
    /// - `Some(SortOrder)` when recognized; `None` otherwise.
    #[must_use]
    pub fn from_param(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "popular" | "popularity" => Some(Self::Popular),
            "newest" | "release_date" | "recent" => Some(Self::Newest),
            "rating" | "top_rated" | "vote_average" => Some(Self::Rating),
            _ => None,
        }
    }
}

/// What: Current query, filter and pagination state of the session.
///
/// Details:
/// - `page` is always at least 1; [`QueryState::set_page`] clamps.
/// - `genres` is loaded once at startup and survives [`QueryState::reset`].
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState {
    /// Raw search text as typed; trimmed only when building requests.
    pub search_text: String,
    /// Active genre filter.
    pub genre: GenreFilter,
    /// Active sort order.
    pub sort: SortOrder,
    /// Current page number (1-based).
    page: u32,
    /// Genres known to the session, in backend order.
    pub genres: Vec<Genre>,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            genre: GenreFilter::All,
            sort: SortOrder::Popular,
            page: 1,
            genres: Vec::new(),
        }
    }
}

impl QueryState {
    /// Fresh state with default filters and no known genres.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current page number (always `>= 1`).
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Set the page number, clamping `0` up to `1`.
    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// What: Restore default filters, sort and page while keeping the genre list.
    pub fn reset(&mut self) {
        let genres = std::mem::take(&mut self.genres);
        *self = Self {
            genres,
            ..Self::default()
        };
        debug!(genres = self.genres.len(), "query state reset");
    }

    /// Look up a known genre name by id.
    #[must_use]
    pub fn genre_name(&self, id: u32) -> Option<&str> {
        self.genres
            .iter()
            .find(|g| g.id == id)
            .map(|g| g.name.as_str())
    }

    /// Whether `filter` refers to a genre this session knows about (or is `All`).
    #[must_use]
    pub fn is_known_filter(&self, filter: GenreFilter) -> bool {
        match filter {
            GenreFilter::All => true,
            GenreFilter::Id(id) => self.genres.iter().any(|g| g.id == id),
        }
    }
}
