//! Request construction: turns [`QueryState`] into backend paths and parameters.

use crate::state::{GenreFilter, QueryState};
use crate::util::encode_query;

/// A backend request: endpoint path relative to the API base plus ordered
/// query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// Endpoint segment, e.g. `movies` or `movies/42/videos`.
    pub endpoint: String,
    /// Query parameters in send order.
    pub params: Vec<(&'static str, String)>,
}

impl ApiRequest {
    /// Request for `endpoint` without parameters.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            params: Vec::new(),
        }
    }

    /// Value of the first parameter named `key`, if present.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// What: Build the full request URL under `base`.
    ///
    /// Inputs:
    /// - `base`: Resolved API base (see [`resolve_base`]).
    ///
    /// Output:
    /// - `base/endpoint?k=v&...`; the `?` is omitted when there are no parameters.
    #[must_use]
    pub fn url(&self, base: &str) -> String {
        let path = join_url(base, &self.endpoint);
        if self.params.is_empty() {
            path
        } else {
            format!("{path}?{}", encode_query(&self.params))
        }
    }
}

/// What: Join a base path and an endpoint with exactly one separating slash.
///
/// Inputs:
/// - `base`: Base path or URL; trailing slashes are ignored.
/// - `endpoint`: Endpoint segment; leading slashes are ignored.
///
/// Output:
/// - `"{base}/{endpoint}"` with a single `/` between the two parts.
#[must_use]
pub fn join_url(base: &str, endpoint: &str) -> String {
    let base = base.trim_end_matches('/');
    let endpoint = endpoint.trim_start_matches('/');
    format!("{base}/{endpoint}")
}

/// What: Resolve a possibly page-relative API base to an absolute base.
///
/// Inputs:
/// - `origin`: Page origin, e.g. `http://localhost:8000`.
/// - `api_base`: Configured base; a leading `/` makes it origin-relative.
///
/// Output:
/// - `origin + api_base` for relative bases; `api_base` unchanged otherwise.
#[must_use]
pub fn resolve_base(origin: &str, api_base: &str) -> String {
    if api_base.starts_with('/') {
        format!("{}{api_base}", origin.trim_end_matches('/'))
    } else {
        api_base.to_string()
    }
}

/// What: Build the movie listing request for the current state.
///
/// Inputs:
/// - `state`: Current query state.
///
/// Output:
/// - `movies` request with `q` (only when the trimmed text is non-empty),
///   `genre` (only when not `all`), `sort` and `page`.
///
/// Details:
/// - The search text is sent as typed; trimming only decides whether it is sent.
#[must_use]
pub fn movies_request(state: &QueryState) -> ApiRequest {
    let mut req = ApiRequest::new("movies");
    if !state.search_text.trim().is_empty() {
        req.params.push(("q", state.search_text.clone()));
    }
    if let GenreFilter::Id(id) = state.genre {
        req.params.push(("genre", id.to_string()));
    }
    req.params.push(("sort", state.sort.as_param().to_string()));
    req.params.push(("page", state.page().to_string()));
    req
}

/// Genre list request.
#[must_use]
pub fn genres_request() -> ApiRequest {
    ApiRequest::new("genres")
}

/// Video list request for one movie.
#[must_use]
pub fn videos_request(movie_id: u64) -> ApiRequest {
    ApiRequest::new(format!("movies/{movie_id}/videos"))
}

/// Backend health probe.
#[must_use]
pub fn health_request() -> ApiRequest {
    ApiRequest::new("health")
}
