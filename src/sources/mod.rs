//! Catalog backend access: request building, the fetcher seam and its HTTP
//! implementation.

use std::future::Future;

mod error;
mod http;
pub mod query;

pub use error::FetchError;
pub use http::{HttpCatalog, decode_genres, decode_movie_page, decode_trailer};
pub use query::{ApiRequest, join_url, movies_request, resolve_base};

use crate::config::TRAILER_SITE;
use crate::state::{Genre, MoviePage, Video};

/// Result type alias for catalog fetch operations.
pub type Result<T> = std::result::Result<T, FetchError>;

/// What: Operations the controller needs from the catalog backend.
///
/// Details:
/// - Each call is one request/response cycle; no retry, backoff or caching.
/// - Implemented over HTTP by [`HttpCatalog`] and by in-memory fakes in tests.
pub trait CatalogApi {
    /// What: Fetch the genre list.
    ///
    /// Output:
    /// - Genres in backend order; empty when the response has no `genres` field.
    ///
    /// # Errors
    /// - `FetchError::Network` on transport failure or malformed JSON.
    fn fetch_genres(&self) -> impl Future<Output = Result<Vec<Genre>>>;

    /// What: Fetch one page of movies for a prepared request.
    ///
    /// # Errors
    /// - `FetchError::Http` when the status is outside the success range.
    /// - `FetchError::Network` on transport failure or malformed JSON.
    fn fetch_movies(&self, request: &ApiRequest) -> impl Future<Output = Result<MoviePage>>;

    /// What: Resolve the playable trailer for a movie.
    ///
    /// Output:
    /// - The first video hosted on [`TRAILER_SITE`].
    ///
    /// # Errors
    /// - `FetchError::NotFound` when no such video exists.
    /// - `FetchError::Network` on transport failure or malformed JSON.
    fn fetch_videos(&self, movie_id: u64) -> impl Future<Output = Result<Video>>;
}

/// What: Pick the first video hosted on the trailer platform.
///
/// Inputs:
/// - `videos`: Candidate videos in backend order.
///
/// Output:
/// - `Ok(Video)` for the first match; `Err(FetchError::NotFound)` otherwise.
///
/// # Errors
/// - `FetchError::NotFound` for an empty list or when no entry matches.
pub fn pick_trailer(videos: Vec<Video>) -> Result<Video> {
    videos
        .into_iter()
        .find(|v| v.site == TRAILER_SITE)
        .ok_or(FetchError::NotFound)
}
