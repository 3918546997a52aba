//! HTTP implementation of [`CatalogApi`] on top of `reqwest`.

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, info, warn};

use super::query::{ApiRequest, genres_request, health_request, resolve_base, videos_request};
use super::{CatalogApi, FetchError, Result, pick_trailer};
use crate::config::Settings;
use crate::state::{Genre, MoviePage, Video};

/// `GET genres` payload.
#[derive(Deserialize)]
struct GenresResponse {
    #[serde(default)]
    genres: Vec<Genre>,
}

/// `GET movies/{id}/videos` payload.
#[derive(Deserialize)]
struct VideosResponse {
    #[serde(default)]
    results: Vec<Video>,
}

/// `GET health` payload.
#[derive(Deserialize)]
struct HealthResponse {
    #[serde(default)]
    status: String,
}

/// Whether `status` is in the 2xx range.
const fn is_success(status: u16) -> bool {
    status >= 200 && status < 300
}

/// What: Decode a genre list response.
///
/// Inputs:
/// - `status`: HTTP status code (logged when not successful, otherwise unused).
/// - `body`: Raw response body.
///
/// Output:
/// - Genres in order; empty when the field is absent.
///
/// # Errors
/// - `FetchError::Network` when the body is not valid JSON.
pub fn decode_genres(status: u16, body: &str) -> Result<Vec<Genre>> {
    if !is_success(status) {
        warn!(status, "genre list returned non-success status");
    }
    let resp: GenresResponse = serde_json::from_str(body)?;
    Ok(resp.genres)
}

/// What: Decode a movie page response, classifying failures.
///
/// # Errors
/// - `FetchError::Http` for non-2xx status codes (body is not inspected).
/// - `FetchError::Network` when the body is not valid JSON.
pub fn decode_movie_page(status: u16, body: &str) -> Result<MoviePage> {
    if !is_success(status) {
        let preview: String = body.chars().take(200).collect();
        warn!(status, preview = preview, "movie listing returned non-success status");
        return Err(FetchError::Http { status });
    }
    Ok(serde_json::from_str(body)?)
}

/// What: Decode a video list response and pick the trailer.
///
/// # Errors
/// - `FetchError::Network` when the body is not valid JSON.
/// - `FetchError::NotFound` when no video is hosted on the trailer platform.
pub fn decode_trailer(body: &str) -> Result<Video> {
    let resp: VideosResponse = serde_json::from_str(body)?;
    pick_trailer(resp.results)
}

/// Catalog backend reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    /// Shared client; connection pooling is enabled by default.
    client: reqwest::Client,
    /// Absolute API base with the page origin applied.
    base: String,
}

impl HttpCatalog {
    /// What: Build a catalog client from settings.
    ///
    /// Inputs:
    /// - `settings`: Origin, API base and timeout.
    ///
    /// # Errors
    /// - `FetchError::Network` when the HTTP client cannot be constructed.
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(settings.request_timeout_secs))
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .user_agent(format!("moviestream/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        let base = resolve_base(&settings.page_origin, &settings.api_base);
        info!(base = %base, "catalog client ready");
        Ok(Self { client, base })
    }

    /// Absolute API base used for every request.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// What: Issue a GET and return status plus body text.
    ///
    /// # Errors
    /// - `FetchError::Network` on connection, timeout or body read failure.
    async fn get(&self, request: &ApiRequest) -> Result<(u16, String)> {
        let url = request.url(&self.base);
        debug!(url = %url, "GET");
        let resp = self.client.get(&url).send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        debug!(url = %url, status, bytes = body.len(), "response received");
        Ok((status, body))
    }

    /// What: Probe the backend health endpoint.
    ///
    /// Output:
    /// - `Ok(true)` when the backend reports `status: "ok"`.
    ///
    /// # Errors
    /// - `FetchError::Http` for non-2xx status codes.
    /// - `FetchError::Network` on transport failure or malformed JSON.
    pub async fn check_health(&self) -> Result<bool> {
        let (status, body) = self.get(&health_request()).await?;
        if !is_success(status) {
            return Err(FetchError::Http { status });
        }
        let resp: HealthResponse = serde_json::from_str(&body)?;
        Ok(resp.status == "ok")
    }
}

impl CatalogApi for HttpCatalog {
    async fn fetch_genres(&self) -> Result<Vec<Genre>> {
        let (status, body) = self.get(&genres_request()).await?;
        let genres = decode_genres(status, &body)?;
        info!(count = genres.len(), "genres fetched");
        Ok(genres)
    }

    async fn fetch_movies(&self, request: &ApiRequest) -> Result<MoviePage> {
        let (status, body) = self.get(request).await?;
        decode_movie_page(status, &body)
    }

    async fn fetch_videos(&self, movie_id: u64) -> Result<Video> {
        let (_status, body) = self.get(&videos_request(movie_id)).await?;
        decode_trailer(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: A missing `genres` field yields an empty list, not an error.
    fn genres_field_absent_is_empty() {
        assert_eq!(decode_genres(200, "{}"), Ok(Vec::new()));
        let genres = decode_genres(200, r#"{"genres":[{"id":12,"name":"Adventure"}]}"#)
            .expect("genres");
        assert_eq!(genres[0].name, "Adventure");
    }

    #[test]
    /// What: Status is checked before the body for movie pages.
    ///
    /// Inputs:
    /// - 500 with a JSON body, 404 with HTML, 200 with garbage
    ///
    /// Output:
    /// - Http(500), Http(404), Network
    fn movie_page_failure_classes() {
        assert_eq!(
            decode_movie_page(500, r#"{"detail":"Failed to fetch movies"}"#),
            Err(FetchError::Http { status: 500 })
        );
        assert_eq!(
            decode_movie_page(404, "<html>nope</html>"),
            Err(FetchError::Http { status: 404 })
        );
        assert!(matches!(
            decode_movie_page(200, "<html>"),
            Err(FetchError::Network(_))
        ));
    }

    #[test]
    fn movie_page_success() {
        let page = decode_movie_page(
            200,
            r#"{"results":[{"id":1,"title":"Up","genre_ids":[16]}],"total_results":1,"total_pages":1}"#,
        )
        .expect("page");
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn trailer_decoding() {
        let body = r#"{"results":[{"site":"Vimeo","key":"a"},{"site":"YouTube","key":"b"}]}"#;
        assert_eq!(decode_trailer(body).map(|v| v.key), Ok("b".to_string()));
        assert_eq!(decode_trailer(r#"{"results":[]}"#), Err(FetchError::NotFound));
        assert_eq!(decode_trailer("{}"), Err(FetchError::NotFound));
    }
}
