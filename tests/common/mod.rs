//! Shared fixtures for integration tests: an in-memory catalog backend.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use moviestream::sources::{ApiRequest, CatalogApi, FetchError, Result, pick_trailer};
use moviestream::state::{Genre, MoviePage, MovieSummary, Video};

/// In-memory backend recording every movie request.
#[derive(Default)]
pub struct FakeCatalog {
    pub genres: Vec<Genre>,
    pub genre_error: Option<FetchError>,
    pub movie_error: RefCell<Option<FetchError>>,
    pub empty_pages: bool,
    pub movie_delays: RefCell<VecDeque<Duration>>,
    pub movie_requests: RefCell<Vec<ApiRequest>>,
    pub videos: HashMap<u64, Vec<Video>>,
    pub video_error: Option<FetchError>,
}

impl FakeCatalog {
    pub fn with_genres() -> Self {
        Self {
            genres: vec![
                Genre {
                    id: 28,
                    name: "Action".to_string(),
                },
                Genre {
                    id: 35,
                    name: "Comedy".to_string(),
                },
            ],
            ..Self::default()
        }
    }

    pub fn movie_calls(&self) -> usize {
        self.movie_requests.borrow().len()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.movie_requests
            .borrow()
            .last()
            .cloned()
            .expect("at least one movie request")
    }
}

pub fn video(site: &str, key: &str) -> Video {
    Video {
        site: site.to_string(),
        key: key.to_string(),
    }
}

impl CatalogApi for FakeCatalog {
    async fn fetch_genres(&self) -> Result<Vec<Genre>> {
        match &self.genre_error {
            Some(e) => Err(e.clone()),
            None => Ok(self.genres.clone()),
        }
    }

    async fn fetch_movies(&self, request: &ApiRequest) -> Result<MoviePage> {
        self.movie_requests.borrow_mut().push(request.clone());
        let delay = self.movie_delays.borrow_mut().pop_front();
        if let Some(d) = delay {
            tokio::time::sleep(d).await;
        }
        if let Some(e) = self.movie_error.borrow().clone() {
            return Err(e);
        }
        if self.empty_pages {
            return Ok(MoviePage::default());
        }
        let page: u32 = request
            .param("page")
            .and_then(|p| p.parse().ok())
            .unwrap_or(1);
        Ok(MoviePage {
            results: vec![MovieSummary {
                id: u64::from(page) * 100,
                title: format!("Result for page {page}"),
                genre_ids: vec![28],
                ..MovieSummary::default()
            }],
            total_results: 240,
            total_pages: 12,
        })
    }

    async fn fetch_videos(&self, movie_id: u64) -> Result<Video> {
        if let Some(e) = &self.video_error {
            return Err(e.clone());
        }
        pick_trailer(self.videos.get(&movie_id).cloned().unwrap_or_default())
    }
}
