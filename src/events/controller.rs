//! The interaction controller: owns the query state and the document, turns
//! UI events into loads and applies completed loads to the document.

use std::rc::Rc;

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use futures::stream::{FuturesUnordered, StreamExt};
use tokio::sync::mpsc;
use tokio::time::Duration;
use tracing::{debug, info, warn};

use super::{ClickTarget, Debouncer, KeyDisposition, KeyInput, UiEvent};
use crate::config::{DEBOUNCE_MS, Settings};
use crate::sources::{CatalogApi, FetchError, Result, movies_request};
use crate::state::{GenreFilter, MoviePage, QueryState, SortOrder, Video};
use crate::ui::render::{genre_options, render_error, render_page};
use crate::ui::{ControlValues, Document, ModalKey, TrailerModal};

/// Notice shown when a movie has no playable trailer.
pub const NO_TRAILER_NOTICE: &str = "No trailer available";

/// A finished network call waiting to be applied.
enum Completion {
    /// Movie page load tagged with its request id.
    Movies { id: u64, result: Result<MoviePage> },
    /// Trailer lookup for a movie.
    Trailer { movie_id: u64, result: Result<Video> },
}

/// What: Single-owner controller for one browsing session.
///
/// Details:
/// - All mutation happens on the task that drives [`Controller::run`] or
///   [`Controller::settle`]; no locking is involved.
/// - Loads are not cancelled. Unless `discard_stale_responses` is set, the
///   movie response that resolves last is the one rendered, even if it belongs
///   to an older request.
pub struct Controller<A: CatalogApi + 'static> {
    /// Backend shared with in-flight loads.
    api: Rc<A>,
    /// Client settings (media URLs, stale-response policy).
    settings: Settings,
    /// Query, filter and pagination state.
    state: QueryState,
    /// Rendered page the controller writes into.
    document: Document,
    /// Pending search text waiting out the quiet window.
    search: Debouncer<String>,
    /// Network calls started but not yet applied.
    in_flight: FuturesUnordered<LocalBoxFuture<'static, Completion>>,
    /// Id of the most recently started movie load.
    latest_load: u64,
}

#[allow(clippy::future_not_send)]
impl<A: CatalogApi + 'static> Controller<A> {
    /// What: Create a controller with default state and an empty document.
    ///
    /// Inputs:
    /// - `api`: Catalog backend.
    /// - `settings`: Client settings.
    #[must_use]
    pub fn new(api: Rc<A>, settings: Settings) -> Self {
        Self {
            api,
            settings,
            state: QueryState::new(),
            document: Document::new(),
            search: Debouncer::new(Duration::from_millis(DEBOUNCE_MS)),
            in_flight: FuturesUnordered::new(),
            latest_load: 0,
        }
    }

    /// Current query state.
    #[must_use]
    pub const fn state(&self) -> &QueryState {
        &self.state
    }

    /// Current document.
    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// Number of movie loads started so far.
    #[must_use]
    pub const fn loads_started(&self) -> u64 {
        self.latest_load
    }

    /// Whether a debounced search or a network call is outstanding.
    #[must_use]
    pub fn has_pending_work(&self) -> bool {
        self.search.is_pending() || !self.in_flight.is_empty()
    }

    /// What: Load genres, populate the genre selector, then run the first movie load.
    ///
    /// Output:
    /// - `Ok(())` once the first movie load has been applied (successfully or as an inline error).
    ///
    /// # Errors
    /// - The genre fetch error; the grid shows it and no movie load is started.
    ///
    /// Details:
    /// - Genres must be known before the first render so card badges resolve.
    pub async fn init(&mut self) -> Result<()> {
        match self.api.fetch_genres().await {
            Ok(genres) => {
                info!(count = genres.len(), "genre selector populated");
                self.document.genre_options = genre_options(&genres);
                self.state.genres = genres;
            }
            Err(e) => {
                warn!(error = %e, "failed to load genres");
                self.document.show_grid_message(render_error("genres", &e));
                return Err(e);
            }
        }
        self.reload();
        self.settle().await;
        Ok(())
    }

    /// What: Apply one UI event.
    ///
    /// Details:
    /// - Search input only arms the debounce timer; every other filter change
    ///   resets to page 1 and reloads immediately.
    /// - Page clicks reload even when the page is already active.
    pub fn handle_event(&mut self, event: UiEvent) {
        debug!(?event, "ui event");
        match event {
            UiEvent::SearchInput(text) => {
                self.document.controls.search.clone_from(&text);
                self.search.push(text);
            }
            UiEvent::GenreChanged(filter) => self.select_genre(filter),
            UiEvent::SortChanged(order) => self.select_sort(order),
            UiEvent::Clear => self.clear(),
            UiEvent::PageClicked(page) => {
                self.state.set_page(page);
                self.reload();
                self.document.scroll_to_top_requests += 1;
            }
            UiEvent::TrailerRequested(movie_id) => self.request_trailer(movie_id),
            UiEvent::ModalClick(target) => self.modal_click(target),
            UiEvent::Key(key) => {
                self.handle_key(key);
            }
        }
    }

    /// What: Route a key press to the open overlay.
    ///
    /// Output:
    /// - `Intercepted` when the overlay consumed the key; `PassThrough` otherwise,
    ///   including whenever no overlay is open.
    pub fn handle_key(&mut self, key: KeyInput) -> KeyDisposition {
        let Some(modal) = self.document.modal.as_mut() else {
            return KeyDisposition::PassThrough;
        };
        match modal.handle_key(key) {
            ModalKey::Moved => KeyDisposition::Intercepted,
            ModalKey::Close => {
                self.close_modal();
                KeyDisposition::Intercepted
            }
            ModalKey::Ignored => KeyDisposition::PassThrough,
        }
    }

    fn select_genre(&mut self, filter: GenreFilter) {
        if !self.state.is_known_filter(filter) {
            warn!(?filter, "genre filter not in the loaded genre list");
        }
        self.state.genre = filter;
        self.document.controls.genre = filter;
        self.state.set_page(1);
        self.reload();
    }

    fn select_sort(&mut self, order: SortOrder) {
        self.state.sort = order;
        self.document.controls.sort = order;
        self.state.set_page(1);
        self.reload();
    }

    fn clear(&mut self) {
        if let Some(dropped) = self.search.cancel() {
            debug!(text = %dropped, "pending search dropped by clear");
        }
        self.state.reset();
        self.document.controls = ControlValues::default();
        self.reload();
    }

    /// Debounce window elapsed for `text`.
    fn apply_search(&mut self, text: String) {
        self.state.search_text = text;
        self.state.set_page(1);
        self.reload();
    }

    /// What: Start a movie load for the current state.
    ///
    /// Details:
    /// - Shows the loading skeleton and queues the request; the result is
    ///   applied when it resolves.
    pub fn reload(&mut self) {
        self.latest_load += 1;
        let id = self.latest_load;
        let request = movies_request(&self.state);
        debug!(id, endpoint = %request.endpoint, params = ?request.params, "movie load started");
        self.document.show_loading();
        let api = Rc::clone(&self.api);
        self.in_flight.push(
            async move {
                let result = api.fetch_movies(&request).await;
                Completion::Movies { id, result }
            }
            .boxed_local(),
        );
    }

    fn request_trailer(&mut self, movie_id: u64) {
        debug!(movie_id, "trailer requested");
        let api = Rc::clone(&self.api);
        self.in_flight.push(
            async move {
                let result = api.fetch_videos(movie_id).await;
                Completion::Trailer { movie_id, result }
            }
            .boxed_local(),
        );
    }

    fn modal_click(&mut self, target: ClickTarget) {
        if self.document.modal.is_some() && TrailerModal::closes_on(target) {
            self.close_modal();
        }
    }

    fn close_modal(&mut self) {
        if let Some(modal) = self.document.modal.take() {
            info!(movie_id = modal.movie_id, "trailer closed");
        }
    }

    fn complete(&mut self, completion: Completion) {
        match completion {
            Completion::Movies { id, result } => {
                if self.settings.discard_stale_responses && id != self.latest_load {
                    debug!(id, latest = self.latest_load, "stale movie response discarded");
                    return;
                }
                match result {
                    Ok(page) => {
                        let rendered = render_page(&page, &self.state, &self.settings);
                        info!(
                            id,
                            results = page.results.len(),
                            total = page.total_results,
                            "movies rendered"
                        );
                        self.document.apply(rendered);
                    }
                    Err(e) => {
                        warn!(id, error = %e, "movie load failed");
                        self.document.show_grid_message(render_error("movies", &e));
                    }
                }
            }
            Completion::Trailer { movie_id, result } => match result {
                Ok(video) => {
                    info!(movie_id, key = %video.key, "trailer opened");
                    self.document.modal =
                        Some(TrailerModal::open(movie_id, &video, &self.settings));
                }
                Err(FetchError::NotFound) => {
                    info!(movie_id, "no trailer available");
                    self.document.notices.push(NO_TRAILER_NOTICE.to_string());
                }
                Err(e) => {
                    warn!(movie_id, error = %e, "trailer lookup failed");
                    self.document
                        .notices
                        .push(format!("Could not load trailer: {e}"));
                }
            },
        }
    }

    /// What: Drive the debounce timer and in-flight loads until nothing is pending.
    pub async fn settle(&mut self) {
        while self.has_pending_work() {
            tokio::select! {
                text = self.search.fire(), if self.search.is_pending() => self.apply_search(text),
                Some(done) = self.in_flight.next(), if !self.in_flight.is_empty() => self.complete(done),
                else => break,
            }
        }
    }

    /// What: Event loop: apply events as they arrive while loads are outstanding.
    ///
    /// Inputs:
    /// - `events`: UI events in arrival order.
    ///
    /// Details:
    /// - Returns once the sender side is closed and all pending work has finished.
    pub async fn run(&mut self, mut events: mpsc::UnboundedReceiver<UiEvent>) {
        let mut open = true;
        while open || self.has_pending_work() {
            tokio::select! {
                event = events.recv(), if open => match event {
                    Some(event) => self.handle_event(event),
                    None => open = false,
                },
                text = self.search.fire(), if self.search.is_pending() => self.apply_search(text),
                Some(done) = self.in_flight.next(), if !self.in_flight.is_empty() => self.complete(done),
                else => break,
            }
        }
        debug!("event loop finished");
    }
}
