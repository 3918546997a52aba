//! Quiet-window timer used to coalesce search keystrokes.

use tokio::time::{Duration, Instant, sleep_until};

/// What: Cancellable quiet-window timer holding the latest pushed value.
///
/// Details:
/// - Each [`push`](Self::push) replaces the pending value and restarts the window.
/// - [`fire`](Self::fire) resolves once the window elapses without another push.
/// - With nothing pending, `fire` never resolves, so it can sit in a `select!`.
#[derive(Debug)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    /// Debouncer with the given quiet window.
    #[must_use]
    pub const fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Replace the pending value and restart the window.
    pub fn push(&mut self, value: T) {
        self.pending = Some((value, Instant::now() + self.window));
    }

    /// Drop the pending value, returning it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(v, _)| v)
    }

    /// Whether a value is waiting for the window to elapse.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Instant at which the pending value fires.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, d)| *d)
    }

    /// What: Wait for the pending value's window to elapse and take it.
    ///
    /// Output:
    /// - The most recently pushed value.
    ///
    /// Details:
    /// - Cancel-safe: dropping the future before it resolves keeps the value pending.
    pub async fn fire(&mut self) -> T {
        let Some(deadline) = self.deadline() else {
            return std::future::pending().await;
        };
        sleep_until(deadline).await;
        match self.pending.take() {
            Some((value, _)) => value,
            None => std::future::pending().await,
        }
    }
}
