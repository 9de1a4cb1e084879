//! Pagination controller
//!
//! Coordinates incremental page loading for an infinite-scroll list:
//!
//! ```text
//!            load_next / apply_filter
//!   ┌──────┐ ────────────────────────▶ ┌──────────┐
//!   │ Idle │                           │ Fetching │
//!   └──────┘ ◀──────────────────────── └──────────┘
//!            completion (ok or error)
//! ```
//!
//! Fetches run on spawned tokio tasks and post their completion back over a
//! channel. Only the owner applies completions, so all state mutation stays
//! on one task.

use super::types::{FetchPhase, NoopObserver, Outcome, PaginationObserver, PaginationState};
use crate::error::FetchError;
use crate::fetch::PageSource;
use crate::types::{Character, CharacterPage};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Completion posted by a background fetch
#[derive(Debug)]
struct Completion {
    generation: u64,
    page: u32,
    result: Result<CharacterPage, FetchError>,
}

/// Paginated-fetch state machine
pub struct PaginationController {
    source: Arc<dyn PageSource>,
    state: PaginationState,
    observer: Box<dyn PaginationObserver>,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions_rx: mpsc::UnboundedReceiver<Completion>,
}

impl PaginationController {
    /// Create a controller over `source` with no observer
    pub fn new(source: Arc<dyn PageSource>) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            source,
            state: PaginationState::new(),
            observer: Box::new(NoopObserver),
            completions_tx,
            completions_rx,
        }
    }

    /// Attach the observer that receives notifications
    #[must_use]
    pub fn with_observer(mut self, observer: impl PaginationObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    /// Replace the observer
    pub fn set_observer(&mut self, observer: impl PaginationObserver + 'static) {
        self.observer = Box::new(observer);
    }

    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    /// Accumulated characters in arrival order
    pub fn items(&self) -> &[Character] {
        &self.state.items
    }

    /// Page number the next fetch will request
    pub fn page(&self) -> u32 {
        self.state.page
    }

    pub fn filter(&self) -> Option<&str> {
        self.state.filter.as_deref()
    }

    pub fn is_fetching(&self) -> bool {
        self.state.is_fetching()
    }

    /// True whenever no fetch is in flight.
    ///
    /// This is a liveness signal, not an end-of-catalog signal; see
    /// [`reached_end`](Self::reached_end) for the latter.
    pub fn has_more(&self) -> bool {
        !self.state.is_fetching()
    }

    /// Whether the last successful page reported no next page
    pub fn reached_end(&self) -> bool {
        self.state
            .last_info
            .as_ref()
            .is_some_and(|info| !info.has_next())
    }

    /// Request the next page. Returns `false` (and does nothing) while a
    /// fetch is already in flight.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn load_next(&mut self) -> bool {
        if self.state.is_fetching() {
            debug!("load_next ignored, fetch already in flight");
            return false;
        }
        self.dispatch();
        true
    }

    /// Switch to `status` (lower-cased), reset to page 1 with an empty
    /// accumulator and fetch immediately, even if a fetch for the previous
    /// filter is still running. That older fetch becomes stale.
    pub fn apply_filter(&mut self, status: &str) {
        self.restart(Some(status.to_lowercase()));
    }

    /// Drop the filter and reload from page 1
    pub fn clear_filter(&mut self) {
        self.restart(None);
    }

    /// Wait for the current fetch to complete and apply it.
    ///
    /// Stale completions received on the way are discarded. Returns `None`
    /// when nothing is in flight.
    pub async fn process_completion(&mut self) -> Option<Outcome> {
        while self.state.is_fetching() {
            let completion = self.completions_rx.recv().await?;
            if let Some(outcome) = self.apply(completion) {
                return Some(outcome);
            }
        }
        None
    }

    /// Apply every completion that has already arrived, without waiting
    pub fn drain_completions(&mut self) -> Vec<Outcome> {
        let mut outcomes = Vec::new();
        while let Ok(completion) = self.completions_rx.try_recv() {
            outcomes.extend(self.apply(completion));
        }
        outcomes
    }

    /// `load_next` followed by `process_completion`
    pub async fn load_next_and_wait(&mut self) -> Option<Outcome> {
        if self.load_next() {
            self.process_completion().await
        } else {
            None
        }
    }

    fn restart(&mut self, filter: Option<String>) {
        if self.state.is_fetching() {
            debug!(
                "Filter changed while page {} was in flight, its result will be discarded",
                self.state.page
            );
        }
        self.state.reset(filter);
        self.dispatch();
    }

    fn dispatch(&mut self) {
        self.state.phase = FetchPhase::Fetching;
        self.observer.on_loading_changed(true);

        let source = Arc::clone(&self.source);
        let tx = self.completions_tx.clone();
        let generation = self.state.generation;
        let page = self.state.page;
        let filter = self.state.filter.clone();

        debug!(
            "Dispatching page {} (filter: {:?}, generation {})",
            page, filter, generation
        );

        tokio::spawn(async move {
            let result = source.fetch_page(page, filter.as_deref()).await;
            // The receiver lives as long as the controller
            let _ = tx.send(Completion {
                generation,
                page,
                result,
            });
        });
    }

    fn apply(&mut self, completion: Completion) -> Option<Outcome> {
        if completion.generation != self.state.generation {
            warn!(
                "Discarding stale result for page {} (generation {}, current {})",
                completion.page, completion.generation, self.state.generation
            );
            self.state.stale_discarded += 1;
            return None;
        }

        self.state.phase = FetchPhase::Idle;

        let outcome = match completion.result {
            Ok(page) => {
                let count = page.results.len();
                self.state.record_page(page.info, page.results);
                debug!(
                    "Page {} fetched: {} characters, {} accumulated",
                    completion.page,
                    count,
                    self.state.items.len()
                );
                self.observer.on_loading_changed(false);
                self.observer.on_items_fetched();
                Outcome::Fetched(count)
            }
            Err(e) => {
                warn!("Page {} failed: {}", completion.page, e);
                self.observer.on_loading_changed(false);
                self.observer.on_error(&e.to_string());
                Outcome::Failed(e)
            }
        };

        Some(outcome)
    }
}

impl std::fmt::Debug for PaginationController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaginationController")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
