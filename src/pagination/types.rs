//! Pagination types
//!
//! State owned by the controller plus the notification vocabulary it speaks
//! to the presentation layer.

use crate::error::FetchError;
use crate::types::{Character, PageInfo};
use tokio::sync::mpsc;

/// Whether a fetch is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPhase {
    #[default]
    Idle,
    Fetching,
}

/// Cursor state of one controller
#[derive(Debug, Clone)]
pub struct PaginationState {
    /// 1-based page to request next
    pub page: u32,
    /// Active lower-cased status filter, `None` when unfiltered
    pub filter: Option<String>,
    /// In-flight flag
    pub phase: FetchPhase,
    /// Every character fetched so far, in arrival order
    pub items: Vec<Character>,
    /// Metadata of the last successful page under the current filter
    pub last_info: Option<PageInfo>,
    /// Bumped on every filter change; tags dispatched fetches
    pub generation: u64,
    /// Completions dropped because their generation was superseded
    pub stale_discarded: u64,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page: 1,
            filter: None,
            phase: FetchPhase::Idle,
            items: Vec::new(),
            last_info: None,
            generation: 0,
            stale_discarded: 0,
        }
    }
}

impl PaginationState {
    /// Create a fresh state: page 1, no filter, empty, idle
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_fetching(&self) -> bool {
        self.phase == FetchPhase::Fetching
    }

    /// Switch filter and start over from page 1
    pub fn reset(&mut self, filter: Option<String>) {
        self.filter = filter;
        self.page = 1;
        self.items.clear();
        self.last_info = None;
        self.generation += 1;
    }

    /// Record a successful page and advance the cursor by one
    pub fn record_page(&mut self, info: PageInfo, items: Vec<Character>) {
        self.items.extend(items);
        self.last_info = Some(info);
        self.page += 1;
    }
}

/// Result of an applied completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A page arrived with this many characters
    Fetched(usize),
    /// The fetch failed; cursor and accumulator are untouched
    Failed(FetchError),
}

impl Outcome {
    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }
}

/// Notification emitted by the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerEvent {
    LoadingChanged(bool),
    /// New characters are in the accumulator
    ItemsFetched,
    /// Human-readable failure message
    Error(String),
}

/// Receiver of controller notifications
///
/// Called on the owner task after the controller is already back to idle, so
/// implementations may trigger the next load right away.
pub trait PaginationObserver: Send {
    fn on_loading_changed(&mut self, _loading: bool) {}

    fn on_items_fetched(&mut self) {}

    fn on_error(&mut self, _message: &str) {}
}

/// Observer that ignores everything
#[derive(Debug, Default)]
pub struct NoopObserver;

impl PaginationObserver for NoopObserver {}

/// Observer that forwards notifications as `ControllerEvent`s
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    tx: mpsc::UnboundedSender<ControllerEvent>,
}

impl ChannelObserver {
    /// Create an observer and the receiving end of its channel
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<ControllerEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    fn emit(&self, event: ControllerEvent) {
        // A dropped receiver just means nobody is listening any more
        let _ = self.tx.send(event);
    }
}

impl PaginationObserver for ChannelObserver {
    fn on_loading_changed(&mut self, loading: bool) {
        self.emit(ControllerEvent::LoadingChanged(loading));
    }

    fn on_items_fetched(&mut self) {
        self.emit(ControllerEvent::ItemsFetched);
    }

    fn on_error(&mut self, message: &str) {
        self.emit(ControllerEvent::Error(message.to_string()));
    }
}
