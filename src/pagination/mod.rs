//! Pagination module
//!
//! The paginated-fetch state machine behind the character list.
//!
//! # Overview
//!
//! - `PaginationController` - owns the cursor, suppresses duplicate
//!   fetches, resets on filter change
//! - `PaginationState` - page number, filter, in-flight flag, accumulator
//! - `PaginationObserver` / `ControllerEvent` - loading, fetched and error
//!   notifications for the presentation layer

mod controller;
mod types;

pub use controller::PaginationController;
pub use types::{
    ChannelObserver, ControllerEvent, FetchPhase, NoopObserver, Outcome, PaginationObserver,
    PaginationState,
};
