#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::needless_pass_by_value)]

//! # Character Explorer
//!
//! Browse the public character catalog page by page, filter by status and
//! look up individual characters.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use character_explorer::{ExplorerConfig, PaginationController, Result};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = ExplorerConfig::default().build_client()?;
//!     let mut controller = PaginationController::new(Arc::new(client));
//!
//!     controller.apply_filter("Alive");
//!     controller.process_completion().await;
//!     controller.load_next_and_wait().await;
//!
//!     for character in controller.items() {
//!         println!("{} ({})", character.name, character.status);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  Presentation (CLI, observers, events)        │
//! └──────────────────────┬───────────────────────┘
//!                        │ load_next / apply_filter
//! ┌──────────────────────┴───────────────────────┐
//! │  PaginationController  (Idle ⇄ Fetching)      │
//! └──────────────────────┬───────────────────────┘
//!                        │ PageSource::fetch_page
//! ┌──────────────────────┴───────────────────────┐
//! │  FetchClient  (validate, classify, decode)    │
//! └──────────────────────┬───────────────────────┘
//!                        │ Transport::get
//! ┌──────────────────────┴───────────────────────┐
//! │  HttpClient  (reqwest, timeout, rate limit)   │
//! └──────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Catalog data model
pub mod types;

/// Transport and reqwest HTTP client
pub mod http;

/// Catalog fetch client
pub mod fetch;

/// Paginated-fetch state machine
pub mod pagination;

/// Configuration loading
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::ExplorerConfig;
pub use error::{Error, FetchError, Result};
pub use fetch::{Endpoint, FetchClient, PageSource};
pub use pagination::{ControllerEvent, Outcome, PaginationController, PaginationObserver};
pub use types::{
    Character, CharacterDetail, CharacterPage, CharacterStatus, LocationRef, PageInfo,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
