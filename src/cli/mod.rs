//! CLI module
//!
//! Command-line front end standing in for the list and detail screens.
//!
//! # Commands
//!
//! - `list` - Load pages through the pagination controller
//! - `detail` - Show one character

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
