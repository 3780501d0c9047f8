//! CLI module
//!
//! Command-line interface for the pagination primitives.
//!
//! # Commands
//!
//! - `request` - Build a normalized pagination request
//! - `location` - Decode a location query string
//! - `buttons` - Print the page-button list
//! - `browse` - Drive a controller over a JSON array

mod commands;
mod runner;

pub use commands::{Cli, Commands, DirectionArg, OutputFormat};
pub use runner::Runner;
