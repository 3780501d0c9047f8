// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # pagekit
//!
//! Cursor pagination primitives and an async list controller.
//!
//! ## Features
//!
//! - **Request building**: Normalize page size, direction and cursor into a request
//! - **Page state**: Describe a fetched page with cursors and has-next/prev flags
//! - **Pager shell**: Derive summary text, button enablement and page buttons
//! - **Location codec**: Encode and decode page position and filters as a query string
//! - **Controller**: Drive one list with last-issued-wins async fetches
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pagekit::{ArraySource, ControllerOptions, PaginationController, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let books: Vec<String> = load_books();
//!     let controller = PaginationController::new(
//!         ArraySource::new(books),
//!         ControllerOptions::new(20).with_page_size_options([10, 20, 50]),
//!     );
//!
//!     controller.sync_from_location().await?;
//!     controller.go_next().await?;
//!
//!     let ui = controller.get_ui_state();
//!     println!("{}", ui.shell.summary_text);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    PaginationController                      │
//! │  sync_from_location  go_next/prev  go_to_page  set_filters   │
//! │  set_page_size  load_more  refresh  get_ui_state             │
//! └──────────────────────────────────────────────────────────────┘
//!                               │
//! ┌───────────┬───────────┬─────┴──────┬────────────┬───────────┐
//! │  Request  │   Page    │   Shell    │  Location  │  Source   │
//! ├───────────┼───────────┼────────────┼────────────┼───────────┤
//! │ Page size │ Meta      │ Summary    │ Encode     │ Trait     │
//! │ Cursor    │ Cursors   │ Buttons    │ Decode     │ Array     │
//! │ Direction │ Flags     │ Load more  │ Clamp      │ Location  │
//! └───────────┴───────────┴────────────┴────────────┴───────────┘
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

/// Common types and type aliases
pub mod types;

/// Pagination request normalization
pub mod request;

/// Page state
pub mod page;

/// Pager shell derivation
pub mod shell;

/// Location (query string) codec
pub mod location;

/// Data sources and location adapters
pub mod source;

/// List controller
pub mod controller;

/// YAML list configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use config::{load_config, load_config_from_str, ListConfig, ListsConfig};
pub use controller::{ControllerOptions, FetchOutcome, PaginationController, UiSnapshot};
pub use location::{build_pagination_location_params, parse_pagination_from_location};
pub use page::{build_pagination_state, PageMeta, PageState};
pub use request::{create_pagination_request, PaginationRequest};
pub use shell::{build_catalog_pagination_ui, build_pagination_shell_state};
pub use source::{ArraySource, DataSource, FetchArgs, FnSource, QueryLocation, SourcePage};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
