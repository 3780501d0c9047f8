//! UI shell module
//!
//! Turns page state plus totals into render-ready flags and text.
//!
//! # Overview
//!
//! Two flavors are derived:
//! - `ShellUiState` - numeric pager (admin lists), with optional load-more label
//! - `CatalogUiState` - lean summary/load-more state (public catalog)
//!
//! Every function here is pure; the controller composes them.

mod derive;
mod types;

pub use derive::{
    build_catalog_pagination_ui, build_page_buttons, build_pagination_shell_state,
    current_page_for, summary_text, total_pages_for,
};
pub use types::{CatalogInput, CatalogUiState, PageButton, ShellInput, ShellUiState};
