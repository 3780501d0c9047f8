//! Page state module
//!
//! Wraps a fetched page (items plus cursor/position metadata) into canonical
//! page state. Cursors are passed through as given; the data source owns their
//! correctness.

mod types;

pub use types::{build_pagination_state, PageInput, PageMeta, PageState};

#[cfg(test)]
mod tests;
