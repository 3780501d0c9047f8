//! Pagination controller module
//!
//! The stateful orchestrator that composes the request builder, page
//! normalizer, shell derivation and location codec around an injected data
//! source and location adapter.
//!
//! # Overview
//!
//! - `PaginationController` - owns the only mutable paging state
//! - `ControllerOptions` - page size defaults, allowed sizes and mode
//! - `UiSnapshot` - immutable read of the current state
//! - `FetchOutcome` - whether a navigation call was applied or dropped
//!
//! Every navigation call takes a new generation when it is made. A response
//! is applied only if its generation is still the latest when it resolves, so
//! the last-issued call wins regardless of resolution order.

mod engine;
mod types;

pub use engine::PaginationController;
pub use types::{ControllerOptions, FetchOutcome, LocationSink, StateListener, UiSnapshot};
