//! Data source and location adapters
//!
//! The controller talks to storage and to the URL only through the traits in
//! this module.
//!
//! # Overview
//!
//! - `DataSource` - fetches one page for a `PaginationRequest`
//! - `FnSource` - adapts a closure returning a boxed future
//! - `ArraySource` - in-memory slicing of a vector, cursor = item index
//! - `LocationAdapter` - reads and writes the location query
//! - `QueryLocation` - in-memory query string store

mod array;
mod location;
mod types;

pub use array::ArraySource;
pub use location::{LocationAdapter, QueryLocation};
pub use types::{DataSource, FetchArgs, FnSource, SourcePage};
