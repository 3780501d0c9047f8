//! Request builder module
//!
//! Normalizes a desired page turn into a canonical, bounded request.
//!
//! # Overview
//!
//! The request module provides:
//! - `PaginationRequest` - What a data source receives for one fetch
//! - `RequestDefaults` - Default page size and optional bounds
//! - `create_pagination_request` - Pure normalization, never fails

mod builder;
mod types;

pub use builder::{create_pagination_request, resolve_page_size};
pub use types::{PaginationRequest, RequestDefaults, RequestInput, DEFAULT_PAGE_SIZE};
