//! Location codec module
//!
//! Bidirectional mapping between canonical page state and a URL query string.
//!
//! # Overview
//!
//! - `build_pagination_location_params` - page state to `LocationParams`
//! - `parse_pagination_from_location` - query string to `DecodedLocation`,
//!   clamping deep links that point past the last page
//!
//! Reserved query keys are `page`, `pageSize` and `offset`; every other key is
//! a caller-defined filter.

mod codec;
mod types;

pub use codec::{build_pagination_location_params, parse_pagination_from_location};
pub use types::{DecodedLocation, LocationParams, RESERVED_KEYS};

#[cfg(test)]
mod tests;
