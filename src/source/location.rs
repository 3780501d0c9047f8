//! Location adapters

use crate::location::{parse_pagination_from_location, DecodedLocation, LocationParams};
use std::sync::{Mutex, PoisonError};

/// Access to the location (URL) store
pub trait LocationAdapter: Send + Sync {
    /// Decode the current location
    ///
    /// `total_items` is the last known total, `None` before the first fetch.
    fn parse_location(&self, total_items: Option<usize>, default_page_size: usize)
        -> DecodedLocation;

    /// Write the location after a completed fetch
    fn write_location(&self, params: &LocationParams);
}

/// Location store holding a query string in memory
#[derive(Debug, Default)]
pub struct QueryLocation {
    search: Mutex<String>,
    writes: Mutex<Vec<String>>,
}

impl QueryLocation {
    /// Create a store with an initial query string (`?` optional)
    pub fn new(search: impl Into<String>) -> Self {
        Self {
            search: Mutex::new(search.into()),
            writes: Mutex::new(Vec::new()),
        }
    }

    /// Current query string
    pub fn search(&self) -> String {
        self.search
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Every query string written so far, oldest first
    pub fn writes(&self) -> Vec<String> {
        self.writes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl LocationAdapter for QueryLocation {
    fn parse_location(
        &self,
        total_items: Option<usize>,
        default_page_size: usize,
    ) -> DecodedLocation {
        // Unknown totals leave the page unclamped; the controller re-targets
        // after the first fetch reports a total.
        let total = total_items.unwrap_or(usize::MAX);
        parse_pagination_from_location(&self.search(), total, default_page_size)
    }

    fn write_location(&self, params: &LocationParams) {
        let search = format!("?{}", params.to_query_string());
        self.writes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(search.clone());
        *self.search.lock().unwrap_or_else(PoisonError::into_inner) = search;
    }
}
