//! Page state types

use crate::types::Cursors;
use serde::{Deserialize, Serialize};

/// Metadata describing one fetched page, independent of its items
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Requested page size
    pub page_size: usize,
    /// Number of items actually returned
    pub count: usize,
    /// More items after this page
    pub has_next: bool,
    /// Items before this page
    pub has_prev: bool,
    /// Leading and trailing cursors
    pub cursors: Cursors,
}

impl PageMeta {
    /// Empty metadata for a list that has not been fetched yet
    pub fn empty(page_size: usize) -> Self {
        Self {
            page_size,
            ..Default::default()
        }
    }
}

/// A normalized page: items plus metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageState<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

impl<T> PageState<T> {
    /// Number of items on the page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the page has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Raw page data as produced by a data source
#[derive(Debug, Clone)]
pub struct PageInput<T> {
    pub items: Vec<T>,
    pub page_size: usize,
    pub has_next: bool,
    pub has_prev: bool,
    pub cursors: Cursors,
}

/// Wrap fetched items and cursor metadata into canonical page state
///
/// `meta.count` always equals the number of items; every other field is
/// copied through unchanged.
pub fn build_pagination_state<T>(input: PageInput<T>) -> PageState<T> {
    let count = input.items.len();
    PageState {
        items: input.items,
        meta: PageMeta {
            page_size: input.page_size,
            count,
            has_next: input.has_next,
            has_prev: input.has_prev,
            cursors: input.cursors,
        },
    }
}
