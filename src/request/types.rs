//! Request types
//!
//! Inputs and outputs of the request builder.

use crate::types::{CursorToken, CursorType, Cursors, Direction};
use serde::{Deserialize, Serialize};

/// Page size used when nothing else is configured
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// A canonical page request handed to a data source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationRequest {
    /// Number of items to fetch, always within the configured bounds
    pub page_size: usize,
    /// Direction of the page turn
    pub direction: Direction,
    /// Cursor to continue from, if any
    pub cursor: Option<CursorToken>,
    /// Which end of the next slice `cursor` marks
    pub cursor_type: CursorType,
}

impl PaginationRequest {
    /// Request for the first page with the given size
    pub fn first_page(page_size: usize) -> Self {
        Self {
            page_size,
            direction: Direction::Forward,
            cursor: None,
            cursor_type: CursorType::Start,
        }
    }

    /// Check if this request restarts from the beginning
    pub fn is_restart(&self) -> bool {
        self.cursor.is_none()
    }
}

/// Defaults and bounds applied while building a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestDefaults {
    /// Page size used when the request omits one
    pub page_size: usize,
    /// Inclusive lower bound
    #[serde(default)]
    pub min_page_size: Option<usize>,
    /// Inclusive upper bound
    #[serde(default)]
    pub max_page_size: Option<usize>,
}

impl Default for RequestDefaults {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            min_page_size: None,
            max_page_size: None,
        }
    }
}

impl RequestDefaults {
    /// Create defaults with the given page size and no bounds
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            ..Default::default()
        }
    }

    /// Set the inclusive page size bounds
    #[must_use]
    pub fn with_bounds(mut self, min: Option<usize>, max: Option<usize>) -> Self {
        self.min_page_size = min;
        self.max_page_size = max;
        self
    }
}

/// A desired page turn, before normalization
#[derive(Debug, Clone, Default)]
pub struct RequestInput {
    /// Requested page size (`None` uses the default)
    pub page_size: Option<usize>,
    /// Requested direction (`None` means forward)
    pub direction: Option<Direction>,
    /// Cursors of the page being turned from
    pub cursors: Cursors,
}

impl RequestInput {
    /// Input for a forward turn from the given cursors
    pub fn forward(cursors: Cursors) -> Self {
        Self {
            direction: Some(Direction::Forward),
            cursors,
            ..Default::default()
        }
    }

    /// Input for a backward turn from the given cursors
    pub fn backward(cursors: Cursors) -> Self {
        Self {
            direction: Some(Direction::Backward),
            cursors,
            ..Default::default()
        }
    }

    /// Set the requested page size
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }
}
