//! Controller types

use crate::location::LocationParams;
use crate::page::PageMeta;
use crate::request::{RequestDefaults, DEFAULT_PAGE_SIZE};
use crate::shell::{build_catalog_pagination_ui, CatalogInput, CatalogUiState, ShellUiState};
use crate::types::{Filters, PaginationMode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Callback notified with every state change
pub type StateListener<T> = Arc<dyn Fn(&UiSnapshot<T>) + Send + Sync>;

/// Callback receiving location parameters after each applied fetch
pub type LocationSink = Arc<dyn Fn(&LocationParams) + Send + Sync>;

/// Controller configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerOptions {
    /// Page size used until the user picks another
    pub default_page_size: usize,
    /// Allowed page sizes (empty means any size within bounds)
    #[serde(default)]
    pub page_size_options: Vec<usize>,
    #[serde(default)]
    pub min_page_size: Option<usize>,
    #[serde(default)]
    pub max_page_size: Option<usize>,
    #[serde(default)]
    pub mode: PaginationMode,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            page_size_options: Vec::new(),
            min_page_size: None,
            max_page_size: None,
            mode: PaginationMode::Pager,
        }
    }
}

impl ControllerOptions {
    /// Create options with the given default page size
    pub fn new(default_page_size: usize) -> Self {
        Self {
            default_page_size,
            ..Default::default()
        }
    }

    /// Restrict page sizes to the given options
    #[must_use]
    pub fn with_page_size_options(mut self, options: impl Into<Vec<usize>>) -> Self {
        self.page_size_options = options.into();
        self
    }

    /// Set inclusive page size bounds
    #[must_use]
    pub fn with_bounds(mut self, min: Option<usize>, max: Option<usize>) -> Self {
        self.min_page_size = min;
        self.max_page_size = max;
        self
    }

    /// Set the pagination mode
    #[must_use]
    pub fn with_mode(mut self, mode: PaginationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Request defaults derived from these options
    pub fn request_defaults(&self) -> RequestDefaults {
        RequestDefaults::new(self.default_page_size)
            .with_bounds(self.min_page_size, self.max_page_size)
    }

    /// Check if `size` is an accepted page size option
    ///
    /// Without configured options every size is accepted.
    pub fn accepts_page_size(&self, size: usize) -> bool {
        self.page_size_options.is_empty() || self.page_size_options.contains(&size)
    }
}

/// What happened to a navigation call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchOutcome {
    /// The response was applied to the controller state
    Applied,
    /// A newer call was issued meanwhile; the response was dropped
    Stale,
    /// Nothing to fetch (e.g. load more with no further pages)
    Skipped,
}

impl FetchOutcome {
    /// Check if the response was applied
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Immutable read of the controller state
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiSnapshot<T> {
    /// Render-ready pager state
    pub shell: ShellUiState,
    pub items: Vec<T>,
    pub page_meta: PageMeta,
    pub current_offset: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub page_size: usize,
    pub filters: Filters,
    pub mode: PaginationMode,
    pub is_loading: bool,
    /// Message of the last data source failure, cleared by the next success
    pub error: Option<String>,
    pub generation: u64,
    /// When the visible page was applied
    pub fetched_at: Option<DateTime<Utc>>,
}

impl<T> UiSnapshot<T> {
    /// Check if the last fetch failed
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Derive the public catalog view of this snapshot
    pub fn catalog(&self, active_tab: Option<&str>) -> CatalogUiState {
        build_catalog_pagination_ui(&CatalogInput {
            page_meta: &self.page_meta,
            total_items: self.total_items,
            offset: self.current_offset,
            mode: self.mode,
            active_tab,
            is_loading: self.is_loading,
        })
    }
}
