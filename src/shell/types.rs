//! UI shell types

use crate::page::PageMeta;
use crate::types::PaginationMode;
use serde::{Deserialize, Serialize};

/// One entry of the numeric pager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PageButton {
    /// A page number button
    Page { number: usize, current: bool },
    /// A collapsed run of pages
    Ellipsis,
}

impl PageButton {
    /// Page number, if this is a page button
    pub fn number(&self) -> Option<usize> {
        match self {
            Self::Page { number, .. } => Some(*number),
            Self::Ellipsis => None,
        }
    }

    /// Check if this button marks the current page
    pub fn is_current(&self) -> bool {
        matches!(self, Self::Page { current: true, .. })
    }
}

/// Inputs to the numeric pager derivation
#[derive(Debug, Clone, Copy)]
pub struct ShellInput<'a> {
    pub page_meta: &'a PageMeta,
    pub total_items: usize,
    pub offset: usize,
    pub is_loading: bool,
    /// `None` leaves the mode unset in the output
    pub mode: Option<PaginationMode>,
    pub total_pages: Option<usize>,
    pub current_page: Option<usize>,
}

impl<'a> ShellInput<'a> {
    /// Input with no pager extension and no mode
    pub fn new(
        page_meta: &'a PageMeta,
        total_items: usize,
        offset: usize,
        is_loading: bool,
    ) -> Self {
        Self {
            page_meta,
            total_items,
            offset,
            is_loading,
            mode: None,
            total_pages: None,
            current_page: None,
        }
    }

    /// Request page buttons for the given position
    #[must_use]
    pub fn with_pager(mut self, total_pages: usize, current_page: usize) -> Self {
        self.total_pages = Some(total_pages);
        self.current_page = Some(current_page);
        self
    }

    /// Set the pagination mode
    #[must_use]
    pub fn with_mode(mut self, mode: PaginationMode) -> Self {
        self.mode = Some(mode);
        self
    }
}

/// Render-ready state of a numeric pager
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellUiState {
    pub summary_text: String,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub is_busy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_page: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<PaginationMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_more_label: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub page_buttons: Vec<PageButton>,
}

/// Inputs to the catalog derivation
#[derive(Debug, Clone, Copy)]
pub struct CatalogInput<'a> {
    pub page_meta: &'a PageMeta,
    pub total_items: usize,
    pub offset: usize,
    pub mode: PaginationMode,
    /// Accepted for per-tab customization; does not affect the output
    pub active_tab: Option<&'a str>,
    /// Accepted for parity with `ShellInput`; the catalog has no busy flag
    pub is_loading: bool,
}

/// Render-ready state of the public catalog list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogUiState {
    pub summary_text: String,
    pub mode: PaginationMode,
    pub has_more: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_more_label: Option<String>,
}
