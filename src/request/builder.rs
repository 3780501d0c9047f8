//! Request normalization

use super::types::{PaginationRequest, RequestDefaults, RequestInput, DEFAULT_PAGE_SIZE};
use crate::types::{CursorType, Direction};

/// Build a canonical request from a desired page turn
///
/// Forward turns continue from the trailing cursor of the current page,
/// backward turns from its leading cursor. A missing cursor restarts from the
/// beginning.
pub fn create_pagination_request(
    input: &RequestInput,
    defaults: &RequestDefaults,
) -> PaginationRequest {
    let page_size = resolve_page_size(input.page_size, defaults);
    let direction = input.direction.unwrap_or_default();

    let (cursor, cursor_type) = match direction {
        Direction::Forward => (input.cursors.end.clone(), CursorType::Start),
        Direction::Backward => (input.cursors.start.clone(), CursorType::End),
    };

    PaginationRequest {
        page_size,
        direction,
        cursor,
        cursor_type,
    }
}

/// Resolve a requested page size against defaults and bounds
///
/// The result is always positive. Bounds are applied to explicit requests
/// as well as to the default.
pub fn resolve_page_size(requested: Option<usize>, defaults: &RequestDefaults) -> usize {
    let fallback = if defaults.page_size == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        defaults.page_size
    };

    let mut size = requested.unwrap_or(fallback);
    if let Some(min) = defaults.min_page_size {
        size = size.max(min);
    }
    if let Some(max) = defaults.max_page_size {
        size = size.min(max);
    }

    if size == 0 {
        fallback
    } else {
        size
    }
}
