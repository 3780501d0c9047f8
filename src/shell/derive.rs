//! Shell derivation functions

use super::types::{CatalogInput, CatalogUiState, PageButton, ShellInput, ShellUiState};
use crate::types::PaginationMode;

/// Summary line for the visible slice
///
/// Rendered the same way for empty pages so the position stays visible.
pub fn summary_text(offset: usize, count: usize, total_items: usize) -> String {
    format!(
        "Items {}–{} of {}",
        offset.saturating_add(1),
        offset.saturating_add(count),
        total_items
    )
}

/// Number of pages needed for `total_items`, never less than one
pub fn total_pages_for(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total_items.div_ceil(page_size).max(1)
}

/// 1-based page that starts at or contains `offset`
pub fn current_page_for(offset: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    offset / page_size + 1
}

/// Derive the numeric pager state
///
/// Busy always wins over availability: while loading both buttons are
/// disabled.
pub fn build_pagination_shell_state(input: &ShellInput<'_>) -> ShellUiState {
    let meta = input.page_meta;

    let (prev_disabled, next_disabled) = if input.is_loading {
        (true, true)
    } else {
        (!meta.has_prev, !meta.has_next)
    };

    let page_buttons = match (input.total_pages, input.current_page) {
        (Some(total), Some(current)) => build_page_buttons(total, current),
        _ => Vec::new(),
    };

    let load_more_label = match input.mode {
        Some(PaginationMode::LoadMore) if meta.has_next => {
            let (start, end) = next_slice(input.offset, meta.count, meta.page_size);
            let end = if input.total_items >= start {
                end.min(input.total_items)
            } else {
                end
            };
            Some(format!("Load more ({start}–{end} of {})", input.total_items))
        }
        _ => None,
    };

    ShellUiState {
        summary_text: summary_text(input.offset, meta.count, input.total_items),
        prev_disabled,
        next_disabled,
        is_busy: input.is_loading,
        total_pages: input.total_pages,
        current_page: input.current_page,
        mode: input.mode,
        load_more_label,
        page_buttons,
    }
}

/// Compress the page list for a numeric pager
///
/// Always shows the first and last page and the pages next to the current one.
/// A gap of a single page shows that page; longer gaps collapse into one
/// ellipsis.
pub fn build_page_buttons(total_pages: usize, current_page: usize) -> Vec<PageButton> {
    if total_pages == 0 {
        return Vec::new();
    }
    let current = current_page.clamp(1, total_pages);

    let mut pages = vec![1, current.saturating_sub(1), current, current + 1, total_pages];
    pages.retain(|p| (1..=total_pages).contains(p));
    pages.sort_unstable();
    pages.dedup();

    let button = |number: usize| PageButton::Page {
        number,
        current: number == current,
    };

    let mut buttons = Vec::with_capacity(pages.len() + 2);
    let mut prev: Option<usize> = None;
    for page in pages {
        if let Some(prev) = prev {
            match page - prev {
                1 => {}
                2 => buttons.push(button(prev + 1)),
                _ => buttons.push(PageButton::Ellipsis),
            }
        }
        buttons.push(button(page));
        prev = Some(page);
    }
    buttons
}

/// Derive the public catalog state
///
/// `active_tab` never changes the result.
pub fn build_catalog_pagination_ui(input: &CatalogInput<'_>) -> CatalogUiState {
    let meta = input.page_meta;
    let has_more = meta.has_next;

    let load_more_label = if input.mode.is_load_more() && has_more {
        let (start, end) = next_slice(input.offset, meta.count, meta.page_size);
        Some(format!(
            "Load more books ({start}–{end} of {})",
            input.total_items
        ))
    } else {
        None
    };

    CatalogUiState {
        summary_text: summary_text(input.offset, meta.count, input.total_items),
        mode: input.mode,
        has_more,
        load_more_label,
    }
}

/// 1-based bounds of the full page a load-more would fetch
fn next_slice(offset: usize, count: usize, page_size: usize) -> (usize, usize) {
    let shown = offset.saturating_add(count);
    (shown.saturating_add(1), shown.saturating_add(page_size))
}
