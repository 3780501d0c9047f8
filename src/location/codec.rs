//! Location encoding and decoding

use super::types::{DecodedLocation, LocationParams, RESERVED_KEYS};
use crate::page::PageMeta;
use crate::shell::{current_page_for, total_pages_for};
use crate::types::{FilterValue, Filters};
use url::form_urlencoded;

/// Build the location parameters for a page position
pub fn build_pagination_location_params(
    page_meta: &PageMeta,
    offset: usize,
    filters: &Filters,
) -> LocationParams {
    LocationParams {
        page: current_page_for(offset, page_meta.page_size),
        page_size: page_meta.page_size,
        offset,
        filters: filters
            .iter()
            .filter(|(key, _)| !RESERVED_KEYS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect(),
    }
}

/// Decode a page position from a query string
///
/// Never fails: malformed numbers fall back to defaults, and a page beyond
/// `ceil(total_items / page_size)` is clamped down to the last valid page.
/// The offset is always recomputed from the (clamped) page; a raw `offset`
/// value is only used to derive the page when `page` is absent.
pub fn parse_pagination_from_location(
    search: &str,
    total_items: usize,
    default_page_size: usize,
) -> DecodedLocation {
    let query = search.strip_prefix('?').unwrap_or(search);

    let mut raw_page = None;
    let mut raw_page_size = None;
    let mut raw_offset = None;
    let mut filters = Filters::new();

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            "page" => raw_page = Some(value.into_owned()),
            "pageSize" => raw_page_size = Some(value.into_owned()),
            "offset" => raw_offset = Some(value.into_owned()),
            _ => {
                filters.insert(key.into_owned(), FilterValue::Text(value.into_owned()));
            }
        }
    }

    let page_size = parse_positive(raw_page_size.as_deref())
        .or_else(|| (default_page_size > 0).then_some(default_page_size))
        .unwrap_or(crate::request::DEFAULT_PAGE_SIZE);

    let requested_page = parse_positive(raw_page.as_deref()).unwrap_or_else(|| {
        raw_offset
            .as_deref()
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .map_or(1, |offset| current_page_for(offset, page_size))
    });

    let max_page = total_pages_for(total_items, page_size);
    let page = requested_page.min(max_page);

    DecodedLocation {
        page,
        page_size,
        offset: (page - 1).saturating_mul(page_size),
        filters,
    }
}

fn parse_positive(raw: Option<&str>) -> Option<usize> {
    raw.and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|value| *value > 0)
}
