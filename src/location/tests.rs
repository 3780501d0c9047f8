//! Tests for location module

use super::*;
use crate::page::PageMeta;
use crate::types::{filters, FilterValue, Filters};
use test_case::test_case;

fn meta(page_size: usize) -> PageMeta {
    PageMeta::empty(page_size)
}

// ============================================================================
// Encoding
// ============================================================================

#[test]
fn test_build_params() {
    let params = build_pagination_location_params(
        &meta(20),
        40,
        &filters([("search", "rare"), ("category", "maps")]),
    );

    pretty_assertions::assert_eq!(params.page, 3);
    pretty_assertions::assert_eq!(params.page_size, 20);
    pretty_assertions::assert_eq!(params.offset, 40);
    pretty_assertions::assert_eq!(
        params.filters.get("search"),
        Some(&FilterValue::from("rare"))
    );
    pretty_assertions::assert_eq!(params.filters.len(), 2);
}

#[test]
fn test_build_params_drops_reserved_filter_keys() {
    let params = build_pagination_location_params(
        &meta(10),
        0,
        &filters([("page", "99"), ("status", "sold")]),
    );
    pretty_assertions::assert_eq!(params.page, 1);
    pretty_assertions::assert_eq!(params.filters, filters([("status", "sold")]));
}

#[test]
fn test_query_string_order_and_encoding() {
    let params = build_pagination_location_params(
        &meta(20),
        20,
        &filters([
            ("search", FilterValue::from("first edition")),
            ("supplierId", FilterValue::Int(7)),
        ]),
    );
    pretty_assertions::assert_eq!(
        params.to_query_string(),
        "page=2&pageSize=20&offset=20&search=first+edition&supplierId=7"
    );
}

#[test]
fn test_params_serialize_flat() {
    let active = filters([("status", "available")]);
    let params = build_pagination_location_params(&meta(20), 0, &active);
    let json = serde_json::to_value(&params).unwrap();
    pretty_assertions::assert_eq!(
        json,
        serde_json::json!({"page": 1, "pageSize": 20, "offset": 0, "status": "available"})
    );
}

// ============================================================================
// Decoding
// ============================================================================

#[test]
fn test_deep_link_is_clamped() {
    let decoded = parse_pagination_from_location("?page=10&pageSize=20&offset=180", 132, 20);
    pretty_assertions::assert_eq!(
        decoded,
        DecodedLocation {
            page: 7,
            page_size: 20,
            offset: 120,
            filters: Filters::new(),
        }
    );
}

#[test]
fn test_disagreeing_offset_is_ignored() {
    let decoded = parse_pagination_from_location("page=2&pageSize=10&offset=55", 100, 20);
    pretty_assertions::assert_eq!(decoded.page, 2);
    pretty_assertions::assert_eq!(decoded.offset, 10);
}

#[test]
fn test_offset_only_derives_page() {
    let decoded = parse_pagination_from_location("?pageSize=10&offset=35", 100, 20);
    pretty_assertions::assert_eq!(decoded.page, 4);
    pretty_assertions::assert_eq!(decoded.offset, 30);
}

#[test]
fn test_empty_search_uses_defaults() {
    let decoded = parse_pagination_from_location("", 0, 25);
    pretty_assertions::assert_eq!(decoded, DecodedLocation::first_page(25));
}

#[test_case("?pageSize=abc", 20 ; "not a number")]
#[test_case("?pageSize=0", 20 ; "zero")]
#[test_case("?pageSize=-5", 20 ; "negative")]
#[test_case("?pageSize=50", 50 ; "valid")]
fn test_page_size_parsing(search: &str, expected: usize) {
    let decoded = parse_pagination_from_location(search, 500, 20);
    pretty_assertions::assert_eq!(decoded.page_size, expected);
}

#[test_case("?page=0" => 1 ; "zero page")]
#[test_case("?page=-2" => 1 ; "negative page")]
#[test_case("?page=two" => 1 ; "garbage page")]
#[test_case("?page=3" => 3 ; "valid page")]
fn test_page_parsing(search: &str) -> usize {
    parse_pagination_from_location(search, 100, 20).page
}

#[test]
fn test_empty_total_clamps_to_first_page() {
    let decoded = parse_pagination_from_location("?page=4&pageSize=20", 0, 20);
    pretty_assertions::assert_eq!(decoded.page, 1);
    pretty_assertions::assert_eq!(decoded.offset, 0);
}

#[test]
fn test_filters_collected_verbatim() {
    let decoded = parse_pagination_from_location(
        "?page=1&search=first%20edition&category=maps&supplierId=12&zip=0042",
        10,
        20,
    );

    pretty_assertions::assert_eq!(
        decoded.filters,
        filters([
            ("category", FilterValue::from("maps")),
            ("search", FilterValue::from("first edition")),
            ("supplierId", FilterValue::from("12")),
            ("zip", FilterValue::from("0042")),
        ])
    );
}

// ============================================================================
// Round Trip
// ============================================================================

#[test_case(0, 20, &[("search", "atlas"), ("status", "available")] ; "first page")]
#[test_case(60, 20, &[("search", "1999"), ("supplierId", "3")] ; "numeric looking text")]
#[test_case(120, 20, &[("search", "war & peace"), ("q", "a=b c")] ; "reserved characters")]
#[test_case(30, 10, &[("search", ""), ("status", "sold")] ; "empty value")]
#[test_case(40, 20, &[("zip", "0042"), ("search", "-3")] ; "signed and padded")]
fn test_round_trip(offset: usize, page_size: usize, pairs: &[(&str, &str)]) {
    let active = filters(pairs.iter().copied());
    let params = build_pagination_location_params(&meta(page_size), offset, &active);
    let decoded = parse_pagination_from_location(&params.to_query_string(), 132, 20);

    pretty_assertions::assert_eq!(decoded.page, params.page);
    pretty_assertions::assert_eq!(decoded.page_size, params.page_size);
    pretty_assertions::assert_eq!(decoded.offset, params.offset);
    pretty_assertions::assert_eq!(decoded.filters, params.filters);
    pretty_assertions::assert_eq!(decoded.filters, active);
}

#[test]
fn test_int_filter_decodes_as_text() {
    let params = build_pagination_location_params(
        &meta(20),
        0,
        &filters([("year", FilterValue::Int(1999))]),
    );
    let query = params.to_query_string();
    pretty_assertions::assert_eq!(query, "page=1&pageSize=20&offset=0&year=1999");

    let decoded = parse_pagination_from_location(&query, 132, 20);
    pretty_assertions::assert_eq!(decoded.filters, filters([("year", "1999")]));
}
