//! Tests for page module

use super::*;
use crate::types::Cursors;
use pretty_assertions::assert_eq;

#[test]
fn test_build_state_copies_meta() {
    let state = build_pagination_state(PageInput {
        items: vec!["a", "b"],
        page_size: 2,
        has_next: true,
        has_prev: false,
        cursors: Cursors::between("c1", "c2"),
    });

    assert_eq!(
        state,
        PageState {
            items: vec!["a", "b"],
            meta: PageMeta {
                page_size: 2,
                count: 2,
                has_next: true,
                has_prev: false,
                cursors: Cursors::between("c1", "c2"),
            },
        }
    );
}

#[test]
fn test_count_reflects_short_last_page() {
    let state = build_pagination_state(PageInput {
        items: vec![1, 2, 3],
        page_size: 20,
        has_next: false,
        has_prev: true,
        cursors: Cursors::between("40", "42"),
    });

    assert_eq!(state.meta.count, 3);
    assert_eq!(state.meta.page_size, 20);
    assert_eq!(state.len(), 3);
}

#[test]
fn test_malformed_cursors_pass_through() {
    let state = build_pagination_state(PageInput::<u8> {
        items: vec![],
        page_size: 10,
        has_next: true,
        has_prev: true,
        cursors: Cursors::new(None, Some(String::new())),
    });

    assert!(state.is_empty());
    assert_eq!(state.meta.count, 0);
    assert_eq!(state.meta.cursors.start, None);
    assert_eq!(state.meta.cursors.end.as_deref(), Some(""));
}

#[test]
fn test_empty_meta() {
    let meta = PageMeta::empty(25);
    assert_eq!(meta.page_size, 25);
    assert_eq!(meta.count, 0);
    assert!(!meta.has_next);
    assert!(!meta.has_prev);
    assert!(meta.cursors.is_empty());
}

#[test]
fn test_meta_serializes_camel_case() {
    let meta = PageMeta {
        page_size: 2,
        count: 2,
        has_next: true,
        has_prev: false,
        cursors: Cursors::between("c1", "c2"),
    };
    let json = serde_json::to_value(&meta).unwrap();
    assert_eq!(json["pageSize"], 2);
    assert_eq!(json["hasNext"], true);
    assert_eq!(json["cursors"]["end"], "c2");
}
