//! Integration tests
//!
//! Tests the full flow: YAML list config → controller → data source → location

use futures::future::BoxFuture;
use futures::FutureExt;
use pagekit::cli::{Cli, Commands};
use pagekit::location::LocationParams;
use pagekit::source::LocationAdapter;
use pagekit::{
    build_pagination_state, filters, load_config_from_str, ArraySource, Cursors, FetchArgs,
    FetchOutcome, FilterValue, Filters, FnSource, PaginationController, PaginationMode,
    QueryLocation, Result, SourcePage,
};
use pretty_assertions::assert_eq;
use std::sync::{Arc, Mutex};

const LISTS: &str = r"
lists:
  - name: available
    default_page_size: 20
    page_size_options: [10, 20, 50]
  - name: sold
    default_page_size: 10
    mode: loadMore
";

#[derive(Debug, Clone, PartialEq)]
struct Book {
    id: u32,
    title: String,
    status: &'static str,
}

fn catalog(n: u32) -> Vec<Book> {
    (1..=n)
        .map(|id| Book {
            id,
            title: format!("Book {id}"),
            status: if id % 3 == 0 { "sold" } else { "available" },
        })
        .collect()
}

fn by_status(book: &Book, filters: &Filters) -> bool {
    match filters.get("status").and_then(FilterValue::as_str) {
        Some(status) => book.status == status,
        None => true,
    }
}

// ============================================================================
// Catalog Flow Tests
// ============================================================================

#[tokio::test]
async fn test_catalog_deep_link_and_navigation() {
    let config = load_config_from_str(LISTS).unwrap();
    let options = config.get("available").unwrap().controller_options();

    let location = Arc::new(QueryLocation::new("?page=10&pageSize=20&offset=180"));
    let controller = PaginationController::new(ArraySource::new(catalog(132)), options)
        .with_location_adapter(location.clone());

    controller.sync_from_location().await.unwrap();
    let ui = controller.get_ui_state();
    assert_eq!(ui.current_page, 7);
    assert_eq!(ui.shell.summary_text, "Items 121–132 of 132");
    assert!(ui.shell.next_disabled);
    assert_eq!(location.search(), "?page=7&pageSize=20&offset=120");

    controller.go_prev().await.unwrap();
    let ui = controller.get_ui_state();
    assert_eq!(ui.current_page, 6);
    assert_eq!(ui.items.first().map(|b| b.id), Some(101));
    assert_eq!(location.search(), "?page=6&pageSize=20&offset=100");

    let decoded = location.parse_location(Some(ui.total_items), 20);
    assert_eq!(decoded.page, 6);
    assert_eq!(decoded.offset, 100);
}

#[tokio::test]
async fn test_catalog_filter_resets_to_first_page() {
    let config = load_config_from_str(LISTS).unwrap();
    let options = config.get("available").unwrap().controller_options();

    let location = Arc::new(QueryLocation::new("?page=3&pageSize=10"));
    let source = ArraySource::new(catalog(90)).with_filter(by_status);
    let controller =
        PaginationController::new(source, options).with_location_adapter(location.clone());

    controller.sync_from_location().await.unwrap();
    assert_eq!(controller.get_ui_state().current_offset, 20);

    controller
        .set_filters(filters([("status", "sold")]))
        .await
        .unwrap();
    let ui = controller.get_ui_state();
    assert_eq!(ui.current_offset, 0);
    assert_eq!(ui.total_items, 30);
    assert!(ui.items.iter().all(|b| b.status == "sold"));
    assert_eq!(location.search(), "?page=1&pageSize=10&offset=0&status=sold");
}

#[tokio::test]
async fn test_lists_are_independent() {
    let config = load_config_from_str(LISTS).unwrap();
    let books = catalog(45);

    let available = PaginationController::new(
        ArraySource::new(books.clone()),
        config.get("available").unwrap().controller_options(),
    );
    let sold = PaginationController::new(
        ArraySource::new(books),
        config.get("sold").unwrap().controller_options(),
    );

    available.sync_from_location().await.unwrap();
    sold.sync_from_location().await.unwrap();
    sold.load_more().await.unwrap();

    let available_ui = available.get_ui_state();
    let sold_ui = sold.get_ui_state();
    assert_eq!(available_ui.items.len(), 20);
    assert_eq!(available_ui.mode, PaginationMode::Pager);
    assert_eq!(sold_ui.items.len(), 20);
    assert_eq!(sold_ui.mode, PaginationMode::LoadMore);

    let tab = sold_ui.catalog(Some("sold"));
    assert_eq!(tab.summary_text, "Items 1–20 of 45");
    assert!(tab.has_more);
    assert_eq!(tab.load_more_label.as_deref(), Some("Load more books (21–30 of 45)"));
}

// ============================================================================
// Remote Store Tests
// ============================================================================

/// Cursor-only store keyed by book id, like a remote API
fn remote_store(
    books: Vec<Book>,
) -> impl Fn(FetchArgs) -> BoxFuture<'static, Result<SourcePage<Book>>> {
    let books = Arc::new(books);
    move |args: FetchArgs| {
        let books = books.clone();
        async move {
            let size = args.request.page_size;
            let start = match args.request.cursor.as_deref() {
                Some(id) => books
                    .iter()
                    .position(|b| b.id.to_string() == id)
                    .map_or(0, |i| i + 1),
                None => 0,
            };
            let end = (start + size).min(books.len());
            let items = books[start..end].to_vec();
            let cursors = match (items.first(), items.last()) {
                (Some(first), Some(last)) => {
                    Cursors::between(first.id.to_string(), last.id.to_string())
                }
                _ => Cursors::default(),
            };
            let page = build_pagination_state(pagekit::page::PageInput {
                items,
                page_size: size,
                has_next: end < books.len(),
                has_prev: start > 0,
                cursors,
            });
            Ok(SourcePage::new(page))
        }
        .boxed()
    }
}

#[tokio::test]
async fn test_remote_cursor_store_random_access() {
    let source = FnSource::cursor_only(remote_store(catalog(50)));
    let sink: Arc<Mutex<Vec<LocationParams>>> = Arc::default();
    let seen = sink.clone();

    let controller = PaginationController::<Book>::new(source, Default::default());
    controller.sync_to_location(move |params| seen.lock().unwrap().push(params.clone()));

    let outcome = controller.go_to_page(3).await.unwrap();
    assert_eq!(outcome, FetchOutcome::Applied);

    let ui = controller.get_ui_state();
    assert_eq!(ui.items.first().map(|b| b.id), Some(41));
    assert_eq!(ui.current_offset, 40);
    assert_eq!(ui.total_items, 50);
    assert!(ui.shell.next_disabled);

    let writes = sink.lock().unwrap();
    assert_eq!(writes.len(), 1);
    assert_eq!(writes[0].page, 3);
}

// ============================================================================
// CLI Parsing Tests
// ============================================================================

#[test]
fn test_cli_parses_browse() {
    use clap::Parser;

    let cli = Cli::try_parse_from([
        "pagekit",
        "-C",
        "lists.yaml",
        "browse",
        "--items",
        "books.json",
        "--list",
        "available",
        "--filter",
        "status=sold",
        "--next",
        "--next",
    ])
    .unwrap();

    match cli.command {
        Commands::Browse {
            list, filters, next, prev, ..
        } => {
            assert_eq!(list.as_deref(), Some("available"));
            assert_eq!(filters, vec!["status=sold".to_string()]);
            assert_eq!(next, 2);
            assert_eq!(prev, 0);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}
