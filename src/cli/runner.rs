//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, DirectionArg, OutputFormat};
use crate::config::load_config;
use crate::controller::{ControllerOptions, PaginationController};
use crate::error::{Error, Result, ResultExt};
use crate::location::{parse_pagination_from_location, LocationParams};
use crate::request::{create_pagination_request, RequestDefaults, RequestInput};
use crate::shell::build_page_buttons;
use crate::source::{ArraySource, QueryLocation};
use crate::types::{Cursors, FilterValue, Filters};
use serde::Serialize;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Options for the browse command
struct BrowseArgs<'a> {
    items: &'a Path,
    list: Option<&'a str>,
    search: Option<&'a str>,
    page_size: Option<usize>,
    filters: &'a [String],
    page: Option<usize>,
    next: u8,
    prev: u8,
    load_more: u8,
}

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Request {
                page_size,
                direction,
                start_cursor,
                end_cursor,
                default_page_size,
                min_page_size,
                max_page_size,
            } => {
                let defaults = RequestDefaults::new(*default_page_size)
                    .with_bounds(*min_page_size, *max_page_size);
                self.request(
                    *page_size,
                    *direction,
                    Cursors::new(start_cursor.clone(), end_cursor.clone()),
                    &defaults,
                )
            }
            Commands::Location {
                search,
                total,
                default_page_size,
            } => self.location(search, *total, *default_page_size),
            Commands::Buttons {
                total_pages,
                current,
            } => self.output(&build_page_buttons(*total_pages, *current)),
            Commands::Browse {
                items,
                list,
                search,
                page_size,
                filters,
                page,
                next,
                prev,
                load_more,
            } => {
                self.browse(BrowseArgs {
                    items,
                    list: list.as_deref(),
                    search: search.as_deref(),
                    page_size: *page_size,
                    filters,
                    page: *page,
                    next: *next,
                    prev: *prev,
                    load_more: *load_more,
                })
                .await
            }
        }
    }

    /// Build and print a request
    fn request(
        &self,
        page_size: Option<usize>,
        direction: Option<DirectionArg>,
        cursors: Cursors,
        defaults: &RequestDefaults,
    ) -> Result<()> {
        let input = RequestInput {
            page_size,
            direction: direction.map(Into::into),
            cursors,
        };
        self.output(&create_pagination_request(&input, defaults))
    }

    /// Decode a query string and print it with its re-encoding
    fn location(&self, search: &str, total: usize, default_page_size: usize) -> Result<()> {
        let decoded = parse_pagination_from_location(search, total, default_page_size);
        let query = LocationParams {
            page: decoded.page,
            page_size: decoded.page_size,
            offset: decoded.offset,
            filters: decoded.filters.clone(),
        }
        .to_query_string();
        self.output(&json!({
            "location": decoded,
            "query": format!("?{query}"),
        }))
    }

    /// Load items and config, drive a controller, print the final state
    async fn browse(&self, args: BrowseArgs<'_>) -> Result<()> {
        let items = load_items(args.items)?;
        let options = self.list_options(args.list)?;
        info!(
            items = items.len(),
            page_size = options.default_page_size,
            mode = ?options.mode,
            "browsing"
        );

        let location = Arc::new(QueryLocation::new(args.search.unwrap_or_default()));
        let source = ArraySource::new(items).with_filter(item_matches);
        let controller = PaginationController::new(source, options)
            .with_location_adapter(location.clone())
            .with_state_listener(|ui| {
                debug!(
                    generation = ui.generation,
                    loading = ui.is_loading,
                    summary = %ui.shell.summary_text,
                    "state changed"
                );
            });

        controller.sync_from_location().await?;

        if let Some(size) = args.page_size {
            controller.set_page_size(size).await?;
        }

        if !args.filters.is_empty() {
            let mut filters = controller.get_ui_state().filters;
            for raw in args.filters {
                let (key, value) = parse_filter(raw)?;
                filters.insert(key, value);
            }
            controller.set_filters(filters).await?;
        }

        if let Some(page) = args.page {
            controller.go_to_page(page).await?;
        }
        for _ in 0..args.next {
            controller.go_next().await?;
        }
        for _ in 0..args.prev {
            controller.go_prev().await?;
        }
        for _ in 0..args.load_more {
            controller.load_more().await?;
        }

        let ui = controller.get_ui_state();
        let catalog = ui.catalog(args.list);
        self.output(&json!({
            "state": ui,
            "catalog": catalog,
            "location": location.search(),
        }))
    }

    /// Controller options for the selected list
    fn list_options(&self, list: Option<&str>) -> Result<ControllerOptions> {
        let Some(path) = &self.cli.config else {
            if let Some(name) = list {
                return Err(Error::config(format!(
                    "List '{name}' requested but no config file given (use -C flag)"
                )));
            }
            return Ok(ControllerOptions::default());
        };

        let config = load_config(path)?;
        let list = match list {
            Some(name) => config.get(name)?,
            None => config
                .lists
                .first()
                .ok_or_else(|| Error::config("Config defines no lists"))?,
        };
        Ok(list.controller_options())
    }

    /// Output a value
    fn output(&self, value: &impl Serialize) -> Result<()> {
        let text = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        println!("{text}");
        Ok(())
    }
}

/// Load a JSON array of items
fn load_items(path: &Path) -> Result<Vec<Value>> {
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .with_context(|| format!("Items file '{}' must hold a JSON array", path.display()))
}

/// Split a `key=value` filter argument
fn parse_filter(raw: &str) -> Result<(String, FilterValue)> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => {
            Ok((key.to_string(), FilterValue::infer(value)))
        }
        _ => Err(Error::InvalidFilter {
            input: raw.to_string(),
        }),
    }
}

/// Check an item against every filter
///
/// `search` matches any string field case-insensitively; other keys must
/// equal the item field of the same name.
fn item_matches(item: &Value, filters: &Filters) -> bool {
    filters.iter().all(|(key, expected)| {
        if key == "search" {
            let needle = expected.to_string().to_lowercase();
            return item.as_object().is_some_and(|fields| {
                fields
                    .values()
                    .filter_map(Value::as_str)
                    .any(|text| text.to_lowercase().contains(&needle))
            });
        }
        match (item.get(key), expected) {
            (Some(Value::Number(n)), FilterValue::Int(want)) => n.as_i64() == Some(*want),
            (Some(Value::Number(n)), FilterValue::Text(want)) => n.to_string() == *want,
            (Some(Value::String(s)), FilterValue::Text(want)) => s == want,
            (Some(Value::String(s)), FilterValue::Int(want)) => *s == want.to_string(),
            (Some(Value::Bool(b)), FilterValue::Text(want)) => b.to_string() == *want,
            _ => false,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::filters;

    #[test]
    fn test_parse_filter() {
        assert_eq!(
            parse_filter("status=sold").unwrap(),
            ("status".to_string(), FilterValue::from("sold"))
        );
        assert_eq!(
            parse_filter("year=1999").unwrap(),
            ("year".to_string(), FilterValue::Int(1999))
        );
        assert_eq!(
            parse_filter("q=a=b").unwrap(),
            ("q".to_string(), FilterValue::from("a=b"))
        );
        assert!(matches!(
            parse_filter("status"),
            Err(Error::InvalidFilter { .. })
        ));
        assert!(parse_filter("=sold").is_err());
    }

    #[test]
    fn test_item_matches() {
        let book = json!({"title": "Atlas of Maps", "status": "available", "year": 1999});

        assert!(item_matches(&book, &Filters::new()));
        assert!(item_matches(&book, &filters([("status", "available")])));
        assert!(!item_matches(&book, &filters([("status", "sold")])));
        assert!(item_matches(&book, &filters([("year", FilterValue::Int(1999))])));
        assert!(item_matches(&book, &filters([("year", "1999")])));
        assert!(item_matches(&book, &filters([("search", "MAPS")])));
        assert!(!item_matches(&book, &filters([("search", "bible")])));
        assert!(!item_matches(&book, &filters([("missing", "x")])));
    }

    #[test]
    fn test_load_items_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_items(&dir.path().join("items.json")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_load_items_rejects_non_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.json");
        fs::write(&path, r#"{"title": "x"}"#).unwrap();
        assert!(load_items(&path).is_err());
    }
}
