//! In-memory array data source
//!
//! Slices a vector the way the remote store pages a collection: cursors are the
//! positions of the first and last item of a page within the filtered list.

use super::types::{DataSource, FetchArgs, SourcePage};
use crate::error::Result;
use crate::page::{build_pagination_state, PageInput};
use crate::types::{Cursors, Direction, Filters};
use async_trait::async_trait;

type Predicate<T> = Box<dyn Fn(&T, &Filters) -> bool + Send + Sync>;

/// Data source over a local vector
pub struct ArraySource<T> {
    items: Vec<T>,
    predicate: Option<Predicate<T>>,
    supports_offset: bool,
}

impl<T> ArraySource<T> {
    /// Create a source over `items`
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            predicate: None,
            supports_offset: true,
        }
    }

    /// Only keep items for which `predicate` returns true under the active filters
    #[must_use]
    pub fn with_filter<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&T, &Filters) -> bool + Send + Sync + 'static,
    {
        self.predicate = Some(Box::new(predicate));
        self
    }

    /// Ignore requested offsets and page by cursor only
    #[must_use]
    pub fn cursor_only(mut self) -> Self {
        self.supports_offset = false;
        self
    }

    /// Number of items before filtering
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the source holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn start_index(&self, args: &FetchArgs) -> usize {
        let request = &args.request;
        let cursor = request
            .cursor
            .as_deref()
            .and_then(|c| c.parse::<usize>().ok());

        match (cursor, request.direction) {
            (Some(last), Direction::Forward) => last.saturating_add(1),
            (Some(first), Direction::Backward) => first.saturating_sub(request.page_size),
            (None, _) if self.supports_offset => args.offset,
            (None, _) => 0,
        }
    }
}

#[async_trait]
impl<T> DataSource<T> for ArraySource<T>
where
    T: Clone + Send + Sync + 'static,
{
    async fn fetch(&self, args: FetchArgs) -> Result<SourcePage<T>> {
        let matching: Vec<&T> = match &self.predicate {
            Some(predicate) => self
                .items
                .iter()
                .filter(|item| predicate(item, &args.filters))
                .collect(),
            None => self.items.iter().collect(),
        };
        let total = matching.len();

        let page_size = args.request.page_size.max(1);
        let start = self.start_index(&args);
        let end = start.saturating_add(page_size).min(total);

        let page_items: Vec<T> = if start < end {
            matching[start..end].iter().copied().cloned().collect()
        } else {
            Vec::new()
        };

        let cursors = if page_items.is_empty() {
            Cursors::default()
        } else {
            Cursors::between(start.to_string(), (end - 1).to_string())
        };

        let page = build_pagination_state(PageInput {
            items: page_items,
            page_size: args.request.page_size,
            has_next: end < total,
            has_prev: start > 0,
            cursors,
        });

        Ok(SourcePage::new(page).with_offset(start).with_total(total))
    }

    fn supports_offset(&self) -> bool {
        self.supports_offset
    }
}
