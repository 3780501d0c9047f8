//! Data source types and traits

use crate::error::Result;
use crate::page::PageState;
use crate::request::PaginationRequest;
use crate::types::Filters;
use async_trait::async_trait;
use futures::future::BoxFuture;

/// Everything a data source receives for one fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchArgs {
    /// Normalized page request
    pub request: PaginationRequest,
    /// Active filters
    pub filters: Filters,
    /// Offset the controller expects the page to start at
    ///
    /// Offset-capable sources use it when `request.cursor` is absent;
    /// cursor-only sources may ignore it.
    pub offset: usize,
}

/// One page as returned by a data source
#[derive(Debug, Clone, PartialEq)]
pub struct SourcePage<T> {
    pub page: PageState<T>,
    /// Offset of the first item, when the source knows it
    pub offset: Option<usize>,
    /// Total matching items, when the source knows it
    pub total_items: Option<usize>,
}

impl<T> SourcePage<T> {
    /// Wrap a page with no position information
    pub fn new(page: PageState<T>) -> Self {
        Self {
            page,
            offset: None,
            total_items: None,
        }
    }

    /// Set the offset of the first item
    #[must_use]
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Set the total number of matching items
    #[must_use]
    pub fn with_total(mut self, total_items: usize) -> Self {
        self.total_items = Some(total_items);
        self
    }
}

/// A source of pages
///
/// Implementations may wrap a cursor-paginated remote store or slice a local
/// array; the controller treats both identically.
#[async_trait]
pub trait DataSource<T>: Send + Sync {
    /// Fetch the page described by `args`
    async fn fetch(&self, args: FetchArgs) -> Result<SourcePage<T>>;

    /// Whether `FetchArgs::offset` is honoured when no cursor is given
    ///
    /// Sources that return `false` are walked page by page for random access.
    fn supports_offset(&self) -> bool {
        true
    }
}

/// Data source backed by a closure
pub struct FnSource<F> {
    fetch: F,
    supports_offset: bool,
}

impl<F> FnSource<F> {
    /// Wrap a closure that honours `FetchArgs::offset`
    pub fn new(fetch: F) -> Self {
        Self {
            fetch,
            supports_offset: true,
        }
    }

    /// Wrap a closure that only understands cursors
    pub fn cursor_only(fetch: F) -> Self {
        Self {
            fetch,
            supports_offset: false,
        }
    }
}

#[async_trait]
impl<T, F> DataSource<T> for FnSource<F>
where
    T: Send + 'static,
    F: Fn(FetchArgs) -> BoxFuture<'static, Result<SourcePage<T>>> + Send + Sync,
{
    async fn fetch(&self, args: FetchArgs) -> Result<SourcePage<T>> {
        (self.fetch)(args).await
    }

    fn supports_offset(&self) -> bool {
        self.supports_offset
    }
}
