//! Pagination controller implementation

use super::types::{ControllerOptions, FetchOutcome, LocationSink, StateListener, UiSnapshot};
use crate::error::{Error, Result};
use crate::location::{build_pagination_location_params, DecodedLocation, LocationParams};
use crate::page::PageMeta;
use crate::request::{
    create_pagination_request, resolve_page_size, PaginationRequest, RequestDefaults, RequestInput,
};
use crate::shell::{build_pagination_shell_state, current_page_for, total_pages_for, ShellInput};
use crate::source::{DataSource, FetchArgs, LocationAdapter, SourcePage};
use crate::types::{Cursors, Direction, Filters, PaginationMode};
use chrono::{DateTime, Utc};
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

/// How a fetched page is merged into the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FetchKind {
    Replace,
    Append,
}

/// A fetch that has been issued under a generation
#[derive(Debug)]
struct Ticket {
    generation: u64,
    args: FetchArgs,
    kind: FetchKind,
    /// Forward steps still to walk before applying (cursor-only sources)
    walk: usize,
}

/// Result of trying to apply a page
enum Applied {
    Done(FetchOutcome),
    Retarget(FetchArgs),
}

/// Mutable state, owned by one controller
struct ControllerState<T> {
    items: Vec<T>,
    page_meta: PageMeta,
    current_offset: usize,
    total_items: usize,
    filters: Filters,
    page_size: usize,
    is_loading: bool,
    request_generation: u64,
    last_args: Option<FetchArgs>,
    last_kind: FetchKind,
    error: Option<String>,
    fetched_at: Option<DateTime<Utc>>,
}

impl<T> ControllerState<T> {
    fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            page_meta: PageMeta::empty(page_size),
            current_offset: 0,
            total_items: 0,
            filters: Filters::new(),
            page_size,
            is_loading: false,
            request_generation: 0,
            last_args: None,
            last_kind: FetchKind::Replace,
            error: None,
            fetched_at: None,
        }
    }

    fn has_fetched(&self) -> bool {
        self.fetched_at.is_some()
    }

    fn known_total(&self) -> Option<usize> {
        self.has_fetched().then_some(self.total_items)
    }
}

/// Drives one paged list
///
/// Navigation methods take `&self` and may overlap; each returns a future that
/// resolves once its fetch has been applied, dropped as stale, or failed. The
/// generation is taken and the busy state published when the method is
/// called, before the future is first polled.
pub struct PaginationController<T> {
    source: Arc<dyn DataSource<T>>,
    location: Option<Arc<dyn LocationAdapter>>,
    listener: Option<StateListener<T>>,
    sink: Mutex<Option<LocationSink>>,
    options: ControllerOptions,
    defaults: RequestDefaults,
    state: Mutex<ControllerState<T>>,
}

impl<T> PaginationController<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create a controller over `source`
    pub fn new(source: impl DataSource<T> + 'static, options: ControllerOptions) -> Self {
        Self::with_shared_source(Arc::new(source), options)
    }

    /// Create a controller over a shared source
    pub fn with_shared_source(source: Arc<dyn DataSource<T>>, options: ControllerOptions) -> Self {
        let defaults = options.request_defaults();
        let page_size = resolve_page_size(None, &defaults);
        Self {
            source,
            location: None,
            listener: None,
            sink: Mutex::new(None),
            options,
            defaults,
            state: Mutex::new(ControllerState::new(page_size)),
        }
    }

    /// Attach a location adapter
    ///
    /// The adapter is read by `sync_from_location` and written after every
    /// applied fetch unless a sink is registered with `sync_to_location`.
    #[must_use]
    pub fn with_location_adapter(mut self, adapter: Arc<dyn LocationAdapter>) -> Self {
        self.location = Some(adapter);
        self
    }

    /// Attach a state change listener
    #[must_use]
    pub fn with_state_listener<F>(mut self, listener: F) -> Self
    where
        F: Fn(&UiSnapshot<T>) + Send + Sync + 'static,
    {
        self.listener = Some(Arc::new(listener));
        self
    }

    /// Controller options
    pub fn options(&self) -> &ControllerOptions {
        &self.options
    }

    // ========================================================================
    // Public Operations
    // ========================================================================

    /// Read the location and fetch the page it names
    pub fn sync_from_location(&self) -> impl Future<Output = Result<FetchOutcome>> + '_ {
        let known_total = self.lock().known_total();
        let decoded = match &self.location {
            Some(adapter) => adapter.parse_location(known_total, self.options.default_page_size),
            None => DecodedLocation::first_page(self.options.default_page_size),
        };
        debug!(
            page = decoded.page,
            page_size = decoded.page_size,
            "syncing from location"
        );

        let ticket = self.issue(FetchKind::Replace, |state| {
            state.page_size = self.accept_page_size(decoded.page_size, state.page_size);
            state.filters = decoded.filters;
            Some(self.plan_page(state, decoded.page))
        });
        self.execute(ticket)
    }

    /// Register the sink that receives location parameters after each applied fetch
    pub fn sync_to_location<F>(&self, sink: F)
    where
        F: Fn(&LocationParams) + Send + Sync + 'static,
    {
        *self.sink.lock().unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(sink));
    }

    /// Fetch the page after the current one
    pub fn go_next(&self) -> impl Future<Output = Result<FetchOutcome>> + '_ {
        let ticket = self.issue(FetchKind::Replace, |state| {
            Some(self.plan_turn(state, Direction::Forward))
        });
        self.execute(ticket)
    }

    /// Fetch the page before the current one
    pub fn go_prev(&self) -> impl Future<Output = Result<FetchOutcome>> + '_ {
        let ticket = self.issue(FetchKind::Replace, |state| {
            Some(self.plan_turn(state, Direction::Backward))
        });
        self.execute(ticket)
    }

    /// Fetch page `page` (1-based)
    ///
    /// Pages past the last known page are clamped to it.
    pub fn go_to_page(&self, page: usize) -> impl Future<Output = Result<FetchOutcome>> + '_ {
        let ticket = self.issue(FetchKind::Replace, |state| Some(self.plan_page(state, page)));
        self.execute(ticket)
    }

    /// Change the page size and restart from the first page
    ///
    /// A size outside the configured options keeps the current page size.
    pub fn set_page_size(
        &self,
        page_size: usize,
    ) -> impl Future<Output = Result<FetchOutcome>> + '_ {
        let ticket = self.issue(FetchKind::Replace, |state| {
            state.page_size = self.accept_page_size(page_size, state.page_size);
            Some(self.plan_page(state, 1))
        });
        self.execute(ticket)
    }

    /// Replace the active filters and restart from the first page
    ///
    /// The busy state is published before this method returns.
    pub fn set_filters(&self, filters: Filters) -> impl Future<Output = Result<FetchOutcome>> + '_ {
        let ticket = self.issue(FetchKind::Replace, |state| {
            state.filters = filters;
            Some(self.plan_page(state, 1))
        });
        self.execute(ticket)
    }

    /// Fetch the next page and append it (load-more mode only)
    ///
    /// Outside load-more mode, or once the last page is shown, this returns
    /// `Skipped` without taking a generation: no fetch is issued, and a fetch
    /// already in flight still applies.
    pub fn load_more(&self) -> impl Future<Output = Result<FetchOutcome>> + '_ {
        let ticket = self.issue(FetchKind::Append, |state| {
            if self.options.mode != PaginationMode::LoadMore {
                debug!("load_more ignored outside load-more mode");
                return None;
            }
            if state.has_fetched() && !state.page_meta.has_next {
                debug!("load_more ignored, no further pages");
                return None;
            }
            let request = self.request(state, Direction::Forward);
            Some(Plan::single(FetchArgs {
                request,
                filters: state.filters.clone(),
                offset: state.current_offset + state.items.len(),
            }))
        });
        self.execute(ticket)
    }

    /// Re-fetch the current position without moving
    ///
    /// After a failure this retries the failed request.
    pub fn refresh(&self) -> impl Future<Output = Result<FetchOutcome>> + '_ {
        let ticket = self.issue(FetchKind::Replace, |state| {
            let plan = match (&state.last_args, state.last_kind) {
                (Some(args), FetchKind::Replace) => Plan::single(args.clone()),
                (Some(_), FetchKind::Append) => Plan::single(FetchArgs {
                    request: PaginationRequest::first_page(state.items.len().max(state.page_size)),
                    filters: state.filters.clone(),
                    offset: state.current_offset,
                }),
                (None, _) => self.plan_page(state, 1),
            };
            Some(plan)
        });
        self.execute(ticket)
    }

    /// Latest snapshot of the controller state
    pub fn get_ui_state(&self) -> UiSnapshot<T> {
        let state = self.lock();
        self.snapshot(&state)
    }

    // ========================================================================
    // Planning
    // ========================================================================

    fn accept_page_size(&self, requested: usize, current: usize) -> usize {
        if self.options.accepts_page_size(requested) {
            resolve_page_size(Some(requested), &self.defaults)
        } else {
            debug!(requested, current, "page size not in options, keeping current");
            current
        }
    }

    fn request(&self, state: &ControllerState<T>, direction: Direction) -> PaginationRequest {
        let input = RequestInput {
            page_size: Some(state.page_size),
            direction: Some(direction),
            cursors: state.page_meta.cursors.clone(),
        };
        create_pagination_request(&input, &self.defaults)
    }

    fn plan_turn(&self, state: &ControllerState<T>, direction: Direction) -> Plan {
        let offset = match direction {
            Direction::Forward => state.current_offset + state.page_meta.count,
            Direction::Backward => state.current_offset.saturating_sub(state.page_size),
        };
        Plan::single(FetchArgs {
            request: self.request(state, direction),
            filters: state.filters.clone(),
            offset,
        })
    }

    fn plan_page(&self, state: &ControllerState<T>, page: usize) -> Plan {
        let mut page = page.max(1);
        if let Some(total) = state.known_total() {
            page = page.min(total_pages_for(total, state.page_size));
        }

        let first = PaginationRequest::first_page(state.page_size);
        if self.source.supports_offset() {
            Plan::single(FetchArgs {
                request: first,
                filters: state.filters.clone(),
                offset: (page - 1).saturating_mul(state.page_size),
            })
        } else {
            Plan {
                args: FetchArgs {
                    request: first,
                    filters: state.filters.clone(),
                    offset: 0,
                },
                walk: page - 1,
            }
        }
    }

    // ========================================================================
    // Issue / Execute / Apply
    // ========================================================================

    /// Take a new generation and publish the busy state
    fn issue<F>(&self, kind: FetchKind, plan: F) -> Option<Ticket>
    where
        F: FnOnce(&mut ControllerState<T>) -> Option<Plan>,
    {
        let mut state = self.lock();
        let plan = plan(&mut state)?;

        state.request_generation += 1;
        state.is_loading = true;
        state.last_args = Some(plan.args.clone());
        state.last_kind = kind;

        let ticket = Ticket {
            generation: state.request_generation,
            args: plan.args,
            kind,
            walk: plan.walk,
        };
        let snapshot = self.snapshot(&state);
        drop(state);

        debug!(
            generation = ticket.generation,
            direction = ?ticket.args.request.direction,
            page_size = ticket.args.request.page_size,
            offset = ticket.args.offset,
            "issuing fetch"
        );
        self.notify(&snapshot);
        Some(ticket)
    }

    async fn execute(&self, ticket: Option<Ticket>) -> Result<FetchOutcome> {
        let Some(ticket) = ticket else {
            return Ok(FetchOutcome::Skipped);
        };

        let mut args = ticket.args;
        let mut walk = ticket.walk;
        let mut retargeted = false;

        loop {
            let page = match self.source.fetch(args.clone()).await {
                Ok(page) => page,
                Err(err) => return self.fail(ticket.generation, err),
            };

            if walk > 0 && page.page.meta.has_next {
                if !self.is_current(ticket.generation) {
                    debug!(generation = ticket.generation, "dropping stale walk");
                    return Ok(FetchOutcome::Stale);
                }
                walk -= 1;
                let input = RequestInput::forward(page.page.meta.cursors.clone())
                    .with_page_size(args.request.page_size);
                args = FetchArgs {
                    request: create_pagination_request(&input, &self.defaults),
                    offset: page.offset.unwrap_or(args.offset) + page.page.meta.count,
                    filters: args.filters,
                };
                continue;
            }

            match self.apply(ticket.generation, &args, ticket.kind, page, !retargeted) {
                Applied::Done(outcome) => return Ok(outcome),
                Applied::Retarget(next) => {
                    retargeted = true;
                    args = next;
                }
            }
        }
    }

    fn apply(
        &self,
        generation: u64,
        args: &FetchArgs,
        kind: FetchKind,
        page: SourcePage<T>,
        may_retarget: bool,
    ) -> Applied {
        let mut state = self.lock();
        if state.request_generation != generation {
            debug!(
                generation,
                latest = state.request_generation,
                "dropping stale response"
            );
            return Applied::Done(FetchOutcome::Stale);
        }

        let offset = page.offset.unwrap_or(args.offset);

        if let (FetchKind::Replace, Some(total)) = (kind, page.total_items) {
            let past_end = page.page.is_empty() && offset > 0 && offset >= total;
            if past_end && may_retarget && self.source.supports_offset() {
                let last_page = total_pages_for(total, state.page_size);
                let last_offset = (last_page - 1) * state.page_size;
                info!(
                    generation,
                    offset, last_page, "page past the end, re-targeting last page"
                );
                return Applied::Retarget(FetchArgs {
                    request: PaginationRequest::first_page(state.page_size),
                    filters: args.filters.clone(),
                    offset: last_offset,
                });
            }
        }

        let count = page.page.meta.count;
        let has_next = page.page.meta.has_next;
        match kind {
            FetchKind::Append if state.has_fetched() => {
                let meta = page.page.meta;
                state.items.extend(page.page.items);
                state.page_meta = PageMeta {
                    page_size: state.page_size,
                    count: state.items.len(),
                    has_next: meta.has_next,
                    has_prev: state.page_meta.has_prev,
                    cursors: Cursors::new(
                        state.page_meta.cursors.start.clone(),
                        meta.cursors.end.or_else(|| state.page_meta.cursors.end.clone()),
                    ),
                };
            }
            _ => {
                state.items = page.page.items;
                state.page_meta = page.page.meta;
                state.page_meta.page_size = state.page_size;
                state.current_offset = offset;
                state.last_args = Some(args.clone());
            }
        }

        state.total_items = page.total_items.unwrap_or_else(|| {
            let seen = offset + count;
            if has_next {
                seen.max(state.total_items)
            } else {
                seen
            }
        });
        state.is_loading = false;
        state.error = None;
        state.fetched_at = Some(Utc::now());

        let snapshot = self.snapshot(&state);
        let params = build_pagination_location_params(
            &state.page_meta,
            state.current_offset,
            &state.filters,
        );
        drop(state);

        debug!(
            generation,
            offset = snapshot.current_offset,
            count = snapshot.page_meta.count,
            total = snapshot.total_items,
            "applied page"
        );
        self.notify(&snapshot);
        self.write_location(&params);
        Applied::Done(FetchOutcome::Applied)
    }

    fn fail(&self, generation: u64, err: Error) -> Result<FetchOutcome> {
        let mut state = self.lock();
        if state.request_generation != generation {
            debug!(generation, error = %err, "dropping stale failure");
            return Ok(FetchOutcome::Stale);
        }

        state.is_loading = false;
        state.error = Some(err.to_string());
        let snapshot = self.snapshot(&state);
        drop(state);

        warn!(generation, error = %err, "data source fetch failed");
        self.notify(&snapshot);
        Err(err)
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn lock(&self) -> MutexGuard<'_, ControllerState<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_current(&self, generation: u64) -> bool {
        self.lock().request_generation == generation
    }

    fn snapshot(&self, state: &ControllerState<T>) -> UiSnapshot<T> {
        let total_pages = total_pages_for(state.total_items, state.page_size);
        let current_page = current_page_for(state.current_offset, state.page_size);

        let mut input = ShellInput::new(
            &state.page_meta,
            state.total_items,
            state.current_offset,
            state.is_loading,
        )
        .with_mode(self.options.mode);
        if self.options.mode == PaginationMode::Pager {
            input = input.with_pager(total_pages, current_page);
        }

        UiSnapshot {
            shell: build_pagination_shell_state(&input),
            items: state.items.clone(),
            page_meta: state.page_meta.clone(),
            current_offset: state.current_offset,
            total_items: state.total_items,
            total_pages,
            current_page,
            page_size: state.page_size,
            filters: state.filters.clone(),
            mode: self.options.mode,
            is_loading: state.is_loading,
            error: state.error.clone(),
            generation: state.request_generation,
            fetched_at: state.fetched_at,
        }
    }

    fn notify(&self, snapshot: &UiSnapshot<T>) {
        if let Some(listener) = &self.listener {
            listener(snapshot);
        }
    }

    fn write_location(&self, params: &LocationParams) {
        let sink = self
            .sink
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        match (sink, &self.location) {
            (Some(sink), _) => sink(params),
            (None, Some(adapter)) => adapter.write_location(params),
            (None, None) => {}
        }
    }
}

/// Fetch arguments plus the number of forward steps to walk first
struct Plan {
    args: FetchArgs,
    walk: usize,
}

impl Plan {
    fn single(args: FetchArgs) -> Self {
        Self { args, walk: 0 }
    }
}
