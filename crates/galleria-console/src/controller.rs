//! The list controller shared by every admin list screen
//!
//! One instance owns the filter state, the fetched page, and the in-flight
//! status for a single collection. Results are applied last-write-wins:
//! every fetch carries a monotonically increasing sequence number and only
//! the response matching the latest issued number is kept, so a slow early
//! response can never overwrite a fresher filter's result.

use async_trait::async_trait;
use galleria_api::{FilterState, PageResult};
use galleria_client::{Collection, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::status::{RequestStatus, ViewState};

/// The collection operations a list screen needs. Implemented by the HTTP
/// [`Collection`] handle and by scripted fakes in tests.
#[async_trait]
pub trait CollectionOps<T, P>: Send + Sync {
    async fn fetch(&self, filters: &FilterState) -> Result<PageResult<T>>;
    async fn create(&self, payload: &P) -> Result<()>;
    async fn update(&self, id: &str, payload: &P) -> Result<()>;
    async fn remove(&self, id: &str) -> Result<()>;
}

#[async_trait]
impl<T, P> CollectionOps<T, P> for Collection<T>
where
    T: DeserializeOwned + Send + Sync,
    P: Serialize + Send + Sync,
{
    async fn fetch(&self, filters: &FilterState) -> Result<PageResult<T>> {
        self.list(filters).await
    }

    async fn create(&self, payload: &P) -> Result<()> {
        Collection::create(self, payload).await.map(|_| ())
    }

    async fn update(&self, id: &str, payload: &P) -> Result<()> {
        Collection::update(self, id, payload).await.map(|_| ())
    }

    async fn remove(&self, id: &str) -> Result<()> {
        Collection::remove(self, id).await
    }
}

/// An issued fetch: the sequence number plus the filter snapshot the
/// request was built from.
#[derive(Clone, Debug)]
pub struct FetchTicket {
    seq: u64,
    filters: FilterState,
}

impl FetchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }
}

/// State machine behind one admin list screen.
pub struct ListController<T, P> {
    ops: Box<dyn CollectionOps<T, P>>,
    filters: FilterState,
    page: Option<PageResult<T>>,
    status: RequestStatus,
    seq: u64,
    pending_removal: Option<String>,
}

impl<T, P> ListController<T, P> {
    pub fn new(ops: impl CollectionOps<T, P> + 'static) -> Self {
        Self::with_filters(ops, FilterState::default())
    }

    pub fn with_filters(ops: impl CollectionOps<T, P> + 'static, filters: FilterState) -> Self {
        Self {
            ops: Box::new(ops),
            filters,
            page: None,
            status: RequestStatus::Idle,
            seq: 0,
            pending_removal: None,
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn status(&self) -> &RequestStatus {
        &self.status
    }

    /// The last applied page, if any fetch has succeeded yet.
    pub fn page(&self) -> Option<&PageResult<T>> {
        self.page.as_ref()
    }

    /// The id awaiting delete confirmation, if any.
    pub fn pending_removal(&self) -> Option<&str> {
        self.pending_removal.as_deref()
    }

    /// Update one filter entry without fetching. The page resets to 1.
    pub fn set_filter(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.filters.set(key, value);
    }

    /// Issue a fetch: bump the sequence number, snapshot the filters, and
    /// mark the screen loading. The caller runs the request and hands the
    /// outcome back to [`complete_fetch`](Self::complete_fetch).
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.seq += 1;
        self.status = RequestStatus::Loading;
        debug!(seq = self.seq, "list fetch issued");
        FetchTicket {
            seq: self.seq,
            filters: self.filters.clone(),
        }
    }

    /// Apply a fetch outcome. Returns false when the response is stale --
    /// a newer fetch was issued meanwhile -- in which case nothing changes.
    pub fn complete_fetch(&mut self, seq: u64, outcome: Result<PageResult<T>>) -> bool {
        if seq != self.seq {
            debug!(seq, latest = self.seq, "stale response discarded");
            return false;
        }
        match outcome {
            Ok(page) => {
                self.page = Some(page);
                self.status = RequestStatus::Success;
            }
            Err(err) => {
                warn!(error = %err, "list fetch failed");
                self.status = RequestStatus::Error(err.to_string());
            }
        }
        true
    }

    /// Fetch the current page and apply the result. Sequential composition
    /// of [`begin_fetch`](Self::begin_fetch) and
    /// [`complete_fetch`](Self::complete_fetch).
    pub async fn fetch_page(&mut self) {
        let ticket = self.begin_fetch();
        let outcome = self.ops.fetch(ticket.filters()).await;
        self.complete_fetch(ticket.seq(), outcome);
    }

    /// Named trigger: one filter changed. Resets the page and refetches.
    pub async fn on_filter_change(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.filters.set(key, value);
        self.fetch_page().await;
    }

    /// Named trigger: the user moved to another page.
    pub async fn on_page_change(&mut self, page: u64) {
        self.filters.set_page(page);
        self.fetch_page().await;
    }

    /// Named trigger: the page size changed. Resets the page and refetches.
    pub async fn on_limit_change(&mut self, limit: u64) {
        self.filters.set_limit(limit);
        self.fetch_page().await;
    }

    /// Create a record, then refetch the list once. On failure the error is
    /// returned and local state is left untouched.
    pub async fn create(&mut self, payload: &P) -> Result<()> {
        self.ops.create(payload).await?;
        self.fetch_page().await;
        Ok(())
    }

    /// Update a record, then refetch the list once. On failure the error is
    /// returned and local state is left untouched.
    pub async fn update(&mut self, id: &str, payload: &P) -> Result<()> {
        self.ops.update(id, payload).await?;
        self.fetch_page().await;
        Ok(())
    }

    /// First step of deletion: remember the id and wait for confirmation.
    /// No request is issued.
    pub fn request_removal(&mut self, id: impl Into<String>) {
        self.pending_removal = Some(id.into());
    }

    /// The user declined; forget the pending id with no side effect.
    pub fn cancel_removal(&mut self) {
        self.pending_removal = None;
    }

    /// The user confirmed: issue the delete and refetch on success. Returns
    /// false when nothing was pending. On failure the pending id is kept so
    /// the confirmation dialog can offer a retry.
    pub async fn confirm_removal(&mut self) -> Result<bool> {
        let Some(id) = self.pending_removal.take() else {
            return Ok(false);
        };
        if let Err(err) = self.ops.remove(&id).await {
            self.pending_removal = Some(id);
            return Err(err);
        }
        self.fetch_page().await;
        Ok(true)
    }

    /// What the view should render right now.
    pub fn view_state(&self) -> ViewState<'_, T> {
        match (&self.status, &self.page) {
            (RequestStatus::Error(message), _) => ViewState::Failed(message),
            (RequestStatus::Loading, _) | (_, None) => ViewState::Loading,
            (_, Some(page)) if page.is_empty() => ViewState::Empty,
            (_, Some(page)) => ViewState::Rows(&page.items),
        }
    }
}
