//! Cursor-based pagination.
//!
//! List endpoints return a [`PaginatedList`] envelope whose `next` field holds
//! the URL of the following page. [`PaginatedStream`] follows those links
//! lazily: a page is requested only when the items of the previous one have
//! been consumed, and dropping the stream stops the walk.

use std::collections::VecDeque;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_util::future::BoxFuture;
use futures_util::{Stream, TryStreamExt};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use super::ClientInner;
use crate::Result;

/// Default number of items requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Envelope returned by paginated list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedList<T> {
    /// Total number of items across all pages (informational).
    #[serde(default)]
    pub count: u64,
    /// Absolute or relative URL of the next page.
    pub next: Option<String>,
    /// URL of the previous page. Not used by the walker.
    pub previous: Option<String>,
    /// Items on this page.
    pub results: Option<Vec<T>>,
}

impl<T> PaginatedList<T> {
    /// Check if the server advertises another page.
    pub fn has_next(&self) -> bool {
        self.next.as_deref().is_some_and(|n| !n.is_empty())
    }
}

/// Future returned by a page fetcher.
pub type PageFuture<T> = BoxFuture<'static, Result<Option<PaginatedList<T>>>>;

/// A stream that lazily follows `next` links and yields individual items.
///
/// Items come out in page order. The stream ends when a page has no `next`
/// link, when a page (or its `results`) is missing, when the cancellation
/// token fires before a page fetch, or right after yielding a fetch error.
///
/// # Example
///
/// ```no_run
/// use futures_util::StreamExt;
///
/// # async fn example(client: bankdata_rs::BankDataClient) -> bankdata_rs::Result<()> {
/// let mut stream = client.requisitions().list(None);
///
/// while let Some(result) = stream.next().await {
///     let requisition = result?;
///     println!("{} {:?}", requisition.id, requisition.status);
/// }
/// # Ok(())
/// # }
/// ```
pub struct PaginatedStream<T> {
    /// Fetches the page at a cursor.
    fetch_page: Box<dyn Fn(String) -> PageFuture<T> + Send + Sync>,
    /// Items of the current page not yet yielded.
    buffered: VecDeque<T>,
    /// Where the next page lives, `None` once exhausted.
    cursor: Option<String>,
    /// In-flight page fetch.
    pending_fetch: Option<PageFuture<T>>,
    cancel: CancellationToken,
    pages_fetched: usize,
}

impl<T> PaginatedStream<T>
where
    T: Send + 'static,
{
    /// Create a stream starting at `start` with a custom page fetcher.
    pub fn new<F>(start: impl Into<String>, cancel: CancellationToken, fetch_page: F) -> Self
    where
        F: Fn(String) -> PageFuture<T> + Send + Sync + 'static,
    {
        Self {
            fetch_page: Box::new(fetch_page),
            buffered: VecDeque::new(),
            cursor: Some(start.into()),
            pending_fetch: None,
            cancel,
            pages_fetched: 0,
        }
    }

    /// Number of pages fetched so far.
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    /// Drain the remaining items into a `Vec`, stopping at the first error.
    pub async fn collect_all(self) -> Result<Vec<T>> {
        self.try_collect().await
    }
}

impl<T> PaginatedStream<T>
where
    T: DeserializeOwned + Send + 'static,
{
    /// Stream pages through the client's authenticated GET.
    pub(crate) fn from_client(
        inner: Arc<ClientInner>,
        start: impl Into<String>,
        cancel: CancellationToken,
    ) -> Self {
        Self::new(start, cancel, move |cursor: String| {
            let inner = inner.clone();
            Box::pin(async move { inner.get::<PaginatedList<T>>(&cursor).await })
        })
    }
}

impl<T> Stream for PaginatedStream<T> {
    type Item = Result<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;

        loop {
            if let Some(item) = this.buffered.pop_front() {
                return Poll::Ready(Some(Ok(item)));
            }

            if let Some(fut) = this.pending_fetch.as_mut() {
                match fut.as_mut().poll(cx) {
                    Poll::Pending => return Poll::Pending,
                    Poll::Ready(Err(e)) => {
                        this.pending_fetch = None;
                        this.cursor = None;
                        return Poll::Ready(Some(Err(e)));
                    }
                    Poll::Ready(Ok(page)) => {
                        this.pending_fetch = None;
                        this.pages_fetched += 1;

                        let Some(page) = page else {
                            tracing::debug!(page = this.pages_fetched, "empty page body; stopping");
                            this.cursor = None;
                            return Poll::Ready(None);
                        };
                        let has_next = page.has_next();
                        let Some(results) = page.results else {
                            tracing::warn!(
                                page = this.pages_fetched,
                                "page has no results; stopping"
                            );
                            this.cursor = None;
                            return Poll::Ready(None);
                        };

                        tracing::debug!(
                            page = this.pages_fetched,
                            items = results.len(),
                            total = page.count,
                            "fetched page"
                        );
                        this.cursor = if has_next { page.next } else { None };
                        this.buffered.extend(results);
                        continue;
                    }
                }
            }

            let Some(cursor) = this.cursor.take() else {
                return Poll::Ready(None);
            };

            if this.cancel.is_cancelled() {
                tracing::debug!(%cursor, "pagination cancelled");
                return Poll::Ready(None);
            }

            this.pending_fetch = Some((this.fetch_page)(cursor));
        }
    }
}

impl<T> Unpin for PaginatedStream<T> {}

impl<T> std::fmt::Debug for PaginatedStream<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaginatedStream")
            .field("cursor", &self.cursor)
            .field("buffered", &self.buffered.len())
            .field("pages_fetched", &self.pages_fetched)
            .field("fetching", &self.pending_fetch.is_some())
            .finish()
    }
}
