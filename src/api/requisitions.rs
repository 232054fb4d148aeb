//! Requisitions service.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::client::{ClientInner, PaginatedStream};
use crate::models::{NewRequisition, Requisition, RequisitionId};
use crate::Result;

use super::{first_page, API_PREFIX};

/// Service for requisition operations.
///
/// # Example
///
/// ```no_run
/// use bankdata_rs::models::NewRequisition;
///
/// # async fn example(client: bankdata_rs::BankDataClient) -> bankdata_rs::Result<()> {
/// let requisition = client
///     .requisitions()
///     .create(&NewRequisition::new("https://app.example/callback", "SANDBOXFINANCE_SFIN0000"))
///     .await?;
///
/// if let Some(requisition) = requisition {
///     println!("Send the user to {:?}", requisition.link);
/// }
/// # Ok(())
/// # }
/// ```
pub struct RequisitionsService {
    inner: Arc<ClientInner>,
}

impl RequisitionsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Stream all requisitions, `limit` per page.
    pub fn list(&self, limit: Option<u32>) -> PaginatedStream<Requisition> {
        self.list_with_cancellation(limit, CancellationToken::new())
    }

    /// Stream all requisitions, stopping before the next page once `cancel` fires.
    pub fn list_with_cancellation(
        &self,
        limit: Option<u32>,
        cancel: CancellationToken,
    ) -> PaginatedStream<Requisition> {
        PaginatedStream::from_client(self.inner.clone(), first_page("requisitions", limit), cancel)
    }

    /// Get a single requisition.
    pub async fn get(&self, id: &RequisitionId) -> Result<Option<Requisition>> {
        self.inner.get(&Self::path(id)).await
    }

    /// Create a requisition.
    pub async fn create(&self, requisition: &NewRequisition) -> Result<Option<Requisition>> {
        self.inner
            .post(&format!("{}/requisitions/", API_PREFIX), requisition)
            .await
    }

    /// Delete a requisition and the end user's access with it.
    pub async fn delete(&self, id: &RequisitionId) -> Result<()> {
        self.inner.delete(&Self::path(id)).await
    }

    fn path(id: &RequisitionId) -> String {
        format!("{}/requisitions/{}/", API_PREFIX, id)
    }
}
