//! End-user agreements service.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::client::{ClientInner, PaginatedStream};
use crate::models::{AcceptAgreement, AgreementId, EndUserAgreement, NewAgreement};
use crate::Result;

use super::{first_page, API_PREFIX};

/// Service for end-user agreement operations.
///
/// # Example
///
/// ```no_run
/// use bankdata_rs::models::NewAgreement;
///
/// # async fn example(client: bankdata_rs::BankDataClient) -> bankdata_rs::Result<()> {
/// let agreement = client
///     .agreements()
///     .create(&NewAgreement::new("SANDBOXFINANCE_SFIN0000").max_historical_days(90))
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct AgreementsService {
    inner: Arc<ClientInner>,
}

impl AgreementsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Stream all agreements, `limit` per page.
    pub fn list(&self, limit: Option<u32>) -> PaginatedStream<EndUserAgreement> {
        self.list_with_cancellation(limit, CancellationToken::new())
    }

    /// Stream all agreements, stopping before the next page once `cancel` fires.
    pub fn list_with_cancellation(
        &self,
        limit: Option<u32>,
        cancel: CancellationToken,
    ) -> PaginatedStream<EndUserAgreement> {
        PaginatedStream::from_client(
            self.inner.clone(),
            first_page("agreements/enduser", limit),
            cancel,
        )
    }

    /// Get a single agreement.
    pub async fn get(&self, id: &AgreementId) -> Result<Option<EndUserAgreement>> {
        self.inner.get(&Self::path(id)).await
    }

    /// Create an agreement.
    pub async fn create(&self, agreement: &NewAgreement) -> Result<Option<EndUserAgreement>> {
        self.inner
            .post(&format!("{}/agreements/enduser/", API_PREFIX), agreement)
            .await
    }

    /// Accept an agreement on behalf of the end user.
    pub async fn accept(
        &self,
        id: &AgreementId,
        acceptance: &AcceptAgreement,
    ) -> Result<Option<EndUserAgreement>> {
        self.inner
            .put(&format!("{}accept/", Self::path(id)), acceptance)
            .await
    }

    /// Delete an agreement.
    pub async fn delete(&self, id: &AgreementId) -> Result<()> {
        self.inner.delete(&Self::path(id)).await
    }

    fn path(id: &AgreementId) -> String {
        format!("{}/agreements/enduser/{}/", API_PREFIX, id)
    }
}
