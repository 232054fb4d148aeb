//! Institutions service.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{Institution, InstitutionId};
use crate::Result;

use super::API_PREFIX;

/// Service for looking up supported banks.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: bankdata_rs::BankDataClient) -> bankdata_rs::Result<()> {
/// let banks = client.institutions().list("de").await?;
/// for bank in &banks {
///     println!("{} ({})", bank.name, bank.id);
/// }
/// # Ok(())
/// # }
/// ```
pub struct InstitutionsService {
    inner: Arc<ClientInner>,
}

impl InstitutionsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List institutions available in a country (ISO 3166 two-letter code).
    pub async fn list(&self, country: &str) -> Result<Vec<Institution>> {
        let institutions: Option<Vec<Institution>> = self
            .inner
            .get_with_query(
                &format!("{}/institutions/", API_PREFIX),
                &[("country", country)],
            )
            .await?;
        Ok(institutions.unwrap_or_default())
    }

    /// Get a single institution.
    pub async fn get(&self, id: &InstitutionId) -> Result<Option<Institution>> {
        self.inner
            .get(&format!("{}/institutions/{}/", API_PREFIX, id))
            .await
    }
}
