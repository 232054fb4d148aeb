//! Accounts service for metadata, balances, details and transactions.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};

use crate::client::{ClientInner, JsonCodec};
use crate::models::{
    AccountDetails, AccountDetailsResponse, AccountId, AccountMetadata, Balance,
    BalancesResponse, TransactionList, TransactionsResponse,
};
use crate::Result;

use super::API_PREFIX;

/// Service for account data.
///
/// # Example
///
/// ```no_run
/// use bankdata_rs::AccountId;
///
/// # async fn example(client: bankdata_rs::BankDataClient) -> bankdata_rs::Result<()> {
/// let account = AccountId::new("7e944232-bda9-40bc-b784-660c7ab5fe78");
///
/// for balance in client.accounts().balances(&account).await? {
///     println!("{:?}: {}", balance.balance_type, balance.balance_amount.amount);
/// }
///
/// let transactions = client.accounts().transactions(&account, None).await?;
/// println!("{} booked", transactions.booked.len());
/// # Ok(())
/// # }
/// ```
pub struct AccountsService {
    inner: Arc<ClientInner>,
}

/// Date range filter for transactions. Both bounds are inclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransactionsQuery {
    /// First booking date to include
    pub date_from: Option<NaiveDate>,
    /// Last booking date to include
    pub date_to: Option<NaiveDate>,
}

impl TransactionsQuery {
    /// Transactions booked on or after `date`.
    pub fn since(date: NaiveDate) -> Self {
        Self {
            date_from: Some(date),
            date_to: None,
        }
    }

    /// Transactions booked between `from` and `to`.
    pub fn between(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            date_from: Some(from),
            date_to: Some(to),
        }
    }

    fn to_pairs(self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(from) = self.date_from {
            pairs.push(("date_from", JsonCodec::format_date(from)));
        }
        if let Some(to) = self.date_to {
            pairs.push(("date_to", JsonCodec::format_date(to)));
        }
        pairs
    }
}

impl AccountsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get account metadata.
    pub async fn get(&self, id: &AccountId) -> Result<Option<AccountMetadata>> {
        self.inner.get(&Self::path(id, "")).await
    }

    /// Get account balances. An empty body yields no balances.
    pub async fn balances(&self, id: &AccountId) -> Result<Vec<Balance>> {
        let response: Option<BalancesResponse> =
            self.inner.get(&Self::path(id, "balances/")).await?;
        Ok(response.map(|r| r.balances).unwrap_or_default())
    }

    /// Get account details.
    pub async fn details(&self, id: &AccountId) -> Result<Option<AccountDetails>> {
        let response: Option<AccountDetailsResponse> =
            self.inner.get(&Self::path(id, "details/")).await?;
        Ok(response.map(|r| r.account))
    }

    /// Get booked and pending transactions, optionally limited to a date range.
    pub async fn transactions(
        &self,
        id: &AccountId,
        query: Option<TransactionsQuery>,
    ) -> Result<TransactionList> {
        let path = Self::path(id, "transactions/");
        let response: Option<TransactionsResponse> = match query {
            Some(q) => self.inner.get_with_query(&path, &q.to_pairs()).await?,
            None => self.inner.get(&path).await?,
        };
        Ok(response.map(|r| r.transactions).unwrap_or_default())
    }

    /// Get transactions booked since `instant`.
    ///
    /// The start date is the calendar day `instant` falls on in the client's
    /// configured timezone.
    pub async fn transactions_since(
        &self,
        id: &AccountId,
        instant: DateTime<Utc>,
    ) -> Result<TransactionList> {
        let from = self.inner.codec.local_date(&instant);
        self.transactions(id, Some(TransactionsQuery::since(from)))
            .await
    }

    fn path(id: &AccountId, resource: &str) -> String {
        format!("{}/accounts/{}/{}", API_PREFIX, id, resource)
    }
}
