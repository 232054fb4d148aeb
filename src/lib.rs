//! # bankdata-rs
//!
//! An async Rust client for the GoCardless Bank Account Data API (formerly
//! Nordigen), the open-banking service that reads balances and transactions
//! from European banks.
//!
//! ## Features
//!
//! - **Lazy authentication**: the access token is requested on the first
//!   call and shared by every later call of the same client
//! - **Typed resources**: institutions, end-user agreements, requisitions,
//!   account metadata, details, balances and transactions
//! - **Pagination**: list endpoints return a [`futures_util::Stream`] that
//!   follows `next` links on demand and honours a cancellation token
//! - **Uniform errors**: failed create/replace/delete calls always carry the
//!   status code and the raw response body
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bankdata_rs::{BankDataClient, Credentials};
//! use bankdata_rs::models::{NewAgreement, NewRequisition};
//!
//! #[tokio::main]
//! async fn main() -> bankdata_rs::Result<()> {
//!     let client = BankDataClient::new(Credentials::new("secret-id", "secret-key"))?;
//!
//!     // Pick a bank
//!     let banks = client.institutions().list("gb").await?;
//!     let bank = &banks[0];
//!
//!     // Agree on access terms, then start the end user's journey
//!     let agreement = client
//!         .agreements()
//!         .create(&NewAgreement::new(bank.id.clone()).max_historical_days(90))
//!         .await?;
//!
//!     let mut request = NewRequisition::new("https://app.example/callback", bank.id.clone());
//!     if let Some(agreement) = agreement {
//!         request = request.agreement(agreement.id);
//!     }
//!     let requisition = client.requisitions().create(&request).await?;
//!     println!("Authenticate at {:?}", requisition.and_then(|r| r.link));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Pagination Example
//!
//! ```rust,no_run
//! use futures_util::StreamExt;
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example(client: bankdata_rs::BankDataClient) -> bankdata_rs::Result<()> {
//! let cancel = CancellationToken::new();
//! let mut requisitions = client.requisitions().list_with_cancellation(Some(50), cancel.clone());
//!
//! while let Some(requisition) = requisitions.next().await {
//!     let requisition = requisition?;
//!     for account in &requisition.accounts {
//!         let balances = client.accounts().balances(account).await?;
//!         println!("{}: {} balances", account, balances.len());
//!     }
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use auth::Credentials;
pub use client::{BankDataClient, ClientConfig, PaginatedList, PaginatedStream};
pub use error::{Error, Result};
pub use models::{AccountId, AgreementId, InstitutionId, RequisitionId};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bankdata_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::TransactionsQuery;
    pub use crate::auth::Credentials;
    pub use crate::client::{BankDataClient, ClientConfig, PaginatedStream};
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        // Identifiers
        AccountId, AgreementId, InstitutionId, RequisitionId,
        // Enums
        AccessScope, AccountStatus, BalanceType, RequisitionStatus,
        // Resources
        AccountDetails, AccountMetadata, Amount, Balance, EndUserAgreement, Institution,
        Requisition, Transaction, TransactionList,
        // Requests
        AcceptAgreement, NewAgreement, NewRequisition,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_id_creation() {
        let account = AccountId::new("7e944232-bda9-40bc-b784-660c7ab5fe78");
        assert_eq!(account.as_str(), "7e944232-bda9-40bc-b784-660c7ab5fe78");
    }

    #[test]
    fn test_default_base_url() {
        assert_eq!(
            ClientConfig::default().base_url,
            "https://bankaccountdata.gocardless.com"
        );
    }
}
