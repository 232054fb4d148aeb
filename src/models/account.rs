//! Account metadata and details models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::AccountStatus;
use super::primitives::{AccountId, InstitutionId};
use crate::client::codec;

/// Account metadata held by the API itself (not fetched from the bank).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountMetadata {
    /// Account id
    pub id: AccountId,
    /// When the account was first seen
    #[serde(default, with = "codec::datetime_opt")]
    pub created: Option<DateTime<Utc>>,
    /// When account data was last fetched from the bank
    #[serde(default, with = "codec::datetime_opt")]
    pub last_accessed: Option<DateTime<Utc>>,
    /// IBAN
    #[serde(default)]
    pub iban: Option<String>,
    /// Owning institution
    #[serde(default)]
    pub institution_id: Option<InstitutionId>,
    /// Processing status
    pub status: AccountStatus,
    /// Name of the account holder
    #[serde(default)]
    pub owner_name: Option<String>,
}

/// Wrapper returned by the account details endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct AccountDetailsResponse {
    pub account: AccountDetails,
}

/// Account details as reported by the bank.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDetails {
    /// Bank-side account identifier
    #[serde(default)]
    pub resource_id: Option<String>,
    /// IBAN
    #[serde(default)]
    pub iban: Option<String>,
    /// BBAN, for banks without IBANs
    #[serde(default)]
    pub bban: Option<String>,
    /// Account currency (ISO 4217)
    #[serde(default)]
    pub currency: Option<String>,
    /// Name of the account holder
    #[serde(default)]
    pub owner_name: Option<String>,
    /// Account name given by the bank
    #[serde(default)]
    pub name: Option<String>,
    /// Account name given by the holder
    #[serde(default)]
    pub display_name: Option<String>,
    /// Product name
    #[serde(default)]
    pub product: Option<String>,
    /// ISO 20022 cash account type (e.g. `CACC`)
    #[serde(default)]
    pub cash_account_type: Option<String>,
    /// BIC
    #[serde(default)]
    pub bic: Option<String>,
    /// `PRIV` or `ORGA`
    #[serde(default)]
    pub usage: Option<String>,
}

/// Reference to a counterparty account inside a transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountReference {
    /// IBAN
    #[serde(default)]
    pub iban: Option<String>,
    /// BBAN
    #[serde(default)]
    pub bban: Option<String>,
    /// Masked card number
    #[serde(default)]
    pub masked_pan: Option<String>,
    /// Currency
    #[serde(default)]
    pub currency: Option<String>,
}
