//! Enumeration types for the Bank Account Data API.
//!
//! All enums travel as their string names.

use serde::{Deserialize, Serialize};

/// Data an end-user agreement grants access to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessScope {
    /// Account balances
    Balances,
    /// Account holder and account details
    Details,
    /// Booked and pending transactions
    Transactions,
}

impl AccessScope {
    /// Every scope, the default grant for a new agreement.
    pub const ALL: [AccessScope; 3] = [
        AccessScope::Balances,
        AccessScope::Details,
        AccessScope::Transactions,
    ];
}

/// Lifecycle state of a requisition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequisitionStatus {
    /// Requisition has been created
    #[serde(rename = "CR")]
    Created,
    /// End user is giving consent
    #[serde(rename = "GC")]
    GivingConsent,
    /// End user is redirected to the bank for authentication
    #[serde(rename = "UA")]
    UndergoingAuthentication,
    /// Authentication or consent was rejected
    #[serde(rename = "RJ")]
    Rejected,
    /// End user is selecting accounts
    #[serde(rename = "SA")]
    SelectingAccounts,
    /// End user is granting access to account information
    #[serde(rename = "GA")]
    GrantingAccess,
    /// Accounts are linked and data can be fetched
    #[serde(rename = "LN")]
    Linked,
    /// Access has been suspended
    #[serde(rename = "SU")]
    Suspended,
    /// Access to accounts has expired
    #[serde(rename = "EX")]
    Expired,
    /// A status this client does not know about
    #[serde(other)]
    Unknown,
}

impl RequisitionStatus {
    /// Returns `true` once account data can be read.
    pub fn is_linked(&self) -> bool {
        matches!(self, RequisitionStatus::Linked)
    }

    /// Returns `true` if the requisition will not progress any further.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RequisitionStatus::Rejected | RequisitionStatus::Suspended | RequisitionStatus::Expired
        )
    }
}

/// Processing state of a linked account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    /// Account discovered, not yet processed
    Discovered,
    /// Account data is being processed
    Processing,
    /// Account data is available
    Ready,
    /// Processing failed
    Error,
    /// Account suspended after repeated failures
    Suspended,
    /// Access to the account has expired
    Expired,
    /// A status this client does not know about
    #[serde(other)]
    Unknown,
}

/// Balance type as defined by the Berlin Group standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BalanceType {
    /// Balance at the end of the reporting period
    ClosingBooked,
    /// Balance including pending transactions
    Expected,
    /// Opening balance of the reporting period
    OpeningBooked,
    /// Available balance during the day
    InterimAvailable,
    /// Booked balance during the day
    InterimBooked,
    /// Forward available balance
    ForwardAvailable,
    /// Balance not yet invoiced (card accounts)
    NonInvoiced,
    /// A balance type this client does not know about
    #[serde(other)]
    Unknown,
}
