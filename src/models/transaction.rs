//! Transaction models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::account::AccountReference;
use super::balance::Amount;
use crate::client::codec;

/// Wrapper returned by the transactions endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct TransactionsResponse {
    #[serde(default)]
    pub transactions: TransactionList,
}

/// Booked and pending transactions of an account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionList {
    /// Settled transactions
    #[serde(default)]
    pub booked: Vec<Transaction>,
    /// Transactions not yet booked
    #[serde(default)]
    pub pending: Vec<Transaction>,
}

impl TransactionList {
    /// Total number of booked and pending transactions.
    pub fn len(&self) -> usize {
        self.booked.len() + self.pending.len()
    }

    /// Returns `true` if there are no transactions at all.
    pub fn is_empty(&self) -> bool {
        self.booked.is_empty() && self.pending.is_empty()
    }
}

/// A single transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Bank-assigned transaction id
    #[serde(default)]
    pub transaction_id: Option<String>,
    /// Id assigned by the API when the bank provides none
    #[serde(default)]
    pub internal_transaction_id: Option<String>,
    /// Entry reference
    #[serde(default)]
    pub entry_reference: Option<String>,
    /// End-to-end id
    #[serde(default)]
    pub end_to_end_id: Option<String>,
    /// Booking date
    #[serde(default)]
    pub booking_date: Option<NaiveDate>,
    /// Value date
    #[serde(default)]
    pub value_date: Option<NaiveDate>,
    /// Booking timestamp, when the bank reports one
    #[serde(default, with = "codec::datetime_opt")]
    pub booking_date_time: Option<DateTime<Utc>>,
    /// Value timestamp
    #[serde(default, with = "codec::datetime_opt")]
    pub value_date_time: Option<DateTime<Utc>>,
    /// Signed amount; negative for debits
    pub transaction_amount: Amount,
    /// Creditor name
    #[serde(default)]
    pub creditor_name: Option<String>,
    /// Creditor account
    #[serde(default)]
    pub creditor_account: Option<AccountReference>,
    /// Debtor name
    #[serde(default)]
    pub debtor_name: Option<String>,
    /// Debtor account
    #[serde(default)]
    pub debtor_account: Option<AccountReference>,
    /// Free-text remittance information
    #[serde(default)]
    pub remittance_information_unstructured: Option<String>,
    /// Multi-line free-text remittance information
    #[serde(default)]
    pub remittance_information_unstructured_array: Vec<String>,
    /// Structured remittance reference
    #[serde(default)]
    pub remittance_information_structured: Option<String>,
    /// ISO 20022 bank transaction code
    #[serde(default)]
    pub bank_transaction_code: Option<String>,
    /// Bank-specific transaction code
    #[serde(default)]
    pub proprietary_bank_transaction_code: Option<String>,
    /// Additional information
    #[serde(default)]
    pub additional_information: Option<String>,
}

impl Transaction {
    /// Returns `true` if money came into the account.
    pub fn is_credit(&self) -> bool {
        !self.transaction_amount.is_negative()
    }

    /// Best available date for ordering: booking date, then value date.
    pub fn date(&self) -> Option<NaiveDate> {
        self.booking_date
            .or(self.value_date)
            .or_else(|| self.booking_date_time.map(|dt| dt.date_naive()))
    }

    /// Remittance text, joining the array form when the single field is absent.
    pub fn remittance(&self) -> Option<String> {
        match &self.remittance_information_unstructured {
            Some(text) => Some(text.clone()),
            None if !self.remittance_information_unstructured_array.is_empty() => {
                Some(self.remittance_information_unstructured_array.join(" "))
            }
            None => None,
        }
    }
}
