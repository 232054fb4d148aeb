//! Balance models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::BalanceType;
use crate::client::codec;

/// A monetary amount. The API sends amounts as decimal strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    /// Signed amount
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    /// Currency (ISO 4217)
    pub currency: String,
}

impl Amount {
    /// Returns `true` for amounts below zero.
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }
}

/// Wrapper returned by the balances endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct BalancesResponse {
    #[serde(default)]
    pub balances: Vec<Balance>,
}

/// A single account balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    /// Balance amount
    pub balance_amount: Amount,
    /// Which balance this is
    pub balance_type: BalanceType,
    /// Whether a credit limit is included in the amount
    #[serde(default)]
    pub credit_limit_included: Option<bool>,
    /// Date the balance refers to
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
    /// When the balance last changed
    #[serde(default, with = "codec::datetime_opt")]
    pub last_change_date_time: Option<DateTime<Utc>>,
    /// Id of the last transaction included in the balance
    #[serde(default)]
    pub last_committed_transaction: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_deserialize_balances() {
        let json = r#"{"balances": [
            {
                "balanceAmount": {"amount": "657.49", "currency": "EUR"},
                "balanceType": "interimAvailable",
                "referenceDate": "2024-03-02"
            },
            {
                "balanceAmount": {"amount": "-12.00", "currency": "EUR"},
                "balanceType": "expected",
                "lastChangeDateTime": "2024-03-02T08:15:00+01:00"
            }
        ]}"#;

        let response: BalancesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.balances.len(), 2);

        let first = &response.balances[0];
        assert_eq!(first.balance_amount.amount, dec!(657.49));
        assert_eq!(first.balance_type, BalanceType::InterimAvailable);
        assert_eq!(first.reference_date, NaiveDate::from_ymd_opt(2024, 3, 2));
        assert!(!first.balance_amount.is_negative());

        let second = &response.balances[1];
        assert!(second.balance_amount.is_negative());
        assert_eq!(
            codec::format_instant(&second.last_change_date_time.unwrap()),
            "2024-03-02T07:15:00Z"
        );
    }

    #[test]
    fn test_amount_serializes_as_string() {
        let amount = Amount {
            amount: dec!(10.50),
            currency: "GBP".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&amount).unwrap(),
            r#"{"amount":"10.50","currency":"GBP"}"#
        );
    }
}
