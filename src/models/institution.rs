//! Institution (bank) models.

use serde::{Deserialize, Serialize};

use super::primitives::InstitutionId;

/// A bank supported by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Institution {
    /// Institution id used when creating agreements and requisitions
    pub id: InstitutionId,
    /// Display name
    pub name: String,
    /// Bank identifier code
    #[serde(default)]
    pub bic: Option<String>,
    /// How many days of transaction history the bank exposes
    #[serde(default)]
    pub transaction_total_days: Option<String>,
    /// Longest agreement validity the bank accepts, in days
    #[serde(default)]
    pub max_access_valid_for_days: Option<String>,
    /// ISO 3166 country codes the institution serves
    #[serde(default)]
    pub countries: Vec<String>,
    /// Logo URL
    #[serde(default)]
    pub logo: Option<String>,
}

impl Institution {
    /// Transaction history depth as a number, if the bank reports one.
    pub fn history_days(&self) -> Option<u32> {
        self.transaction_total_days.as_deref()?.trim().parse().ok()
    }

    /// Maximum agreement validity as a number, if the bank reports one.
    pub fn max_validity_days(&self) -> Option<u32> {
        self.max_access_valid_for_days.as_deref()?.trim().parse().ok()
    }
}
