//! End-user agreement models.
//!
//! An agreement fixes how much history can be read, for how long access
//! lasts, and which data scopes are granted. Without an explicit agreement a
//! requisition uses the institution's defaults.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::AccessScope;
use super::primitives::{AgreementId, InstitutionId};
use crate::client::codec;

/// An end-user agreement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndUserAgreement {
    /// Agreement id
    pub id: AgreementId,
    /// When the agreement was created
    #[serde(with = "codec::datetime")]
    pub created: DateTime<Utc>,
    /// Institution the agreement is for
    pub institution_id: InstitutionId,
    /// Days of transaction history that may be read
    pub max_historical_days: u32,
    /// Days the granted access stays valid
    pub access_valid_for_days: u32,
    /// Granted scopes
    #[serde(default)]
    pub access_scope: Vec<AccessScope>,
    /// When the end user accepted the agreement
    #[serde(default, with = "codec::datetime_opt")]
    pub accepted: Option<DateTime<Utc>>,
}

impl EndUserAgreement {
    /// Returns `true` once the end user has accepted the agreement.
    pub fn is_accepted(&self) -> bool {
        self.accepted.is_some()
    }

    /// When access granted under this agreement runs out, counted from acceptance.
    pub fn access_expires_at(&self) -> Option<DateTime<Utc>> {
        self.accepted
            .map(|at| at + chrono::Duration::days(i64::from(self.access_valid_for_days)))
    }
}

/// Request body for creating an agreement.
///
/// # Example
///
/// ```
/// use bankdata_rs::models::{AccessScope, NewAgreement};
///
/// let agreement = NewAgreement::new("SANDBOXFINANCE_SFIN0000")
///     .max_historical_days(180)
///     .access_valid_for_days(30)
///     .access_scope(vec![AccessScope::Balances, AccessScope::Transactions]);
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAgreement {
    /// Institution the agreement is for
    pub institution_id: InstitutionId,
    /// Days of history to request (bank default when omitted)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_historical_days: Option<u32>,
    /// Days access stays valid (bank default when omitted)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_valid_for_days: Option<u32>,
    /// Requested scopes
    pub access_scope: Vec<AccessScope>,
}

impl NewAgreement {
    /// Start an agreement request for an institution, granting every scope.
    pub fn new(institution_id: impl Into<InstitutionId>) -> Self {
        Self {
            institution_id: institution_id.into(),
            max_historical_days: None,
            access_valid_for_days: None,
            access_scope: AccessScope::ALL.to_vec(),
        }
    }

    /// Set the history depth.
    pub fn max_historical_days(mut self, days: u32) -> Self {
        self.max_historical_days = Some(days);
        self
    }

    /// Set how long access stays valid.
    pub fn access_valid_for_days(mut self, days: u32) -> Self {
        self.access_valid_for_days = Some(days);
        self
    }

    /// Replace the requested scopes.
    pub fn access_scope(mut self, scopes: Vec<AccessScope>) -> Self {
        self.access_scope = scopes;
        self
    }
}

/// Request body for accepting an agreement on the end user's behalf.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptAgreement {
    /// The end user's browser user agent
    pub user_agent: String,
    /// The end user's IP address
    pub ip_address: String,
}
