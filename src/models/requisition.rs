//! Requisition models.
//!
//! A requisition is the end user's journey through bank authentication; once
//! it reaches [`RequisitionStatus::Linked`] its `accounts` can be queried.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::RequisitionStatus;
use super::primitives::{AccountId, AgreementId, InstitutionId, RequisitionId};
use crate::client::codec;

/// A requisition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requisition {
    /// Requisition id
    pub id: RequisitionId,
    /// When the requisition was created
    #[serde(default, with = "codec::datetime_opt")]
    pub created: Option<DateTime<Utc>>,
    /// Where the end user is sent after authentication
    #[serde(default)]
    pub redirect: Option<String>,
    /// Current status
    pub status: RequisitionStatus,
    /// Institution being linked
    pub institution_id: InstitutionId,
    /// Agreement governing access, if one was supplied
    #[serde(default)]
    pub agreement: Option<AgreementId>,
    /// Caller-supplied reference
    #[serde(default)]
    pub reference: Option<String>,
    /// Accounts linked through this requisition
    #[serde(default)]
    pub accounts: Vec<AccountId>,
    /// Language of the authentication UI
    #[serde(default)]
    pub user_language: Option<String>,
    /// Link the end user opens to start authentication
    #[serde(default)]
    pub link: Option<String>,
    /// Social security number check, where the bank supports it
    #[serde(default)]
    pub ssn: Option<String>,
    /// Whether the end user picks which accounts to share
    #[serde(default)]
    pub account_selection: bool,
    /// Whether to redirect without the confirmation screen
    #[serde(default)]
    pub redirect_immediate: bool,
}

/// Request body for creating a requisition.
///
/// # Example
///
/// ```
/// use bankdata_rs::models::NewRequisition;
///
/// let requisition = NewRequisition::new("https://app.example/callback", "SANDBOXFINANCE_SFIN0000")
///     .reference("user-42")
///     .user_language("EN");
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRequisition {
    /// Where the end user is sent after authentication
    pub redirect: String,
    /// Institution to link
    pub institution_id: InstitutionId,
    /// Caller-supplied reference (must be unique per requisition)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Agreement to use instead of the bank's defaults
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agreement: Option<AgreementId>,
    /// Language of the authentication UI (ISO 639-1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_language: Option<String>,
    /// Let the end user choose accounts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_selection: Option<bool>,
    /// Skip the confirmation screen on redirect
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_immediate: Option<bool>,
}

impl NewRequisition {
    /// Start a requisition request.
    pub fn new(redirect: impl Into<String>, institution_id: impl Into<InstitutionId>) -> Self {
        Self {
            redirect: redirect.into(),
            institution_id: institution_id.into(),
            reference: None,
            agreement: None,
            user_language: None,
            account_selection: None,
            redirect_immediate: None,
        }
    }

    /// Set the caller reference.
    pub fn reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    /// Attach an agreement.
    pub fn agreement(mut self, agreement: impl Into<AgreementId>) -> Self {
        self.agreement = Some(agreement.into());
        self
    }

    /// Set the UI language.
    pub fn user_language(mut self, language: impl Into<String>) -> Self {
        self.user_language = Some(language.into());
        self
    }

    /// Let the end user choose which accounts to share.
    pub fn account_selection(mut self, enabled: bool) -> Self {
        self.account_selection = Some(enabled);
        self
    }

    /// Skip the confirmation screen on redirect.
    pub fn redirect_immediate(mut self, enabled: bool) -> Self {
        self.redirect_immediate = Some(enabled);
        self
    }
}
