//! Identifier newtypes.
//!
//! Each resource has its own id type so an account id cannot be passed where
//! a requisition id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new identifier from a string.
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// Get the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

string_id!(
    /// A bank account id (UUID assigned by the API).
    ///
    /// ```
    /// use bankdata_rs::AccountId;
    ///
    /// let account = AccountId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6");
    /// assert_eq!(account.as_str(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
    /// ```
    AccountId
);

string_id!(
    /// A requisition id.
    RequisitionId
);

string_id!(
    /// An end-user agreement id.
    AgreementId
);

string_id!(
    /// An institution id, e.g. `SANDBOXFINANCE_SFIN0000`.
    InstitutionId
);
