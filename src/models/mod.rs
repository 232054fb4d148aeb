//! Data models for the Bank Account Data API.
//!
//! - [`primitives`] - Identifier newtypes (`AccountId`, `RequisitionId`, ...)
//! - [`enums`] - String enums (scopes, statuses, balance types)
//! - [`institution`] - Supported banks
//! - [`agreement`] - End-user agreements
//! - [`requisition`] - Requisitions (bank authentication journeys)
//! - [`account`] - Account metadata and details
//! - [`balance`] - Balances and amounts
//! - [`transaction`] - Transactions

pub mod primitives;
pub mod enums;
pub mod institution;
pub mod agreement;
pub mod requisition;
pub mod account;
pub mod balance;
pub mod transaction;

pub use primitives::*;
pub use enums::*;
pub use institution::*;
pub use agreement::*;
pub use requisition::*;
pub use account::*;
pub use balance::*;
pub use transaction::*;
