//! API service modules for Bank Account Data endpoints.
//!
//! Each service maps method calls onto URL templates and hands them to the
//! client's request pipeline.

mod accounts;
mod agreements;
mod institutions;
mod requisitions;

pub use accounts::{AccountsService, TransactionsQuery};
pub use agreements::AgreementsService;
pub use institutions::InstitutionsService;
pub use requisitions::RequisitionsService;

/// Path prefix shared by every versioned endpoint.
pub(crate) const API_PREFIX: &str = "api/v2";

/// First-page path of a paginated collection.
pub(crate) fn first_page(collection: &str, limit: Option<u32>) -> String {
    let limit = limit.unwrap_or(crate::client::DEFAULT_PAGE_SIZE);
    format!("{}/{}/?limit={}&offset=0", API_PREFIX, collection, limit)
}
