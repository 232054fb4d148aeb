//! HTTP client and request pipeline for the Bank Account Data API.
//!
//! This module provides the main entry point [`BankDataClient`]. Every
//! service call funnels through the same four primitives (fetch one, create,
//! replace, delete) plus the pagination walker built on top of fetch one.
//!
//! # Example
//!
//! ```no_run
//! use bankdata_rs::{BankDataClient, ClientConfig, Credentials};
//!
//! # async fn example() -> bankdata_rs::Result<()> {
//! let client = BankDataClient::with_config(
//!     Credentials::new("secret-id", "secret-key"),
//!     ClientConfig::default().with_timezone(chrono_tz::Europe::Paris),
//! )?;
//!
//! let institutions = client.institutions().list("fr").await?;
//! # Ok(())
//! # }
//! ```

pub mod codec;
mod config;
mod http;
pub mod paginated;

pub use codec::JsonCodec;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use http::BankDataClient;
pub use paginated::{PageFuture, PaginatedList, PaginatedStream, DEFAULT_PAGE_SIZE};
pub(crate) use http::ClientInner;
