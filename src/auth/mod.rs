//! Authentication for the Bank Account Data API.
//!
//! The API issues short-lived bearer tokens in exchange for a secret
//! identifier/key pair created in the provider's dashboard. A
//! [`TokenManager`] performs that exchange; the client calls it at most once
//! per instance, on the first request, and reuses the resulting [`Token`]
//! for every later call.
//!
//! ```no_run
//! use bankdata_rs::auth::Credentials;
//!
//! # fn example() -> bankdata_rs::Result<()> {
//! // Explicit credentials
//! let credentials = Credentials::new("secret-id", "secret-key");
//!
//! // Or from BANKDATA_SECRET_ID / BANKDATA_SECRET_KEY
//! let credentials = Credentials::from_env()?;
//! # Ok(())
//! # }
//! ```

mod token;

pub use token::{Credentials, Token, TokenManager, SECRET_ID_ENV, SECRET_KEY_ENV, TOKEN_PATH};
