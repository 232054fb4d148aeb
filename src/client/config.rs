//! Client configuration options.

use std::time::Duration;

use chrono_tz::Tz;

/// Default API host.
pub const DEFAULT_BASE_URL: &str = "https://bankaccountdata.gocardless.com";

/// Configuration for the Bank Account Data client.
///
/// # Example
///
/// ```
/// use bankdata_rs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0")
///     .with_timezone(chrono_tz::Europe::London);
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Scheme and host the API paths are resolved against
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
    /// Timezone used when converting instants to calendar dates
    pub timezone: Tz,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("bankdata-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
            timezone: Tz::UTC,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at a different host (sandbox, proxy or mock server).
    ///
    /// A path on the URL is kept as a prefix for every request.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the timezone used for date conversions.
    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }
}
