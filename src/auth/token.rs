//! Credentials, bearer tokens and the token endpoint exchange.

use reqwest::header::{HeaderValue, ACCEPT, CONTENT_TYPE};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::client::JsonCodec;
use crate::{Error, Result};

/// Path of the token endpoint, relative to the API base URL.
pub const TOKEN_PATH: &str = "api/v2/token/new/";

/// Environment variable holding the secret identifier.
pub const SECRET_ID_ENV: &str = "BANKDATA_SECRET_ID";

/// Environment variable holding the secret key.
pub const SECRET_KEY_ENV: &str = "BANKDATA_SECRET_KEY";

/// Secret identifier and key used to obtain access tokens.
///
/// Immutable once built. Neither half is ever printed by `Debug`.
#[derive(Clone)]
pub struct Credentials {
    secret_id: SecretString,
    secret_key: SecretString,
}

impl Credentials {
    /// Create credentials from a secret identifier and key.
    pub fn new(secret_id: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            secret_id: SecretString::from(secret_id.into()),
            secret_key: SecretString::from(secret_key.into()),
        }
    }

    /// Read credentials from `BANKDATA_SECRET_ID` and `BANKDATA_SECRET_KEY`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if either variable is unset or empty.
    pub fn from_env() -> Result<Self> {
        let read = |name: &str| {
            std::env::var(name)
                .ok()
                .filter(|v| !v.is_empty())
                .ok_or_else(|| Error::Config(format!("{} is not set", name)))
        };
        Ok(Self::new(read(SECRET_ID_ENV)?, read(SECRET_KEY_ENV)?))
    }

    pub(crate) fn secret_id(&self) -> &str {
        self.secret_id.expose_secret()
    }

    pub(crate) fn secret_key(&self) -> &str {
        self.secret_key.expose_secret()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("secret_id", &"[REDACTED]")
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

/// An access token issued for a set of [`Credentials`].
///
/// Expiry is not tracked: a token lives as long as the client holding it.
#[derive(Clone)]
pub struct Token {
    access: SecretString,
    credentials: Credentials,
}

impl Token {
    pub(crate) fn new(access: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            access: SecretString::from(access.into()),
            credentials,
        }
    }

    /// The credentials this token was issued for.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Build the `Authorization: Bearer ...` header value.
    pub(crate) fn authorization(&self) -> Result<HeaderValue> {
        let mut value =
            HeaderValue::from_str(&format!("Bearer {}", self.access.expose_secret()))
                .map_err(|_| Error::InvalidInput("Invalid token format".to_string()))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("access", &"[REDACTED]")
            .finish()
    }
}

/// Exchanges [`Credentials`] for a [`Token`] at the token endpoint.
///
/// One manager belongs to one client. It holds no token itself; caching is
/// the caller's business.
#[derive(Debug, Clone)]
pub struct TokenManager {
    http: reqwest::Client,
    codec: JsonCodec,
    endpoint: Url,
    credentials: Credentials,
}

impl TokenManager {
    /// Create a manager that posts to `endpoint`, encoding bodies with `codec`.
    pub fn new(
        http: reqwest::Client,
        codec: JsonCodec,
        endpoint: Url,
        credentials: Credentials,
    ) -> Self {
        Self {
            http,
            codec,
            endpoint,
            credentials,
        }
    }

    /// The token endpoint this manager posts to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Request a new access token.
    ///
    /// # Errors
    ///
    /// A non-success status is returned as [`Error::Http`] and an empty or
    /// malformed body as [`Error::Json`], both untranslated.
    pub async fn acquire(&self) -> Result<Token> {
        tracing::debug!(endpoint = %self.endpoint, "requesting access token");

        let payload = self.codec.encode(&TokenRequest {
            secret_id: self.credentials.secret_id(),
            secret_key: self.credentials.secret_key(),
        })?;

        let response = self
            .http
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(payload)
            .send()
            .await?
            .error_for_status()?;

        let body = response.bytes().await?;
        let token: TokenResponse = self.codec.decode(&body)?.ok_or_else(|| {
            Error::Json(serde::de::Error::custom("token endpoint returned no body"))
        })?;
        Ok(Token::new(token.access, self.credentials.clone()))
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TokenRequest<'a> {
    secret_id: &'a str,
    secret_key: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    access: String,
}
