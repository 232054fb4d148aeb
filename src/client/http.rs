//! HTTP client implementation for the Bank Account Data API.

use std::sync::Arc;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::OnceCell;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::api::{AccountsService, AgreementsService, InstitutionsService, RequisitionsService};
use crate::auth::{Credentials, Token, TokenManager, TOKEN_PATH};
use crate::{Error, Result};

use super::codec::JsonCodec;
use super::config::ClientConfig;
use super::paginated::PaginatedStream;

/// The main client for interacting with the Bank Account Data API.
///
/// The client is cheap to clone; clones share one connection pool and one
/// access token. No network call happens at construction: the token is
/// requested on the first API call and reused afterwards.
///
/// # Example
///
/// ```no_run
/// use bankdata_rs::{BankDataClient, Credentials};
///
/// # async fn example() -> bankdata_rs::Result<()> {
/// let client = BankDataClient::new(Credentials::new("secret-id", "secret-key"))?;
///
/// // First call acquires the token
/// let banks = client.institutions().list("gb").await?;
///
/// // Later calls reuse it
/// if let Some(bank) = banks.first() {
///     if let Some(details) = client.institutions().get(&bank.id).await? {
///         println!("{}: {:?}", details.name, details.bic);
///     }
/// }
/// # Ok(())
/// # }
/// ```
pub struct BankDataClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: Url,
    pub(crate) codec: JsonCodec,
    pub(crate) config: ClientConfig,
    tokens: TokenManager,
    token: OnceCell<Token>,
}

impl BankDataClient {
    /// Create a client with default configuration.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a client from `BANKDATA_SECRET_ID` / `BANKDATA_SECRET_KEY`.
    pub fn from_env() -> Result<Self> {
        Self::new(Credentials::from_env()?)
    }

    /// Create a client with custom configuration.
    ///
    /// # Errors
    ///
    /// Fails if the base URL does not parse or the HTTP client cannot be built.
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        let mut base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "base URL cannot be used as a base: {}",
                config.base_url
            )));
        }
        // Paths join below the base path, so it must end in a slash.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let codec = JsonCodec::new(config.timezone);
        let tokens = TokenManager::new(
            http.clone(),
            codec,
            base_url.join(TOKEN_PATH)?,
            credentials,
        );

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                codec,
                config,
                tokens,
                token: OnceCell::new(),
            }),
        })
    }

    /// Get the accounts service.
    pub fn accounts(&self) -> AccountsService {
        AccountsService::new(self.inner.clone())
    }

    /// Get the institutions service.
    pub fn institutions(&self) -> InstitutionsService {
        InstitutionsService::new(self.inner.clone())
    }

    /// Get the end-user agreements service.
    pub fn agreements(&self) -> AgreementsService {
        AgreementsService::new(self.inner.clone())
    }

    /// Get the requisitions service.
    pub fn requisitions(&self) -> RequisitionsService {
        RequisitionsService::new(self.inner.clone())
    }

    /// Whether an access token has already been acquired.
    pub fn has_token(&self) -> bool {
        self.inner.token.initialized()
    }

    /// The codec applied to every request and response body.
    pub fn codec(&self) -> &JsonCodec {
        &self.inner.codec
    }

    /// GET a single resource. `path` may be relative to the base URL or absolute.
    ///
    /// Returns `Ok(None)` for an empty or `null` body.
    pub async fn fetch_one<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        self.inner.get(path).await
    }

    /// Walk a paginated collection starting at `path`.
    pub fn paginate<T>(&self, path: &str) -> PaginatedStream<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        PaginatedStream::from_client(self.inner.clone(), path, CancellationToken::new())
    }

    /// Walk a paginated collection, stopping once `cancel` fires.
    pub fn paginate_with_cancellation<T>(
        &self,
        path: &str,
        cancel: CancellationToken,
    ) -> PaginatedStream<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        PaginatedStream::from_client(self.inner.clone(), path, cancel)
    }

    /// POST a JSON body.
    pub async fn submit_create<B, T>(&self, path: &str, body: &B) -> Result<Option<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.inner.post(path, body).await
    }

    /// PUT a JSON body.
    pub async fn submit_replace<B, T>(&self, path: &str, body: &B) -> Result<Option<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.inner.put(path, body).await
    }

    /// DELETE a resource.
    pub async fn remove(&self, path: &str) -> Result<()> {
        self.inner.delete(path).await
    }
}

impl ClientInner {
    /// Resolve a path or absolute URL against the base URL.
    ///
    /// Paths always land below the base URL's own path: `/api/v2/x/` and
    /// `api/v2/x/` resolve alike, so a prefixed base such as
    /// `https://proxy.example/bank/` is kept.
    pub(crate) fn resolve(&self, path: &str) -> Result<Url> {
        match Url::parse(path) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                Ok(self.base_url.join(path.trim_start_matches('/'))?)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Return the cached token, acquiring it on first use.
    ///
    /// Concurrent first calls wait on the same acquisition. A failed
    /// acquisition leaves the cell empty.
    async fn token(&self) -> Result<&Token> {
        self.token
            .get_or_try_init(|| async {
                tracing::debug!("no access token cached; acquiring");
                self.tokens.acquire().await
            })
            .await
    }

    /// Start an authenticated request.
    async fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self.resolve(path)?;
        let authorization = self.token().await?.authorization()?;

        tracing::debug!(%method, %url, "sending request");

        Ok(self
            .http
            .request(method, url)
            .header(AUTHORIZATION, authorization)
            .header(ACCEPT, "application/json"))
    }

    /// Make a GET request.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        let response = self
            .request(Method::GET, path)
            .await?
            .send()
            .await?
            .error_for_status()?;

        self.decode(response).await
    }

    /// Make a GET request with query parameters.
    pub(crate) async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<Option<T>> {
        let response = self
            .request(Method::GET, path)
            .await?
            .query(query)
            .send()
            .await?
            .error_for_status()?;

        self.decode(response).await
    }

    /// Make a POST request.
    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<Option<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.submit(Method::POST, path, body).await
    }

    /// Make a PUT request.
    pub(crate) async fn put<B, T>(&self, path: &str, body: &B) -> Result<Option<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.submit(Method::PUT, path, body).await
    }

    /// Make a DELETE request.
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let response = self.request(Method::DELETE, path).await?.send().await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    async fn submit<B, T>(&self, method: Method, path: &str, body: &B) -> Result<Option<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let payload = self.codec.encode(body)?;

        let response = self
            .request(method, path)
            .await?
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        self.decode(response).await
    }

    async fn decode<T: DeserializeOwned>(&self, response: Response) -> Result<Option<T>> {
        let body = response.bytes().await?;
        self.codec.decode(&body)
    }

    /// Turn a non-success response into [`Error::RequestFailed`] with the raw body.
    async fn ensure_success(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await?;
        tracing::debug!(status = status.as_u16(), "request failed");
        Err(Error::RequestFailed {
            status: status.as_u16(),
            body,
        })
    }
}

impl Clone for BankDataClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for BankDataClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BankDataClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("config", &self.inner.config)
            .field("authenticated", &self.has_token())
            .finish()
    }
}
