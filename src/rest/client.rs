//! Gemini REST API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::auth::{
    CredentialsProvider, HeaderNames, NonceProvider, TimestampNonce, sign_request, versioned_path,
};
use crate::error::GeminiError;
use crate::rest::endpoints::{API_VERSION, Environment};
use crate::rest::private::{
    CancelAllResponse, CurrencyBalance, NewOrderRequest, Order, WithdrawRequest, Withdrawal,
};
use crate::rest::public::{OrderBook, OrderBookRequest, TickerStatus, Trade, TradesRequest};
use crate::rest::response::{RawResponse, parse_typed};
use crate::rest::traits::GeminiClient;
use crate::types::{Currency, Symbol};

/// Default timeout applied to every request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Parameter set with no fields.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub(crate) struct Empty {}

/// The Gemini REST API client.
///
/// Public endpoints work without credentials. Private endpoints sign each
/// request with the configured credentials provider and nonce provider.
///
/// # Example
///
/// ```rust,no_run
/// use gemini_api_client::rest::RestClient;
/// use gemini_api_client::types::Symbol;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = RestClient::new();
///     let ticker = client.get_ticker(Symbol::BtcUsd).await?;
///     println!("{ticker}");
///     Ok(())
/// }
/// ```
///
/// For private endpoints, provide credentials:
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use gemini_api_client::auth::{EnvStore, StoreCredentials, DEFAULT_NAMESPACE};
/// use gemini_api_client::rest::RestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = StoreCredentials::new(Arc::new(EnvStore), DEFAULT_NAMESPACE);
///     let client = RestClient::builder()
///         .credentials(Arc::new(credentials))
///         .build();
///
///     for balance in client.get_balances().await? {
///         println!("{balance}");
///     }
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct RestClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Arc<dyn NonceProvider>,
    header_names: HeaderNames,
    timeout: Duration,
}

impl RestClient {
    /// Create a sandbox client with default settings.
    ///
    /// This client can only access public endpoints.
    /// Use [`RestClient::builder()`] to configure credentials for private endpoints.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> RestClientBuilder {
        RestClientBuilder::new()
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Timeout applied to every request.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Whether a credentials provider is configured.
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Issue a GET to `{base_url}/{API_VERSION}/{path}` with URL-encoded query parameters.
    pub async fn get<Q>(&self, path: &str, query: &Q) -> Result<RawResponse, GeminiError>
    where
        Q: Serialize + ?Sized,
    {
        let mut url = Url::parse(&format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            API_VERSION,
            path.trim_start_matches('/')
        ))?;
        let query_string = serde_urlencoded::to_string(query)
            .map_err(|e| GeminiError::InvalidParameters(e.to_string()))?;
        if !query_string.is_empty() {
            url.set_query(Some(&query_string));
        }

        tracing::debug!(%url, "public request");
        let response = self
            .http_client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await?;
        Self::read_raw(response).await
    }

    /// Sign `params` and POST them to `{base_url}/{API_VERSION}/{path}`.
    ///
    /// The payload travels in the signature headers; the body is empty.
    /// Fails with [`GeminiError::CredentialsMissing`] before any network
    /// activity if no usable credentials are available.
    pub async fn post_signed<P>(&self, path: &str, params: &P) -> Result<RawResponse, GeminiError>
    where
        P: Serialize + ?Sized,
    {
        let provider = self
            .credentials
            .as_ref()
            .ok_or(GeminiError::CredentialsMissing)?;
        let credentials = provider.credentials()?;

        let nonce = self.nonce_provider.next_nonce();
        let signed = sign_request(&credentials, path, params, nonce)?;
        let headers = signed.to_header_map(&self.header_names)?;

        let url = format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            versioned_path(path)
        );
        tracing::debug!(endpoint = path, nonce, "private request");
        let response = self
            .http_client
            .post(&url)
            .headers(headers)
            .timeout(self.timeout)
            .body(Vec::<u8>::new())
            .send()
            .await?;
        Self::read_raw(response).await
    }

    /// Make a public GET request and decode the result.
    pub(crate) async fn public_get<T, Q>(&self, path: &str, query: &Q) -> Result<T, GeminiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let raw = self.get(path, query).await?;
        parse_typed(&raw)
    }

    /// Make an authenticated POST request and decode the result.
    pub(crate) async fn private_post<T, P>(&self, path: &str, params: &P) -> Result<T, GeminiError>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let raw = self.post_signed(path, params).await?;
        parse_typed(&raw)
    }

    async fn read_raw(response: reqwest::Response) -> Result<RawResponse, GeminiError> {
        let status = response.status();
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }
}

impl Default for RestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.credentials.is_some())
            .field("header_names", &self.header_names)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Builder for [`RestClient`].
pub struct RestClientBuilder {
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Option<Arc<dyn NonceProvider>>,
    header_names: HeaderNames,
    user_agent: Option<String>,
    timeout: Duration,
}

impl RestClientBuilder {
    /// Create a new builder targeting the sandbox.
    pub fn new() -> Self {
        Self {
            base_url: Environment::default().base_url().to_string(),
            credentials: None,
            nonce_provider: None,
            header_names: HeaderNames::default(),
            user_agent: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Target a predefined environment.
    pub fn environment(mut self, environment: Environment) -> Self {
        self.base_url = environment.base_url().to_string();
        self
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the credentials provider for authenticated requests.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom nonce provider.
    pub fn nonce_provider(mut self, provider: Arc<dyn NonceProvider>) -> Self {
        self.nonce_provider = Some(provider);
        self
    }

    /// Set the names of the authentication headers.
    pub fn header_names(mut self, names: HeaderNames) -> Self {
        self.header_names = names;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the timeout applied to every request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    pub fn build(self) -> RestClient {
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("gemini-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("gemini-api-client"));
        headers.insert(USER_AGENT, header_value);

        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(self.timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "HTTP client setup failed, using defaults");
                reqwest::Client::new()
            });

        // No retry middleware: a replayed private request would reuse its nonce.
        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        let nonce_provider = self
            .nonce_provider
            .unwrap_or_else(|| Arc::new(TimestampNonce::new()));

        RestClient {
            http_client: client,
            base_url: self.base_url,
            credentials: self.credentials,
            nonce_provider,
            header_names: self.header_names,
            timeout: self.timeout,
        }
    }
}

impl Default for RestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// GeminiClient trait implementation.

impl GeminiClient for RestClient {
    // ========== Public Endpoints ==========

    async fn get_symbols(&self) -> Result<Vec<String>, GeminiError> {
        RestClient::get_symbols(self).await
    }

    async fn get_ticker(&self, symbol: Symbol) -> Result<TickerStatus, GeminiError> {
        RestClient::get_ticker(self, symbol).await
    }

    async fn get_trades(
        &self,
        symbol: Symbol,
        request: &TradesRequest,
    ) -> Result<Vec<Trade>, GeminiError> {
        RestClient::get_trades(self, symbol, request).await
    }

    async fn get_order_book(
        &self,
        symbol: Symbol,
        request: &OrderBookRequest,
    ) -> Result<OrderBook, GeminiError> {
        RestClient::get_order_book(self, symbol, request).await
    }

    // ========== Private Endpoints - Orders ==========

    async fn new_order(&self, request: &NewOrderRequest) -> Result<Order, GeminiError> {
        RestClient::new_order(self, request).await
    }

    async fn cancel_order(&self, order_id: u64) -> Result<Order, GeminiError> {
        RestClient::cancel_order(self, order_id).await
    }

    async fn cancel_session_orders(&self) -> Result<CancelAllResponse, GeminiError> {
        RestClient::cancel_session_orders(self).await
    }

    async fn cancel_all_orders(&self) -> Result<CancelAllResponse, GeminiError> {
        RestClient::cancel_all_orders(self).await
    }

    async fn order_status(&self, order_id: u64) -> Result<Order, GeminiError> {
        RestClient::order_status(self, order_id).await
    }

    async fn active_orders(&self) -> Result<Vec<Order>, GeminiError> {
        RestClient::active_orders(self).await
    }

    // ========== Private Endpoints - Funds ==========

    async fn get_balances(&self) -> Result<Vec<CurrencyBalance>, GeminiError> {
        RestClient::get_balances(self).await
    }

    async fn withdraw(
        &self,
        currency: Currency,
        request: &WithdrawRequest,
    ) -> Result<Withdrawal, GeminiError> {
        RestClient::withdraw(self, currency, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let client = RestClient::new();
        assert_eq!(client.base_url(), Environment::Sandbox.base_url());
        assert_eq!(client.timeout(), DEFAULT_TIMEOUT);
        assert!(!client.has_credentials());
    }

    #[test]
    fn test_builder_overrides() {
        let client = RestClient::builder()
            .environment(Environment::Production)
            .timeout(Duration::from_secs(5))
            .build();
        assert_eq!(client.base_url(), Environment::Production.base_url());
        assert_eq!(client.timeout(), Duration::from_secs(5));
        assert!(format!("{client:?}").contains("timeout: 5s"));
    }
}
