//! Accounts REST API client implementation.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, RequestBuilder};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use reqwest_tracing::TracingMiddleware;
use serde::Serialize;
use uuid::Uuid;

use crate::error::{AccountsError, ApiError};
use crate::rest::endpoints::{
    ACCOUNTS, DEFAULT_BASE_URL, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT, env,
};
use crate::rest::traits::AccountsApi;
use crate::types::{AccountData, AccountList, AccountRequest, AccountResponse, ErrorBody, Filter, ListQuery, Page};
use crate::validation::validate_account;

/// The accounts REST API client.
///
/// Handles request construction, JSON (de)serialization, client-side
/// validation, and automatic retries of transient failures.
///
/// # Example
///
/// ```rust,no_run
/// use accounts_api_client::rest::AccountsClient;
/// use accounts_api_client::types::{Account, AccountData};
/// use uuid::Uuid;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = AccountsClient::builder()
///         .base_url("http://localhost:8080")
///         .build()?;
///
///     let organisation_id = Uuid::new_v4();
///     let data = AccountData::with_random_id(organisation_id, Account::new("GB").bank_id("400302"));
///     let created = client.create(data).await?;
///
///     let fetched = client.fetch(created.data.id).await?;
///     println!("Fetched account: {:?}", fetched.data.attributes);
///
///     client.delete(created.data.id, fetched.data.version.unwrap_or(0)).await?;
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct AccountsClient {
    http_client: ClientWithMiddleware,
    base_url: String,
}

impl AccountsClient {
    /// Create a client for the default local base URL.
    pub fn new() -> Result<Self, AccountsError> {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> AccountsClientBuilder {
        AccountsClientBuilder::new()
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn accounts_url(&self) -> String {
        format!("{}{}", self.base_url, ACCOUNTS)
    }

    fn account_url(&self, id: Uuid) -> String {
        format!("{}{}/{}", self.base_url, ACCOUNTS, id)
    }

    /// Build the list URL for an optional page and filter.
    pub fn list_url(&self, page: Option<&Page>, filter: Option<&Filter>) -> Result<String, AccountsError> {
        let query = ListQuery::new(page, filter);
        if query.is_empty() {
            return Ok(self.accounts_url());
        }
        Ok(format!("{}?{}", self.accounts_url(), query.to_query_string()?))
    }

    // HTTP request methods.

    async fn send(&self, request: RequestBuilder) -> Result<reqwest::Response, AccountsError> {
        let response = request.send().await?;
        let status = response.status();
        if is_success(status) {
            return Ok(response);
        }
        Err(self.api_error(response).await)
    }

    async fn send_json<T>(&self, request: RequestBuilder) -> Result<T, AccountsError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.send(request).await?;
        let body = response.text().await?;
        serde_json::from_str::<T>(&body).map_err(|e| {
            AccountsError::InvalidResponse(format!("Failed to parse response: {}. Body: {}", e, body))
        })
    }

    /// Turn a non-success response into an [`ApiError`].
    ///
    /// The API reports failures as `{"error_message": "..."}`. When the body
    /// is something else, the raw body (or the status reason, when empty)
    /// becomes the message.
    async fn api_error(&self, response: reqwest::Response) -> AccountsError {
        let status = response.status();
        let body = match response.text().await {
            Ok(body) => Some(body),
            Err(e) => {
                tracing::warn!("Failed to read error body for {}: {}", status, e);
                None
            }
        };
        let message = error_message(status, body);

        tracing::warn!("Accounts API returned {}: {}", status, message);
        AccountsError::Api(ApiError::new(status.as_u16(), message))
    }

    // Account operations.

    /// Create an account.
    ///
    /// The attributes are validated first; an invalid request fails with
    /// [`AccountsError::Validation`] without touching the network.
    pub async fn create(&self, data: AccountData) -> Result<AccountResponse, AccountsError> {
        if let Err(e) = validate_account(&data.attributes) {
            tracing::debug!("Rejected account {} before sending: {}", data.id, e);
            return Err(e.into());
        }

        let body = serde_json::to_vec(&AccountRequest::new(data))?;
        let url = self.accounts_url();
        tracing::debug!(method = "POST", %url, "creating account");

        let request = self
            .http_client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        self.send_json(request).await
    }

    /// Fetch a single account by id.
    pub async fn fetch(&self, id: Uuid) -> Result<AccountResponse, AccountsError> {
        let url = self.account_url(id);
        tracing::debug!(method = "GET", %url, "fetching account");
        self.send_json(self.http_client.get(&url)).await
    }

    /// List accounts, optionally paginated and filtered.
    ///
    /// Without a page the server applies its own default window. Use
    /// [`list_all`](crate::rest::list_all) to walk every page.
    pub async fn list(&self, page: Option<&Page>, filter: Option<&Filter>) -> Result<AccountList, AccountsError> {
        let url = self.list_url(page, filter)?;
        tracing::debug!(method = "GET", %url, "listing accounts");
        self.send_json(self.http_client.get(&url)).await
    }

    /// Delete an account at the given version.
    ///
    /// A stale version is rejected by the server; check
    /// [`ApiError::is_conflict`] or [`ApiError::is_not_found`] to tell the
    /// cases apart.
    pub async fn delete(&self, id: Uuid, version: u64) -> Result<(), AccountsError> {
        #[derive(Serialize)]
        struct Params {
            version: u64,
        }
        let query = serde_urlencoded::to_string(Params { version })?;
        let url = format!("{}?{}", self.account_url(id), query);
        tracing::debug!(method = "DELETE", %url, "deleting account");

        self.send(self.http_client.delete(&url)).await?;
        Ok(())
    }
}

/// Pick the message for a failed response. An unreadable or empty body
/// falls back to the status reason.
fn error_message(status: StatusCode, body: Option<String>) -> String {
    let reason = || status.canonical_reason().unwrap_or("Unknown error").to_string();
    match body {
        Some(body) => match serde_json::from_str::<ErrorBody>(&body) {
            Ok(error_body) => error_body.error_message,
            Err(_) if body.trim().is_empty() => reason(),
            Err(_) => body,
        },
        None => reason(),
    }
}

impl AccountsApi for AccountsClient {
    async fn create(&self, data: AccountData) -> Result<AccountResponse, AccountsError> {
        AccountsClient::create(self, data).await
    }

    async fn fetch(&self, id: Uuid) -> Result<AccountResponse, AccountsError> {
        AccountsClient::fetch(self, id).await
    }

    async fn list(&self, page: Option<&Page>, filter: Option<&Filter>) -> Result<AccountList, AccountsError> {
        AccountsClient::list(self, page, filter).await
    }

    async fn delete(&self, id: Uuid, version: u64) -> Result<(), AccountsError> {
        AccountsClient::delete(self, id, version).await
    }
}

impl std::fmt::Debug for AccountsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountsClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// The API answers 200 for reads, 201 for creates and 204 for deletes.
fn is_success(status: StatusCode) -> bool {
    matches!(status.as_u16(), 200 | 201 | 204)
}

/// Builder for [`AccountsClient`].
pub struct AccountsClientBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: Option<String>,
    max_retries: u32,
    http_client: Option<reqwest::Client>,
}

impl AccountsClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
            max_retries: DEFAULT_MAX_RETRIES,
            http_client: None,
        }
    }

    /// Create a builder configured from the environment.
    ///
    /// Reads `ACCOUNTS_API_URL` for the base URL and `ACCOUNTS_API_TIMEOUT_SECS`
    /// for the timeout. Unset or unusable values, including a timeout of 0,
    /// keep the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create a builder from an arbitrary variable lookup.
    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let mut builder = Self::new();
        if let Some(url) = get(env::API_URL).filter(|v| !v.is_empty()) {
            builder.base_url = url;
        }
        if let Some(secs) = get(env::TIMEOUT_SECS)
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
        {
            builder.timeout = Duration::from_secs(secs);
        }
        builder
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the maximum number of retries for transient failures.
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Use a preconfigured `reqwest` client.
    ///
    /// The timeout and user agent set on this builder are ignored; configure
    /// them on the supplied client instead. Retry and tracing middleware are
    /// still applied.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the client.
    ///
    /// Fails if the base URL is not an absolute URL.
    pub fn build(self) -> Result<AccountsClient, AccountsError> {
        let base_url = url::Url::parse(&self.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(AccountsError::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase));
        }
        let base_url = self.base_url.trim_end_matches('/').to_string();

        let reqwest_client = match self.http_client {
            Some(client) => client,
            None => {
                // Build default headers.
                let mut headers = HeaderMap::new();
                let user_agent = self
                    .user_agent
                    .unwrap_or_else(|| format!("accounts-api-client/{}", env!("CARGO_PKG_VERSION")));
                let header_value = HeaderValue::from_str(&user_agent)
                    .unwrap_or_else(|_| HeaderValue::from_static("accounts-api-client"));
                headers.insert(USER_AGENT, header_value);

                reqwest::Client::builder()
                    .default_headers(headers)
                    .timeout(self.timeout)
                    .build()?
            }
        };

        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(self.max_retries);

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Ok(AccountsClient {
            http_client: client,
            base_url,
        })
    }
}

impl Default for AccountsClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> AccountsClient {
        AccountsClient::builder()
            .base_url("http://localhost:8080/")
            .build()
            .unwrap()
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        assert_eq!(client().base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let err = AccountsClient::builder().base_url("not a url").build().unwrap_err();
        assert!(matches!(err, AccountsError::Url(_)));
    }

    #[test]
    fn test_list_url_without_params() {
        assert_eq!(
            client().list_url(None, None).unwrap(),
            "http://localhost:8080/v1/organisation/accounts"
        );
    }

    #[test]
    fn test_list_url_with_page_and_filter() {
        let filter = Filter::organisation(Uuid::nil());
        let url = client().list_url(Some(&Page::new(1, 2)), Some(&filter)).unwrap();
        assert_eq!(
            url,
            "http://localhost:8080/v1/organisation/accounts?page%5Bnumber%5D=1&page%5Bsize%5D=2\
             &filter%5Borganisation_id%5D=00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn test_account_url() {
        assert_eq!(
            client().account_url(Uuid::nil()),
            "http://localhost:8080/v1/organisation/accounts/00000000-0000-0000-0000-000000000000"
        );
    }

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: Vec<(String, String)> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
    }

    #[test]
    fn test_from_lookup_defaults() {
        let builder = AccountsClientBuilder::from_lookup(lookup(&[]));
        assert_eq!(builder.base_url, DEFAULT_BASE_URL);
        assert_eq!(builder.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_from_lookup_overrides() {
        let builder = AccountsClientBuilder::from_lookup(lookup(&[
            (env::API_URL, "http://accounts.internal:9000"),
            (env::TIMEOUT_SECS, "15"),
        ]));
        assert_eq!(builder.base_url, "http://accounts.internal:9000");
        assert_eq!(builder.timeout, Duration::from_secs(15));
    }

    #[test]
    fn test_from_lookup_ignores_empty_and_invalid_values() {
        for timeout in ["", "soon", "-1", "0"] {
            let builder = AccountsClientBuilder::from_lookup(lookup(&[
                (env::API_URL, ""),
                (env::TIMEOUT_SECS, timeout),
            ]));
            assert_eq!(builder.base_url, DEFAULT_BASE_URL);
            assert_eq!(builder.timeout, DEFAULT_TIMEOUT, "timeout {timeout:?}");
        }
    }

    #[test]
    fn test_error_message() {
        let message = error_message(
            StatusCode::CONFLICT,
            Some(r#"{"error_message":"Account cannot be created as it violates a duplicate constraint"}"#.to_string()),
        );
        assert_eq!(message, "Account cannot be created as it violates a duplicate constraint");

        assert_eq!(error_message(StatusCode::BAD_REQUEST, Some("bad things".to_string())), "bad things");
        assert_eq!(error_message(StatusCode::INTERNAL_SERVER_ERROR, Some("  ".to_string())), "Internal Server Error");
        assert_eq!(error_message(StatusCode::NOT_FOUND, None), "Not Found");
    }

    #[test]
    fn test_success_statuses() {
        assert!(is_success(StatusCode::OK));
        assert!(is_success(StatusCode::CREATED));
        assert!(is_success(StatusCode::NO_CONTENT));
        assert!(!is_success(StatusCode::ACCEPTED));
        assert!(!is_success(StatusCode::NOT_FOUND));
    }
}
