//! HTTP client wrapper for the backend REST API.
//!
//! This module provides the [`ApiClient`] struct: one pooled `reqwest`
//! client, a single request core parameterized by method, path, query
//! parameters, and JSON body, and the translation of every failure into
//! [`ApiError`](super::ApiError). No retries are performed at this layer;
//! retry policy, if any, is the caller's responsibility.

use std::time::Duration;

use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use super::error::{ApiError, ApiResult};

/// Default per-request timeout (30 seconds).
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default connect timeout (10 seconds).
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default API base URL when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Connection settings for [`ApiClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: String,
    timeout: Duration,
    connect_timeout: Duration,
}

impl ClientConfig {
    /// Creates a config for the given base URL.
    ///
    /// A trailing slash is trimmed so endpoint paths (`/api/...`) can be
    /// appended directly.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not a valid http(s) URL.
    pub fn new(base_url: impl Into<String>) -> ApiResult<Self> {
        let base_url = base_url.into();
        let parsed = Url::parse(&base_url)
            .map_err(|e| ApiError::unknown(format!("invalid API base URL {base_url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::unknown(format!(
                "invalid API base URL {base_url}: expected http or https"
            )));
        }
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(CONNECT_TIMEOUT_SECS),
        })
    }

    /// Overrides the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Overrides the connect timeout.
    #[must_use]
    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(CONNECT_TIMEOUT_SECS),
        }
    }
}

/// Typed HTTP client for the backend API.
///
/// Designed to be created once and shared; the underlying `reqwest` client
/// pools connections. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client from connection settings.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails with the static
    /// configuration. This should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new(config: ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()
            .expect("failed to build HTTP client with static configuration");
        Self {
            client,
            base_url: config.base_url,
        }
    }

    /// Returns the configured base URL (without trailing slash).
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET expecting a JSON body.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, Option<&str>)],
    ) -> ApiResult<T> {
        self.send(Method::GET, path, query, None::<&()>).await
    }

    /// POST with a JSON body, expecting a JSON body back.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.send(Method::POST, path, &[], Some(body)).await
    }

    /// POST where any response body (including none) means success.
    pub(crate) async fn post_empty<B: Serialize>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<()> {
        self.send_raw(Method::POST, path, &[], body).await.map(|_| ())
    }

    /// PUT with a JSON body, success-only result.
    pub(crate) async fn put_empty<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<()> {
        self.send_raw(Method::PUT, path, &[], Some(body))
            .await
            .map(|_| ())
    }

    /// PUT with a JSON body, expecting a JSON body back.
    pub(crate) async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.send(Method::PUT, path, &[], Some(body)).await
    }

    /// PATCH with a JSON body, success-only result.
    pub(crate) async fn patch_empty<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<()> {
        self.send_raw(Method::PATCH, path, &[], Some(body))
            .await
            .map(|_| ())
    }

    /// DELETE, success-only result.
    pub(crate) async fn delete_empty(&self, path: &str) -> ApiResult<()> {
        self.send_raw(Method::DELETE, path, &[], None::<&()>)
            .await
            .map(|_| ())
    }

    /// Sends a request that must produce a decodable JSON body.
    async fn send<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, Option<&str>)],
        body: Option<&B>,
    ) -> ApiResult<T> {
        let url = format!("{}{path}", self.base_url);
        match self.send_raw(method, path, query, body).await? {
            Some(text) => {
                serde_json::from_str(&text).map_err(|e| ApiError::invalid_body(&url, e))
            }
            // An empty 2xx where a body was required: surface the decode
            // failure instead of inventing a value.
            None => match serde_json::from_str::<T>("") {
                Ok(value) => Ok(value),
                Err(e) => Err(ApiError::invalid_body(&url, e)),
            },
        }
    }

    /// Request core shared by every entry point.
    ///
    /// Returns `Ok(None)` for 204 responses and for 2xx responses with an
    /// empty or whitespace-only body ("no value", not an error), and
    /// `Ok(Some(text))` otherwise. Non-success statuses and transport
    /// failures are mapped into [`ApiError`] before any body typing.
    #[instrument(level = "debug", skip(self, body), fields(path = %path))]
    async fn send_raw<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, Option<&str>)],
        body: Option<&B>,
    ) -> ApiResult<Option<String>> {
        let url = format!("{}{path}", self.base_url);
        let mut request = self.client.request(method, &url);
        for (key, value) in query {
            if let Some(value) = value {
                request = request.query(&[(key, value)]);
            }
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::timeout(&url)
            } else {
                ApiError::network(&url, e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status, &body));
        }

        if status == StatusCode::NO_CONTENT {
            debug!("204 response, no value");
            return Ok(None);
        }

        let text = response.text().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::timeout(&url)
            } else {
                ApiError::network(&url, e)
            }
        })?;
        if text.trim().is_empty() {
            debug!("empty 2xx body, no value");
            return Ok(None);
        }
        Ok(Some(text))
    }
}
