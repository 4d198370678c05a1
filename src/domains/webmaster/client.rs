//! Retrying HTTP client for the Yandex Webmaster API.
//!
//! Every logical call goes through [`WebmasterClient::execute`], which sends
//! the request through the configured [`HttpBackend`], enforces the
//! per-attempt timeout and retries transient failures with linear backoff.
//! Endpoint methods live in `endpoints.rs`.

use reqwest::Url;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tokio::time::{sleep, timeout};
use tracing::{debug, instrument, warn};

use super::backend::{ApiRequest, HttpBackend, Method, RawResponse, ReqwestBackend};
use super::error::{ApiError, ApiResult};
use super::options::ClientOptions;
use crate::core::config::WebmasterConfig;
use crate::core::{Error, Result};

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.webmaster.yandex.net/v4";

/// Client for the Webmaster REST API.
///
/// Cheap to clone; holds no per-call state, so concurrent calls are safe.
#[derive(Clone)]
pub struct WebmasterClient {
    backend: Arc<dyn HttpBackend>,
    base_url: Url,
    authorization: String,
    options: ClientOptions,
}

impl fmt::Debug for WebmasterClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebmasterClient")
            .field("base_url", &self.base_url.as_str())
            .field("authorization", &"<redacted>")
            .field("options", &self.options)
            .finish()
    }
}

impl WebmasterClient {
    /// Create a client for the production API with default options.
    pub fn new(token: impl AsRef<str>) -> Self {
        Self {
            backend: Arc::new(ReqwestBackend::new()),
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            authorization: format!("OAuth {}", token.as_ref().trim()),
            options: ClientOptions::default(),
        }
    }

    /// Create a client from the server configuration.
    ///
    /// Fails when no token is configured; the server cannot start without one.
    pub fn from_config(config: &WebmasterConfig) -> Result<Self> {
        let token = config
            .token
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| {
                Error::config("MCP_WEBMASTER_TOKEN is not set; an OAuth token is required")
            })?;

        Self::new(token)
            .with_base_url(&config.base_url)
            .map(|client| client.with_options(config.options))
            .map_err(|e| Error::config(e.to_string()))
    }

    /// Point the client at another API root.
    pub fn with_base_url(mut self, base_url: &str) -> ApiResult<Self> {
        let url = Url::parse(base_url)
            .map_err(|e| ApiError::invalid_request(format!("invalid base URL '{base_url}': {e}")))?;
        if url.cannot_be_a_base() {
            return Err(ApiError::invalid_request(format!(
                "invalid base URL '{base_url}': cannot be a base"
            )));
        }
        self.base_url = url;
        Ok(self)
    }

    /// Apply timeout and retry options.
    pub fn with_options(mut self, options: ClientOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the HTTP backend.
    pub fn with_backend(mut self, backend: Arc<dyn HttpBackend>) -> Self {
        self.backend = backend;
        self
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Build a request carrying the client's credentials.
    pub fn request(&self, method: Method, url: Url, body: Option<Value>) -> ApiRequest {
        ApiRequest {
            method,
            url: url.into(),
            authorization: self.authorization.clone(),
            body,
        }
    }

    /// Perform one logical call, retrying transient failures.
    ///
    /// Timeouts and 500/502/503 responses are retried while fewer than
    /// `max_attempts` attempts have been made, waiting `retry_delay_ms * n`
    /// after attempt `n`. Any other failure is returned immediately.
    #[instrument(skip_all, fields(method = %request.method, url = %request.url))]
    pub async fn execute(&self, request: ApiRequest) -> ApiResult<Value> {
        let mut attempt: u32 = 1;
        loop {
            match self.attempt(&request).await {
                Ok(value) => {
                    debug!(attempt, "Request succeeded");
                    return Ok(value);
                }
                Err(err) if err.is_retryable() && attempt < self.options.max_attempts => {
                    let delay = self.options.backoff(attempt);
                    warn!(
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        "Retrying after transient failure: {}",
                        err
                    );
                    sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => {
                    debug!(attempt, "Request failed: {}", err);
                    return Err(err);
                }
            }
        }
    }

    /// One physical attempt, bounded by the configured timeout.
    async fn attempt(&self, request: &ApiRequest) -> ApiResult<Value> {
        let response = timeout(self.options.timeout(), self.backend.send(request))
            .await
            .map_err(|_| ApiError::Timeout(self.options.timeout_ms))??;

        parse_response(response)
    }

    // ------------------------------------------------------------------------
    // URL building and verb helpers used by the endpoint methods
    // ------------------------------------------------------------------------

    /// `{base}/{segments...}`, each segment percent-encoded.
    pub(super) fn url(&self, segments: &[&str]) -> ApiResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::invalid_request("base URL cannot be a base"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// `{base}/user/{user_id}/hosts/{host_id}/{rest...}`.
    pub(super) fn host_url(&self, user_id: &str, host_id: &str, rest: &[&str]) -> ApiResult<Url> {
        let mut segments = vec!["user", user_id, "hosts", host_id];
        segments.extend_from_slice(rest);
        self.url(&segments)
    }

    pub(super) async fn get(&self, url: Url) -> ApiResult<Value> {
        self.execute(self.request(Method::Get, url, None)).await
    }

    pub(super) async fn post(&self, url: Url, body: Option<Value>) -> ApiResult<Value> {
        self.execute(self.request(Method::Post, url, body)).await
    }

    pub(super) async fn delete(&self, url: Url) -> ApiResult<Value> {
        self.execute(self.request(Method::Delete, url, None)).await
    }
}

/// Attach `query` to `url`; nothing is appended when every field is unset.
pub(super) fn with_query<T: Serialize>(mut url: Url, query: &T) -> ApiResult<Url> {
    let encoded = serde_urlencoded::to_string(query)
        .map_err(|e| ApiError::invalid_request(format!("cannot encode query: {e}")))?;
    if !encoded.is_empty() {
        url.set_query(Some(&encoded));
    }
    Ok(url)
}

/// Turn a raw response into the call's result.
fn parse_response(response: RawResponse) -> ApiResult<Value> {
    if !response.is_success() {
        return Err(ApiError::Upstream {
            status: response.status,
            body: response.body,
        });
    }

    if response.body.trim().is_empty() {
        return Ok(Value::Object(Default::default()));
    }

    Ok(serde_json::from_str(&response.body)?)
}
