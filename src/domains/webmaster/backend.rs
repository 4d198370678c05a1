//! Wire-level seam between the API client and the HTTP stack.
//!
//! The client builds an [`ApiRequest`] per attempt and hands it to an
//! [`HttpBackend`]. The production backend is [`ReqwestBackend`]; tests plug
//! in scripted backends to observe attempts without a network.

use async_trait::async_trait;
use reqwest::header;
use serde_json::Value;
use std::fmt;

use super::error::{ApiError, ApiResult};

/// HTTP methods used by the Webmaster API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A single request against the upstream API.
#[derive(Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// Full `Authorization` header value.
    pub authorization: String,
    pub body: Option<Value>,
}

impl fmt::Debug for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiRequest")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("authorization", &"<redacted>")
            .field("body", &self.body)
            .finish()
    }
}

/// Status and raw body text of an upstream response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs one physical HTTP exchange.
///
/// Implementations do not retry and do not enforce the client's timeout;
/// both are handled by [`super::WebmasterClient`].
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Send the request and read the full response body.
    async fn send(&self, request: &ApiRequest) -> ApiResult<RawResponse>;
}

/// [`HttpBackend`] over a pooled `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestBackend {
    http: reqwest::Client,
}

impl ReqwestBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn send(&self, request: &ApiRequest) -> ApiResult<RawResponse> {
        let mut builder = self
            .http
            .request(request.method.into(), &request.url)
            .header(header::AUTHORIZATION, &request.authorization)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(map_reqwest_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(map_reqwest_error)?;

        Ok(RawResponse { status, body })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    ApiError::transport(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_authorization() {
        let request = ApiRequest {
            method: Method::Get,
            url: "https://api.webmaster.yandex.net/v4/user".to_string(),
            authorization: "OAuth secret-token".to_string(),
            body: None,
        };
        let debug = format!("{request:?}");
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("secret-token"));
    }

    #[test]
    fn test_success_range() {
        assert!(RawResponse::new(200, "").is_success());
        assert!(RawResponse::new(204, "").is_success());
        assert!(!RawResponse::new(301, "").is_success());
        assert!(!RawResponse::new(503, "").is_success());
    }
}
