//! Webmaster API domain.
//!
//! A typed client for the Yandex Webmaster REST API (v4): authentication,
//! per-attempt timeout, bounded retry with linear backoff, required-field
//! validation and one method per upstream endpoint.
//!
//! ## Architecture
//!
//! - `client.rs` - [`WebmasterClient`] and the retrying `execute` core
//! - `endpoints.rs` - one method per API operation
//! - `backend.rs` - the [`HttpBackend`] seam and its reqwest implementation
//! - `params.rs` - typed operation parameters
//! - `options.rs` - timeout and retry settings
//! - `validation.rs` - required-field checks
//! - `error.rs` - [`ApiError`]

mod backend;
mod client;
mod endpoints;
mod error;
mod options;
pub mod params;
mod validation;

#[cfg(test)]
pub(crate) mod testing;

pub use backend::{ApiRequest, HttpBackend, Method, RawResponse, ReqwestBackend};
pub use client::{DEFAULT_BASE_URL, WebmasterClient};
pub use error::{ApiError, ApiResult};
pub use options::ClientOptions;
pub use validation::{require, require_all};
