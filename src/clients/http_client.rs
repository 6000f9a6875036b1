//! HTTP client for StreamPay API communication.
//!
//! This module provides the [`HttpClient`] type: it builds the wire request,
//! attaches credential headers, invokes the transport exactly once, and
//! interprets the response into a typed value or a classified error.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::clients::errors::{ApiError, HttpError};
use crate::clients::http_request::HttpRequest;
use crate::clients::transport::{HttpSend, RawResponse, ReqwestSend};
use crate::config::StreamConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the StreamPay API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Fixed headers (`User-Agent`, `Accept`) and credential header injection
/// - Response interpretation into typed successes and classified failures
///
/// It performs no retries and enforces no timeout of its own; both belong to
/// the caller or the injected transport, because the client cannot assume
/// remote operations are idempotent.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`. The configuration is immutable after
/// construction, so concurrent requests from a shared client are safe.
///
/// # Example
///
/// ```rust,ignore
/// use streampay_sdk::{HttpClient, HttpMethod, HttpRequest, StreamConfig};
///
/// let config = StreamConfig::builder().api_key("sk_live_123").build()?;
/// let client = HttpClient::new(config);
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/api/v2/products").build();
/// let products: serde_json::Value = client.request(request).await?;
/// ```
pub struct HttpClient {
    config: StreamConfig,
    transport: Arc<dyn HttpSend>,
    user_agent: String,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a client using the default `reqwest`-backed transport.
    #[must_use]
    pub fn new(config: StreamConfig) -> Self {
        Self::with_transport(config, Arc::new(ReqwestSend::new()))
    }

    /// Creates a client with an injected transport.
    ///
    /// This is how tests substitute a deterministic fake, and how callers
    /// wrap the send layer with their own timeout or retry policy.
    #[must_use]
    pub fn with_transport(config: StreamConfig, transport: Arc<dyn HttpSend>) -> Self {
        let prefix = config
            .user_agent_prefix()
            .map_or_else(String::new, |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{prefix}StreamPay API Library v{SDK_VERSION} | Rust {rust_version}");

        Self {
            config,
            transport,
            user_agent,
        }
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &StreamConfig {
        &self.config
    }

    /// Returns the `User-Agent` value attached to every request.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Sends a request and decodes the 2xx response body as `T`.
    ///
    /// # Errors
    ///
    /// - [`HttpError::InvalidRequest`] if the request fails validation
    /// - [`HttpError::Transport`] if the send layer produces no response
    /// - [`HttpError::Api`] for a non-2xx status
    /// - [`HttpError::Decode`] when the 2xx body is empty or does not match `T`
    pub async fn request<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T, HttpError> {
        let response = self.execute(request).await?;

        if response.body.trim().is_empty() {
            return Err(HttpError::Decode {
                message: "expected a response body, got an empty one".to_owned(),
            });
        }

        serde_json::from_str(&response.body).map_err(|source| HttpError::Decode {
            message: source.to_string(),
        })
    }

    /// Sends a request whose success carries no payload.
    ///
    /// Any 2xx response succeeds, body or not; delete endpoints answer 200
    /// with an empty body.
    ///
    /// # Errors
    ///
    /// Same as [`HttpClient::request`], minus the decode step.
    pub async fn request_empty(&self, request: HttpRequest) -> Result<(), HttpError> {
        self.execute(request).await.map(|_| ())
    }

    /// Builds, authenticates, sends once, and checks the response status.
    async fn execute(&self, request: HttpRequest) -> Result<RawResponse, HttpError> {
        let mut built = request.build_wire(self.config.base_url().as_ref(), &self.user_agent)?;

        // Credential headers merge over the fixed headers and win on
        // collision; header names are disjoint so none is expected.
        for (name, value) in self.config.auth().credential_headers() {
            built.headers.insert(name.to_owned(), value);
        }

        tracing::debug!(method = %built.method, url = %built.url, "dispatching request");

        let response = self.transport.send(built).await?;

        tracing::debug!(status = response.status, "received response");

        if response.is_ok() {
            Ok(response)
        } else {
            Err(api_error(&response).into())
        }
    }
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

/// Interprets a non-2xx response into an [`ApiError`].
fn api_error(response: &RawResponse) -> ApiError {
    let raw_body = serde_json::from_str::<serde_json::Value>(&response.body).ok();
    let message = raw_body.as_ref().and_then(extract_message).unwrap_or_else(|| {
        format!("request failed with status {}", response.status)
    });

    ApiError {
        status: response.status,
        message,
        raw_body,
    }
}

/// Pulls the error message out of a structured error document.
///
/// StreamPay reports errors under `message`; `detail` and `error` cover the
/// framework-level responses (validation failures, gateway errors) that
/// bypass the service's own handler. Probed in that order.
fn extract_message(body: &serde_json::Value) -> Option<String> {
    ["message", "detail", "error"]
        .iter()
        .find_map(|key| body.get(key).and_then(serde_json::Value::as_str))
        .map(str::to_owned)
}
