//! The injectable transport boundary.
//!
//! The HTTP core depends on a single capability from its host environment:
//! an async send function that takes a fully-built wire request and either
//! returns a raw response or fails outright. [`ReqwestSend`] is the default
//! implementation; any [`HttpSend`] may be substituted at client
//! construction, which is how the test suites run without network access
//! and how callers layer their own timeout or retry policy.

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;

use crate::clients::http_request::HttpMethod;

/// A fully-built wire request: absolute URL, headers, serialized body.
#[derive(Clone, Debug)]
pub struct BuiltRequest {
    /// The HTTP method.
    pub method: HttpMethod,
    /// The fully-qualified URL, query string included.
    pub url: String,
    /// All headers to send, credential headers included.
    pub headers: HashMap<String, String>,
    /// The serialized JSON body, when present.
    pub body: Option<String>,
}

impl BuiltRequest {
    pub(crate) fn new(method: HttpMethod, url: String) -> Self {
        Self {
            method,
            url,
            headers: HashMap::new(),
            body: None,
        }
    }

    pub(crate) fn insert_header(&mut self, name: &str, value: &str) {
        self.headers.insert(name.to_owned(), value.to_owned());
    }
}

/// A raw response from the transport.
///
/// The body is kept as text; interpretation (JSON decoding, error
/// extraction) happens in the client core.
#[derive(Clone, Debug)]
pub struct RawResponse {
    /// The numeric HTTP status code.
    pub status: u16,
    /// Response headers, single-valued, lowercase names.
    pub headers: HashMap<String, String>,
    /// The response body as text; empty string for bodyless responses.
    pub body: String,
}

impl RawResponse {
    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status >= 200 && self.status <= 299
    }
}

/// Error produced when the transport fails to deliver a response at all.
///
/// Covers connection failures, DNS errors, and any timeout or cancellation
/// the underlying implementation enforces. No HTTP status is available.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct TransportFailure {
    /// The underlying error text.
    pub message: String,
}

impl TransportFailure {
    /// Creates a transport failure from the underlying error text.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for TransportFailure {
    fn from(source: reqwest::Error) -> Self {
        Self::new(source.to_string())
    }
}

/// The send capability the HTTP core depends on.
///
/// Implementations receive the built request exactly as it will go over the
/// wire and must resolve to a [`RawResponse`] or a [`TransportFailure`].
/// The core invokes `send` exactly once per operation; connection pooling,
/// timeouts, and cancellation are entirely the implementation's concern.
#[async_trait]
pub trait HttpSend: Send + Sync {
    /// Sends the request and reads the full response body.
    async fn send(&self, request: BuiltRequest) -> Result<RawResponse, TransportFailure>;
}

/// The default [`HttpSend`] implementation, backed by [`reqwest`].
#[derive(Clone, Debug)]
pub struct ReqwestSend {
    client: reqwest::Client,
}

impl ReqwestSend {
    /// Creates a transport with a fresh `reqwest` client.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This
    /// should only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");
        Self { client }
    }

    /// Wraps an existing `reqwest` client, preserving its pool and settings.
    #[must_use]
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestSend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpSend for ReqwestSend {
    async fn send(&self, request: BuiltRequest) -> Result<RawResponse, TransportFailure> {
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
            HttpMethod::Put => self.client.put(&request.url),
            HttpMethod::Delete => self.client.delete(&request.url),
        };

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_lowercase(),
                    value.to_str().unwrap_or_default().to_owned(),
                )
            })
            .collect();
        let body = response.text().await?;

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}
