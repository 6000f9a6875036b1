//! HTTP request types for the StreamPay SDK.
//!
//! This module provides the [`HttpRequest`] type and its builder, plus the
//! wire-level request construction: joining the base URL and path,
//! serializing present query parameters, and attaching the fixed headers.

use std::fmt;

use serde::Serialize;

use crate::clients::errors::InvalidRequestError;
use crate::clients::transport::BuiltRequest;

/// HTTP methods used by the StreamPay API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources and actions.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns `true` for methods that may carry a request body.
    ///
    /// The client never issues bodies on GET or DELETE; a body supplied for
    /// either is dropped at build time.
    #[must_use]
    pub const fn allows_body(self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// A scalar query parameter value.
///
/// Numbers and booleans are stringified to their canonical text form when
/// the query string is built.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryValue {
    /// A text value, used verbatim.
    Text(String),
    /// An integer value.
    Int(i64),
    /// A floating-point value.
    Float(f64),
    /// A boolean value, serialized as `true`/`false`.
    Bool(bool),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// A logical request to be sent to the StreamPay API.
///
/// Transient: constructed per call via [`HttpRequest::builder`], consumed by
/// the client, never retained. Query entries keep an `Option` value so that
/// absent parameters can be threaded through and dropped at serialization
/// time instead of at every call site.
///
/// # Example
///
/// ```rust
/// use streampay_sdk::{HttpMethod, HttpRequest};
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/api/v2/consumers")
///     .query_param("page", 2)
///     .opt_query_param("sort", None::<&str>)
///     .build();
///
/// let built = request.build_wire("https://api.example.com", "sdk-test").unwrap();
/// assert_eq!(built.url, "https://api.example.com/api/v2/consumers?page=2");
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The path, already interpolated by the caller (e.g. `/api/v2/products/p_1`).
    pub path: String,
    /// Query parameters; entries with a `None` value are omitted entirely.
    pub query: Vec<(String, Option<QueryValue>)>,
    /// The JSON request body, if any.
    pub body: Option<serde_json::Value>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Builds the wire request for this logical request.
    ///
    /// Produces the fully-qualified URL (query string containing only
    /// present entries, percent-encoded), the fixed headers (`User-Agent`,
    /// `Accept`, and `Content-Type: application/json` when a body is
    /// attached), and the serialized body. Bodies are attached only for
    /// methods that allow them.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError::EmptyPath`] for an empty path and
    /// [`InvalidRequestError::UnserializableBody`] if the body cannot be
    /// rendered as JSON text.
    pub fn build_wire(
        &self,
        base_url: &str,
        user_agent: &str,
    ) -> Result<BuiltRequest, InvalidRequestError> {
        if self.path.is_empty() {
            return Err(InvalidRequestError::EmptyPath);
        }

        let mut url = format!("{base_url}{}", self.path);
        if let Some(query) = serialize_query(&self.query) {
            url.push('?');
            url.push_str(&query);
        }

        let mut built = BuiltRequest::new(self.method, url);
        built.insert_header("User-Agent", user_agent);
        built.insert_header("Accept", "application/json");

        if self.method.allows_body() {
            if let Some(body) = &self.body {
                let text = serde_json::to_string(body).map_err(|source| {
                    InvalidRequestError::UnserializableBody {
                        message: source.to_string(),
                    }
                })?;
                built.insert_header("Content-Type", "application/json");
                built.body = Some(text);
            }
        }

        Ok(built)
    }
}

/// Serializes present query entries, percent-encoding keys and values.
///
/// Returns `None` when no entry has a value, so callers can skip the `?`.
fn serialize_query(query: &[(String, Option<QueryValue>)]) -> Option<String> {
    let pairs: Vec<String> = query
        .iter()
        .filter_map(|(key, value)| {
            value.as_ref().map(|value| {
                format!(
                    "{}={}",
                    urlencoding::encode(key),
                    urlencoding::encode(&value.to_string())
                )
            })
        })
        .collect();

    if pairs.is_empty() {
        None
    } else {
        Some(pairs.join("&"))
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    method: HttpMethod,
    path: String,
    query: Vec<(String, Option<QueryValue>)>,
    body: Option<serde_json::Value>,
}

impl HttpRequestBuilder {
    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.query.push((key.into(), Some(value.into())));
        self
    }

    /// Adds a query parameter that may be absent.
    ///
    /// `None` entries are carried through the request and omitted from the
    /// serialized query string (not serialized as empty).
    #[must_use]
    pub fn opt_query_param(
        mut self,
        key: impl Into<String>,
        value: Option<impl Into<QueryValue>>,
    ) -> Self {
        self.query.push((key.into(), value.map(Into::into)));
        self
    }

    /// Sets a raw JSON request body.
    #[must_use]
    pub fn body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Serializes a typed value as the JSON request body.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError::UnserializableBody`] if the value
    /// cannot be represented as JSON.
    pub fn json_body<B: Serialize + ?Sized>(
        mut self,
        body: &B,
    ) -> Result<Self, InvalidRequestError> {
        let value = serde_json::to_value(body).map_err(|source| {
            InvalidRequestError::UnserializableBody {
                message: source.to_string(),
            }
        })?;
        self.body = Some(value);
        Ok(self)
    }

    /// Builds the [`HttpRequest`].
    #[must_use]
    pub fn build(self) -> HttpRequest {
        HttpRequest {
            method: self.method,
            path: self.path,
            query: self.query,
            body: self.body,
        }
    }
}
