//! HTTP client types for StreamPay API communication.
//!
//! This module is the transport core of the SDK. It builds wire requests
//! from logical ones, attaches authentication, sends through an injectable
//! transport, and normalizes every outcome into a typed success or a
//! classified [`HttpError`].
//!
//! # Overview
//!
//! - [`HttpClient`]: the async client that executes requests
//! - [`HttpRequest`] / [`HttpRequestBuilder`]: a logical request and its builder
//! - [`HttpSend`]: the injectable transport capability ([`ReqwestSend`] by default)
//! - [`BuiltRequest`] / [`RawResponse`]: the wire-level boundary types
//! - [`HttpError`] and friends: the closed failure taxonomy
//!
//! # Retry Behavior
//!
//! There is none. Each operation invokes the transport exactly once; the
//! client has no visibility into the idempotency of remote operations, so
//! retry and timeout policy stay with the caller or the injected transport.

mod errors;
mod http_client;
mod http_request;
mod transport;

pub use errors::{ApiError, HttpError, InvalidRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder, QueryValue};
pub use transport::{BuiltRequest, HttpSend, RawResponse, ReqwestSend, TransportFailure};
