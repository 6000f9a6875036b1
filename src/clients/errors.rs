//! HTTP-specific error types for the StreamPay SDK.
//!
//! Every public operation resolves to either its typed success value or one
//! of the failure kinds below; no unclassified error escapes the client.
//!
//! - [`InvalidRequestError`]: malformed input caught before anything is sent
//! - [`HttpError::Transport`]: the send layer failed outright, no HTTP status
//! - [`HttpError::Decode`]: a 2xx response whose body does not match the
//!   expected shape
//! - [`ApiError`]: a non-2xx response, with status and best-effort message
//!
//! None of these are retried internally. The client cannot assume remote
//! operations are idempotent (a payment creation must not be blindly
//! re-sent), so retry policy belongs to the caller or to an injected
//! transport.
//!
//! # Example
//!
//! ```rust,ignore
//! match client.get_consumer("cons_1").await {
//!     Ok(consumer) => println!("{consumer:?}"),
//!     Err(HttpError::Api(e)) => eprintln!("API error {}: {}", e.status, e.message),
//!     Err(HttpError::Transport(e)) => eprintln!("network failure: {e}"),
//!     Err(other) => eprintln!("{other}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::transport::TransportFailure;

/// Error returned when a request fails validation before being sent.
///
/// Nothing goes over the wire when one of these is raised.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidRequestError {
    /// The request path resolved to an empty string.
    #[error("Request path cannot be empty.")]
    EmptyPath,

    /// The request body could not be serialized to JSON.
    #[error("Cannot serialize request body to JSON: {message}")]
    UnserializableBody {
        /// The serializer's error message.
        message: String,
    },

    /// A payment link line item was given a quantity of zero.
    #[error("Payment link quantity must be at least 1.")]
    ZeroQuantity,
}

/// Error returned when the API answers with a non-2xx status.
///
/// `message` is the error detail extracted from the response body when one
/// is present, otherwise a generic message naming the status. `raw_body`
/// preserves the parsed body so callers can inspect service-specific error
/// detail; it is `None` when the body was not valid JSON.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiError {
    /// The HTTP status code of the response.
    pub status: u16,
    /// Best-effort error message extracted from the response body.
    pub message: String,
    /// The parsed response body, when it was parseable.
    pub raw_body: Option<serde_json::Value>,
}

/// Unified error type for all SDK operations.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed before sending.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidRequestError),

    /// The send layer failed to produce a response.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportFailure),

    /// A 2xx response body could not be decoded as the expected type.
    #[error("Failed to decode response body: {message}")]
    Decode {
        /// The decoder's error message.
        message: String,
    },

    /// The API answered with a non-2xx status.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl HttpError {
    /// Returns the HTTP status code, when one was received.
    ///
    /// Only [`HttpError::Api`] carries a status; transport failures never
    /// produced a response and the other kinds precede or follow one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api(error) => Some(error.status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_is_message() {
        let error = ApiError {
            status: 404,
            message: "consumer not found".to_string(),
            raw_body: None,
        };
        assert_eq!(error.to_string(), "consumer not found");
    }

    #[test]
    fn test_empty_path_error_message() {
        let error = InvalidRequestError::EmptyPath;
        assert_eq!(error.to_string(), "Request path cannot be empty.");
    }

    #[test]
    fn test_zero_quantity_error_message() {
        let error = InvalidRequestError::ZeroQuantity;
        assert!(error.to_string().contains("at least 1"));
    }

    #[test]
    fn test_status_accessor() {
        let api: HttpError = ApiError {
            status: 422,
            message: "invalid".to_string(),
            raw_body: None,
        }
        .into();
        assert_eq!(api.status(), Some(422));

        let invalid: HttpError = InvalidRequestError::EmptyPath.into();
        assert_eq!(invalid.status(), None);

        let transport: HttpError = TransportFailure::new("connection refused").into();
        assert_eq!(transport.status(), None);
    }

    #[test]
    fn test_transport_error_wraps_failure_text() {
        let error: HttpError = TransportFailure::new("connection refused").into();
        assert!(error.to_string().contains("connection refused"));
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let _: &dyn std::error::Error = &InvalidRequestError::EmptyPath;
        let _: &dyn std::error::Error = &HttpError::Decode {
            message: "unexpected end of input".to_string(),
        };
    }
}
