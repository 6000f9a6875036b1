//! Error types for SDK configuration.
//!
//! This module contains error types for configuration and validation
//! failures raised before any request is sent.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use streampay_sdk::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid StreamPay API key.")]
    EmptyApiKey,

    /// Bearer token cannot be empty.
    #[error("Bearer token cannot be empty. Please provide a valid StreamPay bearer token.")]
    EmptyBearerToken,

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Expected an absolute http(s) URL without a path (e.g., 'https://stream-app-service.streampay.sa').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_key_error_message() {
        let error = ConfigError::EmptyApiKey;
        let message = error.to_string();
        assert!(message.contains("API key cannot be empty"));
        assert!(message.contains("StreamPay"));
    }

    #[test]
    fn test_invalid_base_url_error_message() {
        let error = ConfigError::InvalidBaseUrl {
            url: "not a url".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("not a url"));
        assert!(message.contains("absolute http(s) URL"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyBearerToken;
        let _: &dyn std::error::Error = &error;
    }
}
