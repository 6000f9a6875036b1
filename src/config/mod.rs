//! Configuration types for the StreamPay SDK.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`StreamConfig`]: The immutable per-client configuration
//! - [`StreamConfigBuilder`]: A builder for constructing [`StreamConfig`] instances
//! - [`BaseUrl`]: A validated API base URL
//!
//! A `StreamConfig` is owned by exactly one client and never mutated after
//! construction; reconfiguration means building a new client.
//!
//! # Example
//!
//! ```rust
//! use streampay_sdk::StreamConfig;
//!
//! let config = StreamConfig::builder()
//!     .api_key("sk_live_123")
//!     .user_agent_prefix("MyShop/2.0")
//!     .build()
//!     .unwrap();
//!
//! assert!(config.auth().is_authenticated());
//! ```

mod newtypes;

pub use newtypes::{BaseUrl, DEFAULT_BASE_URL};

use crate::auth::AuthMode;
use crate::error::ConfigError;

/// Configuration for the StreamPay SDK.
///
/// Holds the API base URL, the resolved authentication mode, and an optional
/// `User-Agent` prefix. Immutable after construction.
///
/// # Thread Safety
///
/// `StreamConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
#[derive(Clone, Debug)]
pub struct StreamConfig {
    base_url: BaseUrl,
    auth: AuthMode,
    user_agent_prefix: Option<String>,
}

// Verify StreamConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StreamConfig>();
};

impl StreamConfig {
    /// Creates a configuration for the production host with the given
    /// authentication mode.
    #[must_use]
    pub fn new(auth: AuthMode) -> Self {
        Self {
            base_url: BaseUrl::default(),
            auth,
            user_agent_prefix: None,
        }
    }

    /// Creates a new builder for constructing a `StreamConfig`.
    #[must_use]
    pub fn builder() -> StreamConfigBuilder {
        StreamConfigBuilder::default()
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the active authentication mode.
    #[must_use]
    pub const fn auth(&self) -> &AuthMode {
        &self.auth
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

/// Builder for constructing [`StreamConfig`] instances.
///
/// All fields are optional. With no credentials the client runs
/// unauthenticated; with both, the bearer token takes precedence over the
/// API key (see [`AuthMode::select`]).
///
/// # Defaults
///
/// - `base_url`: the production StreamPay host
/// - `auth`: resolved from `api_key`/`bearer_token` per the precedence rule
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use streampay_sdk::StreamConfig;
///
/// let config = StreamConfig::builder()
///     .api_key("sk_test_123")
///     .base_url("https://sandbox.streampay.sa")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct StreamConfigBuilder {
    api_key: Option<String>,
    bearer_token: Option<String>,
    base_url: Option<String>,
    user_agent_prefix: Option<String>,
}

impl StreamConfigBuilder {
    /// Sets the API key credential.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the bearer token credential.
    ///
    /// Takes precedence over any API key when both are set.
    #[must_use]
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Overrides the API base URL (e.g. for a sandbox host or a test server).
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets a prefix prepended to the SDK's `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the configuration, validating the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if a base URL override is
    /// not an absolute http(s) URL.
    pub fn build(self) -> Result<StreamConfig, ConfigError> {
        let base_url = match self.base_url {
            Some(url) => BaseUrl::new(url)?,
            None => BaseUrl::default(),
        };

        let auth = AuthMode::select(self.api_key.as_deref(), self.bearer_token.as_deref());

        Ok(StreamConfig {
            base_url,
            auth,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
