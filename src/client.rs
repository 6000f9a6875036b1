//! The top-level StreamPay client.
//!
//! [`StreamClient`] exposes one method per API operation (see the
//! `resources` module for the per-resource implementations) and owns the
//! underlying [`HttpClient`].

use std::sync::Arc;

use crate::auth::AuthMode;
use crate::clients::{HttpClient, HttpSend};
use crate::config::StreamConfig;

/// A typed client for the StreamPay payment-processing API.
///
/// Construct with [`StreamClient::init`] for the common API-key case, or
/// from a [`StreamConfig`] for custom hosts, bearer tokens, or an injected
/// transport. The client is immutable and `Send + Sync`; clone-free sharing
/// across tasks works through a reference or an `Arc`.
///
/// # Example
///
/// ```rust,ignore
/// use streampay_sdk::StreamClient;
/// use streampay_sdk::resources::ConsumerCreate;
///
/// let client = StreamClient::init("sk_live_123");
///
/// let consumer = client
///     .create_consumer(&ConsumerCreate {
///         email: "customer@example.com".to_string(),
///         name: Some("Dana".to_string()),
///         phone: None,
///     })
///     .await?;
/// ```
#[derive(Debug)]
pub struct StreamClient {
    pub(crate) http: HttpClient,
}

// Verify StreamClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StreamClient>();
};

impl StreamClient {
    /// Creates a client for the production host authenticated with an API key.
    ///
    /// An empty key yields an unauthenticated client; the server will
    /// reject its requests, which is intentional pass-through rather than
    /// client-side validation.
    #[must_use]
    pub fn init(api_key: impl Into<String>) -> Self {
        let auth = AuthMode::select(Some(&api_key.into()), None);
        Self::new(StreamConfig::new(auth))
    }

    /// Creates a client from a configuration, using the default transport.
    #[must_use]
    pub fn new(config: StreamConfig) -> Self {
        Self {
            http: HttpClient::new(config),
        }
    }

    /// Creates a client with an injected transport.
    #[must_use]
    pub fn with_transport(config: StreamConfig, transport: Arc<dyn HttpSend>) -> Self {
        Self {
            http: HttpClient::with_transport(config, transport),
        }
    }

    /// Returns the underlying HTTP client, for requests the typed surface
    /// does not cover.
    #[must_use]
    pub const fn http(&self) -> &HttpClient {
        &self.http
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_resolves_api_key_auth() {
        let client = StreamClient::init("sk_live_123");
        assert!(client.http().config().auth().is_authenticated());
    }

    #[test]
    fn test_init_with_empty_key_is_unauthenticated() {
        let client = StreamClient::init("");
        assert!(!client.http().config().auth().is_authenticated());
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StreamClient>();
    }
}
