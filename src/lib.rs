//! # StreamPay Rust SDK
//!
//! A typed async client for the StreamPay payment-processing REST API:
//! consumers, products, coupons, invoices, payments, subscriptions, and
//! payment links, with authentication, request construction, and error
//! normalization handled by the SDK.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`StreamConfig`] and [`StreamConfigBuilder`]
//! - A closed authentication model ([`AuthMode`]: none, API key, or bearer
//!   token) resolved once at construction
//! - One method per API operation on [`StreamClient`], returning typed
//!   results or a classified [`HttpError`]
//! - An injectable transport ([`HttpSend`]) so tests and callers can
//!   substitute the send layer
//! - A convenience translator for single-product payment links
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use streampay_sdk::StreamClient;
//! use streampay_sdk::resources::CreateLinkInput;
//!
//! let client = StreamClient::init("sk_live_123");
//!
//! let link = client
//!     .create_link(&CreateLinkInput {
//!         name: "Premium Subscription".to_string(),
//!         product_id: "prod_1".to_string(),
//!         ..CreateLinkInput::default()
//!     })
//!     .await?;
//!
//! if let Some(url) = link.pay_url() {
//!     println!("checkout at {url}");
//! }
//! ```
//!
//! ## Custom Configuration
//!
//! ```rust
//! use streampay_sdk::{StreamClient, StreamConfig};
//!
//! let config = StreamConfig::builder()
//!     .bearer_token("eyJ...")
//!     .base_url("https://sandbox.streampay.sa")
//!     .user_agent_prefix("MyShop/2.0")
//!     .build()
//!     .unwrap();
//!
//! let client = StreamClient::new(config);
//! ```
//!
//! ## Error Handling
//!
//! Every operation resolves to `Result<T, HttpError>` with a closed failure
//! taxonomy: [`InvalidRequestError`] (caught before sending),
//! [`HttpError::Transport`] (the send layer failed, no status),
//! [`HttpError::Decode`] (a 2xx body that does not match the expected
//! shape), and [`ApiError`] (non-2xx, with status and the service's error
//! message). Nothing is retried internally: the SDK cannot assume remote
//! operations are idempotent, so retry policy belongs to the caller or an
//! injected transport.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Immutable clients**: Reconfiguration means constructing a new client
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime

pub mod auth;
pub mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod resources;

// Re-export public types at crate root for convenience
pub use auth::{ApiKey, AuthMode, BearerToken, API_KEY_HEADER};
pub use client::StreamClient;
pub use clients::{
    ApiError, BuiltRequest, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpSend, InvalidRequestError, QueryValue, RawResponse, ReqwestSend, TransportFailure,
    SDK_VERSION,
};
pub use config::{BaseUrl, StreamConfig, StreamConfigBuilder, DEFAULT_BASE_URL};
pub use error::ConfigError;

// Re-export list plumbing shared by every resource
pub use resources::{ListResource, Pagination, PaginationParams};
