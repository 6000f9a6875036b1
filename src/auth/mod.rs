//! Authentication modes for the StreamPay API.
//!
//! StreamPay endpoints accept either an API key header or a JWT bearer
//! token. Exactly one mode is active per client instance; it is chosen once
//! at construction and never changes afterwards. Reconfiguring credentials
//! means constructing a new client.
//!
//! # Selection Precedence
//!
//! When both credential forms are supplied, the bearer token wins. An API
//! key is used only when no bearer token is present. With neither, requests
//! go out unauthenticated and the server rejects them; the SDK does not
//! second-guess that.
//!
//! # Example
//!
//! ```rust
//! use streampay_sdk::AuthMode;
//!
//! let mode = AuthMode::select(Some("sk_live_123"), None);
//! let headers = mode.credential_headers();
//! assert_eq!(headers, vec![("X-API-Key", "sk_live_123".to_string())]);
//! ```

use std::fmt;

use crate::error::ConfigError;

/// Header name carrying the API key credential.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// A validated StreamPay API key.
///
/// The key is passed through to the `X-API-Key` header unmodified. It never
/// appears in query strings, and the `Debug` implementation masks the value
/// so it cannot leak into logs.
///
/// # Example
///
/// ```rust
/// use streampay_sdk::ApiKey;
///
/// let key = ApiKey::new("sk_live_123").unwrap();
/// assert_eq!(key.as_ref(), "sk_live_123");
/// assert_eq!(format!("{key:?}"), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated JWT bearer token.
///
/// Sent as `Authorization: Bearer <token>`. Masked in debug output like
/// [`ApiKey`].
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    /// Creates a new validated bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyBearerToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyBearerToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for BearerToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(*****)")
    }
}

/// The authentication mode attached to every outgoing request.
///
/// A closed set: unauthenticated, API key, or bearer token. Dispatch is by
/// pattern match; there is no runtime credential probing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthMode {
    /// No credentials; requests are sent unauthenticated.
    None,
    /// API key sent via the `X-API-Key` header.
    ApiKey(ApiKey),
    /// JWT sent via the `Authorization: Bearer` header.
    Bearer(BearerToken),
}

impl AuthMode {
    /// Resolves the active mode from optionally-supplied credentials.
    ///
    /// A non-empty bearer token always wins. A non-empty API key is used
    /// only when no bearer token was supplied. Empty strings count as "not
    /// supplied", so an explicitly empty API key never shadows a bearer
    /// token and never authenticates on its own.
    #[must_use]
    pub fn select(api_key: Option<&str>, bearer_token: Option<&str>) -> Self {
        match bearer_token {
            Some(token) if !token.is_empty() => Self::Bearer(BearerToken(token.to_owned())),
            _ => match api_key {
                Some(key) if !key.is_empty() => Self::ApiKey(ApiKey(key.to_owned())),
                _ => Self::None,
            },
        }
    }

    /// Returns the credential headers for this mode.
    ///
    /// At most one header is produced, so no request can ever carry more
    /// than one credential form. Pure function of the mode.
    #[must_use]
    pub fn credential_headers(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::None => Vec::new(),
            Self::ApiKey(key) => vec![(API_KEY_HEADER, key.as_ref().to_owned())],
            Self::Bearer(token) => {
                vec![("Authorization", format!("Bearer {}", token.as_ref()))]
            }
        }
    }

    /// Returns `true` if this mode attaches credentials to requests.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        !matches!(self, Self::None)
    }
}
