//! Validated newtype wrappers for configuration values.
//!
//! Invalid values are rejected on construction with clear error messages.

use crate::error::ConfigError;

/// Default StreamPay API host, from the service's published OpenAPI servers list.
pub const DEFAULT_BASE_URL: &str = "https://stream-app-service.streampay.sa";

/// A validated API base URL.
///
/// Must be an absolute `http` or `https` URL. Trailing slashes are stripped
/// so request paths (which always start with `/`) can be appended directly.
///
/// # Example
///
/// ```rust
/// use streampay_sdk::BaseUrl;
///
/// let url = BaseUrl::new("https://stream-app-service.streampay.sa/").unwrap();
/// assert_eq!(url.as_ref(), "https://stream-app-service.streampay.sa");
///
/// assert!(BaseUrl::new("stream-app-service.streampay.sa").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL is empty, has no
    /// `http`/`https` scheme, or has no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim();

        let host = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"));

        match host {
            Some(rest) if !rest.trim_matches('/').is_empty() => {
                Ok(Self(trimmed.trim_end_matches('/').to_owned()))
            }
            _ => Err(ConfigError::InvalidBaseUrl { url }),
        }
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self(DEFAULT_BASE_URL.to_owned())
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_https_url() {
        let url = BaseUrl::new("https://api.example.com").unwrap();
        assert_eq!(url.as_ref(), "https://api.example.com");
    }

    #[test]
    fn test_accepts_http_url_for_local_testing() {
        let url = BaseUrl::new("http://127.0.0.1:9090").unwrap();
        assert_eq!(url.as_ref(), "http://127.0.0.1:9090");
    }

    #[test]
    fn test_strips_trailing_slashes() {
        let url = BaseUrl::new("https://api.example.com//").unwrap();
        assert_eq!(url.as_ref(), "https://api.example.com");
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        let url = BaseUrl::new("  https://api.example.com ").unwrap();
        assert_eq!(url.as_ref(), "https://api.example.com");
    }

    #[test]
    fn test_rejects_missing_scheme() {
        assert!(matches!(
            BaseUrl::new("api.example.com"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_rejects_empty_host() {
        assert!(BaseUrl::new("https://").is_err());
        assert!(BaseUrl::new("https:///").is_err());
        assert!(BaseUrl::new("").is_err());
    }

    #[test]
    fn test_default_is_production_host() {
        assert_eq!(BaseUrl::default().as_ref(), DEFAULT_BASE_URL);
    }
}
