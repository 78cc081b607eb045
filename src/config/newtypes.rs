//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Shopify store domain.
///
/// This newtype validates and normalizes store domains to the full
/// `shop.myshopify.com` format.
///
/// # Accepted Formats
///
/// - `shop-name` - normalized to `shop-name.myshopify.com`
/// - `shop-name.myshopify.com` - used as-is
///
/// # Serialization
///
/// `StoreDomain` serializes to and deserializes from the full domain string:
///
/// ```rust
/// use shopify_storefront::StoreDomain;
///
/// let domain = StoreDomain::new("my-store").unwrap();
/// let json = serde_json::to_string(&domain).unwrap();
/// assert_eq!(json, r#""my-store.myshopify.com""#);
/// ```
///
/// # Example
///
/// ```rust
/// use shopify_storefront::StoreDomain;
///
/// // Short format is normalized
/// let domain = StoreDomain::new("my-store").unwrap();
/// assert_eq!(domain.as_ref(), "my-store.myshopify.com");
/// assert_eq!(domain.store_name(), "my-store");
///
/// // Full format is accepted
/// let domain = StoreDomain::new("my-store.myshopify.com").unwrap();
/// assert_eq!(domain.as_ref(), "my-store.myshopify.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreDomain {
    full_domain: String,
    store_name_end: usize,
}

impl StoreDomain {
    const SUFFIX: &'static str = ".myshopify.com";

    /// Creates a new validated store domain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidStoreDomain`] if the domain is invalid.
    pub fn new(domain: impl Into<String>) -> Result<Self, ConfigError> {
        let domain = domain.into();
        let domain = domain.trim().to_lowercase();

        if domain.is_empty() {
            return Err(ConfigError::InvalidStoreDomain { domain });
        }

        // Check if it's already a full domain
        let (store_name, full_domain) = if let Some(store_name) = domain.strip_suffix(Self::SUFFIX)
        {
            (store_name.to_string(), domain)
        } else if domain.contains('.') {
            // Contains a dot but not myshopify.com suffix - invalid
            return Err(ConfigError::InvalidStoreDomain { domain });
        } else {
            // Short format - needs normalization
            (domain.clone(), format!("{}{}", domain, Self::SUFFIX))
        };

        // Validate store name
        if !Self::is_valid_store_name(&store_name) {
            return Err(ConfigError::InvalidStoreDomain {
                domain: full_domain,
            });
        }

        Ok(Self {
            store_name_end: store_name.len(),
            full_domain,
        })
    }

    /// Returns the store name portion of the domain.
    ///
    /// For `my-store.myshopify.com`, this returns `my-store`.
    #[must_use]
    pub fn store_name(&self) -> &str {
        &self.full_domain[..self.store_name_end]
    }

    fn is_valid_store_name(name: &str) -> bool {
        if name.is_empty() {
            return false;
        }

        // Store names can contain lowercase letters, numbers, and hyphens
        // They cannot start or end with a hyphen
        if name.starts_with('-') || name.ends_with('-') {
            return false;
        }

        name.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }
}

impl AsRef<str> for StoreDomain {
    fn as_ref(&self) -> &str {
        &self.full_domain
    }
}

impl Serialize for StoreDomain {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.full_domain)
    }
}

impl<'de> Deserialize<'de> for StoreDomain {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated Storefront API access token.
///
/// This newtype ensures the token is non-empty and masks its value
/// in debug output to prevent accidental exposure in logs.
///
/// The token is sent on every request in the
/// `X-Shopify-Storefront-Access-Token` header.
///
/// # Security
///
/// The `Debug` implementation masks the token value, displaying only
/// `AccessToken(*****)` instead of the actual token.
///
/// # Example
///
/// ```rust
/// use shopify_storefront::AccessToken;
///
/// let token = AccessToken::new("my-storefront-token").unwrap();
/// assert_eq!(token.as_ref(), "my-storefront-token");
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// HTTP header name carrying the token on every request.
    pub const HEADER_NAME: &'static str = "X-Shopify-Storefront-Access-Token";

    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A validated host URL used to override the API endpoint origin.
///
/// This newtype validates that the URL has a proper format with a scheme.
/// When configured, the client sends requests to this origin instead of the
/// store domain (proxy scenarios and tests).
///
/// # Example
///
/// ```rust
/// use shopify_storefront::HostUrl;
///
/// let url = HostUrl::new("https://proxy.example.com").unwrap();
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), Some("proxy.example.com"));
/// assert_eq!(url.as_ref(), "https://proxy.example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl HostUrl {
    /// Creates a new validated host URL.
    ///
    /// Any trailing slash is stripped so the URL can be used directly as a
    /// request origin.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        // Find scheme
        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidHostUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidHostUrl { url: url.clone() });
        }

        // Find host
        let host_start = scheme_end + 3; // Skip "://"
        if host_start >= url.len() {
            return Err(ConfigError::InvalidHostUrl { url: url.clone() });
        }

        // Host ends at port, path, query, or end of string
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        let host = &url[host_start..host_end];
        if host.is_empty() {
            return Err(ConfigError::InvalidHostUrl { url: url.clone() });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        let host = &self.url[self.host_start..self.host_end];
        if host.is_empty() {
            None
        } else {
            Some(host)
        }
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_rejects_empty_string() {
        let result = AccessToken::new("");
        assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
    }

    #[test]
    fn test_access_token_masks_value_in_debug() {
        let token = AccessToken::new("super-secret-token").unwrap();
        let debug_output = format!("{:?}", token);
        assert_eq!(debug_output, "AccessToken(*****)");
        assert!(!debug_output.contains("super-secret-token"));
    }

    #[test]
    fn test_access_token_header_name() {
        assert_eq!(
            AccessToken::HEADER_NAME,
            "X-Shopify-Storefront-Access-Token"
        );
    }

    #[test]
    fn test_store_domain_normalizes_short_format() {
        let domain = StoreDomain::new("my-store").unwrap();
        assert_eq!(domain.as_ref(), "my-store.myshopify.com");
        assert_eq!(domain.store_name(), "my-store");
    }

    #[test]
    fn test_store_domain_accepts_full_format() {
        let domain = StoreDomain::new("my-store.myshopify.com").unwrap();
        assert_eq!(domain.as_ref(), "my-store.myshopify.com");
        assert_eq!(domain.store_name(), "my-store");
    }

    #[test]
    fn test_store_domain_rejects_invalid_domains() {
        // Empty
        assert!(StoreDomain::new("").is_err());

        // Invalid characters
        assert!(StoreDomain::new("my store").is_err());
        assert!(StoreDomain::new("my_store").is_err());
        assert!(StoreDomain::new("MY-STORE").is_ok()); // normalized to lowercase

        // Starting/ending with hyphen
        assert!(StoreDomain::new("-my-store").is_err());
        assert!(StoreDomain::new("my-store-").is_err());

        // Wrong domain suffix
        assert!(StoreDomain::new("my-store.otherdomain.com").is_err());
    }

    #[test]
    fn test_host_url_validates_format() {
        let url = HostUrl::new("https://proxy.example.com").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_name(), Some("proxy.example.com"));

        // With port
        let url = HostUrl::new("http://localhost:3000").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), Some("localhost"));

        // With path
        let url = HostUrl::new("https://proxy.example.com/shopify").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_name(), Some("proxy.example.com"));
    }

    #[test]
    fn test_host_url_strips_trailing_slash() {
        let url = HostUrl::new("http://127.0.0.1:8080/").unwrap();
        assert_eq!(url.as_ref(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_host_url_rejects_invalid() {
        // No scheme
        assert!(HostUrl::new("proxy.example.com").is_err());

        // Empty host
        assert!(HostUrl::new("https://").is_err());

        // Invalid scheme
        assert!(HostUrl::new("://example.com").is_err());
    }

    // StoreDomain serialization tests
    #[test]
    fn test_store_domain_serializes_to_string() {
        let domain = StoreDomain::new("my-store").unwrap();
        let json = serde_json::to_string(&domain).unwrap();
        assert_eq!(json, r#""my-store.myshopify.com""#);
    }

    #[test]
    fn test_store_domain_deserializes_from_string() {
        let json = r#""test-shop.myshopify.com""#;
        let domain: StoreDomain = serde_json::from_str(json).unwrap();
        assert_eq!(domain.as_ref(), "test-shop.myshopify.com");
        assert_eq!(domain.store_name(), "test-shop");
    }

    #[test]
    fn test_store_domain_round_trip_serialization() {
        let original = StoreDomain::new("my-store").unwrap();
        let json = serde_json::to_string(&original).unwrap();
        let restored: StoreDomain = serde_json::from_str(&json).unwrap();
        assert_eq!(original, restored);
    }
}
