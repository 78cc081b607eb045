//! Configuration types for the Storefront client.
//!
//! This module provides the core configuration types used to initialize
//! the client for communication with the Storefront API.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`StorefrontConfig`]: The main configuration struct holding all client settings
//! - [`StorefrontConfigBuilder`]: A builder for constructing [`StorefrontConfig`] instances
//! - [`StoreDomain`]: A validated store domain
//! - [`AccessToken`]: A validated Storefront API access token with masked debug output
//! - [`HostUrl`]: A validated endpoint origin override
//! - [`ApiVersion`]: The Storefront API version to address
//!
//! # Environment Variables
//!
//! [`StorefrontConfig::from_env`] loads configuration at process start from:
//!
//! - `SHOPIFY_STORE_DOMAIN` (required) - store domain, short or full format
//! - `SHOPIFY_STOREFRONT_API_TOKEN` (required) - Storefront API access token
//! - `SHOPIFY_API_VERSION` (optional) - API version, defaults to the latest
//!
//! # Example
//!
//! ```rust
//! use shopify_storefront::{StorefrontConfig, StoreDomain, AccessToken, ApiVersion};
//!
//! let config = StorefrontConfig::builder()
//!     .store_domain(StoreDomain::new("my-store").unwrap())
//!     .access_token(AccessToken::new("my-token").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod version;

pub use newtypes::{AccessToken, HostUrl, StoreDomain};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Environment variable naming the store domain.
const ENV_STORE_DOMAIN: &str = "SHOPIFY_STORE_DOMAIN";

/// Environment variable naming the Storefront API access token.
const ENV_ACCESS_TOKEN: &str = "SHOPIFY_STOREFRONT_API_TOKEN";

/// Environment variable naming the API version (optional).
const ENV_API_VERSION: &str = "SHOPIFY_API_VERSION";

/// Configuration for the Storefront client.
///
/// This struct holds everything needed to compose the GraphQL endpoint URL
/// and the authentication header: the store domain, the static access token,
/// and the API version. An optional host override redirects requests to a
/// different origin (proxy scenarios and tests).
///
/// # Thread Safety
///
/// `StorefrontConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use shopify_storefront::{StorefrontConfig, StoreDomain, AccessToken};
///
/// let config = StorefrontConfig::builder()
///     .store_domain(StoreDomain::new("my-store").unwrap())
///     .access_token(AccessToken::new("my-token").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.store_domain().as_ref(), "my-store.myshopify.com");
/// ```
#[derive(Clone, Debug)]
pub struct StorefrontConfig {
    store_domain: StoreDomain,
    access_token: AccessToken,
    api_version: ApiVersion,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl StorefrontConfig {
    /// Creates a new builder for constructing a `StorefrontConfig`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopify_storefront::{StorefrontConfig, StoreDomain, AccessToken};
    ///
    /// let config = StorefrontConfig::builder()
    ///     .store_domain(StoreDomain::new("my-store").unwrap())
    ///     .access_token(AccessToken::new("token").unwrap())
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder() -> StorefrontConfigBuilder {
        StorefrontConfigBuilder::new()
    }

    /// Loads configuration from environment variables at process start.
    ///
    /// Reads `SHOPIFY_STORE_DOMAIN` and `SHOPIFY_STOREFRONT_API_TOKEN`
    /// (required) and `SHOPIFY_API_VERSION` (optional, defaults to
    /// [`ApiVersion::latest`]).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] when a required variable is
    /// unset, or the validation error of the offending value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let store_domain = std::env::var(ENV_STORE_DOMAIN)
            .map_err(|_| ConfigError::MissingEnvVar {
                name: ENV_STORE_DOMAIN,
            })
            .and_then(StoreDomain::new)?;

        let access_token = std::env::var(ENV_ACCESS_TOKEN)
            .map_err(|_| ConfigError::MissingEnvVar {
                name: ENV_ACCESS_TOKEN,
            })
            .and_then(AccessToken::new)?;

        let api_version = match std::env::var(ENV_API_VERSION) {
            Ok(raw) => raw.parse()?,
            Err(_) => ApiVersion::latest(),
        };

        Self::builder()
            .store_domain(store_domain)
            .access_token(access_token)
            .api_version(api_version)
            .build()
    }

    /// Returns the store domain.
    #[must_use]
    pub const fn store_domain(&self) -> &StoreDomain {
        &self.store_domain
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the endpoint origin override, if configured.
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostUrl> {
        self.api_host.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify StorefrontConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StorefrontConfig>();
};

/// Builder for constructing [`StorefrontConfig`] instances.
///
/// This builder provides a fluent API for configuring the client. Required
/// fields are `store_domain` and `access_token`. All other fields have
/// sensible defaults.
///
/// # Defaults
///
/// - `api_version`: Latest stable version
/// - `api_host`: `None` (requests go to the store domain)
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use shopify_storefront::{StorefrontConfig, StoreDomain, AccessToken, ApiVersion, HostUrl};
///
/// let config = StorefrontConfig::builder()
///     .store_domain(StoreDomain::new("my-store").unwrap())
///     .access_token(AccessToken::new("token").unwrap())
///     .api_version(ApiVersion::V2025_01)
///     .api_host(HostUrl::new("https://proxy.example.com").unwrap())
///     .user_agent_prefix("MyStorefront/1.0")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct StorefrontConfigBuilder {
    store_domain: Option<StoreDomain>,
    access_token: Option<AccessToken>,
    api_version: Option<ApiVersion>,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl StorefrontConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the store domain (required).
    #[must_use]
    pub fn store_domain(mut self, domain: StoreDomain) -> Self {
        self.store_domain = Some(domain);
        self
    }

    /// Sets the Storefront API access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets an endpoint origin override.
    ///
    /// When set, requests are sent to this origin instead of
    /// `https://{store-domain}`. Intended for proxies and test servers.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`StorefrontConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `store_domain` or
    /// `access_token` are not set.
    pub fn build(self) -> Result<StorefrontConfig, ConfigError> {
        let store_domain = self.store_domain.ok_or(ConfigError::MissingRequiredField {
            field: "store_domain",
        })?;
        let access_token = self.access_token.ok_or(ConfigError::MissingRequiredField {
            field: "access_token",
        })?;

        Ok(StorefrontConfig {
            store_domain,
            access_token,
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            api_host: self.api_host,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
