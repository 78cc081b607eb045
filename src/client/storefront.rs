//! GraphQL client implementation for the Storefront API.
//!
//! This module provides the [`StorefrontClient`] type for executing GraphQL
//! documents against the Storefront API endpoint.
//!
//! # Endpoint Format
//!
//! The Storefront API lives at
//! `https://{store}.myshopify.com/api/{version}/graphql.json`. The client
//! composes this URL once at construction from the configuration; a
//! configured host override replaces the origin (proxy scenarios and tests).
//!
//! # Authentication
//!
//! Every request carries the static `X-Shopify-Storefront-Access-Token`
//! header. There is no OAuth flow and no token refresh.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_storefront::{StorefrontClient, StorefrontConfig};
//! use serde_json::json;
//!
//! let config = StorefrontConfig::from_env()?;
//! let client = StorefrontClient::new(&config);
//!
//! // Simple query
//! let data = client.execute("query { shop { name } }", None).await?;
//!
//! // Query with variables
//! let data = client.execute(
//!     "query Products($first: Int!) { products(first: $first) { edges { node { title } } } }",
//!     Some(json!({ "first": 8 })),
//! ).await?;
//! ```

use serde_json::Value;

use crate::client::errors::{ApiError, ClientError, TransportError};
use crate::config::{AccessToken, StorefrontConfig};

/// Crate version embedded in the User-Agent header.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// GraphQL client for the Storefront API.
///
/// Executes schema-less GraphQL documents: the caller supplies the document
/// and variables, and receives the envelope's `data` field verbatim as
/// [`serde_json::Value`]. Interpreting the shape of `data` is the caller's
/// responsibility (see [`crate::products`] and [`crate::cart`] for typed
/// interpretations).
///
/// Each call is one request: there is no retry, no batching, and no timeout
/// beyond the transport default.
///
/// # Thread Safety
///
/// `StorefrontClient` is `Send + Sync` and cheap to clone, making it safe to
/// share across async tasks.
#[derive(Debug, Clone)]
pub struct StorefrontClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Fully composed endpoint URL.
    endpoint: String,
    /// The static access token sent on every request.
    access_token: AccessToken,
    /// User-Agent header value.
    user_agent: String,
}

// Verify StorefrontClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StorefrontClient>();
};

impl StorefrontClient {
    /// Creates a new Storefront client from the given configuration.
    ///
    /// The endpoint URL is composed once here:
    /// `{origin}/api/{version}/graphql.json`, where the origin is the
    /// configured host override or `https://{store-domain}`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopify_storefront::{StorefrontClient, StorefrontConfig, StoreDomain, AccessToken};
    ///
    /// let config = StorefrontConfig::builder()
    ///     .store_domain(StoreDomain::new("my-store").unwrap())
    ///     .access_token(AccessToken::new("my-token").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = StorefrontClient::new(&config);
    /// assert!(client.endpoint().ends_with("/graphql.json"));
    /// ```
    #[must_use]
    pub fn new(config: &StorefrontConfig) -> Self {
        let origin = config.api_host().map_or_else(
            || format!("https://{}", config.store_domain().as_ref()),
            |host| host.as_ref().to_string(),
        );
        let endpoint = format!("{origin}/api/{}/graphql.json", config.api_version());

        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent =
            format!("{user_agent_prefix}Shopify Storefront Library v{CLIENT_VERSION}");

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            endpoint,
            access_token: config.access_token().clone(),
            user_agent,
        }
    }

    /// Returns the fully composed endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Executes a GraphQL document against the Storefront API.
    ///
    /// Sends `{ "query": document, "variables": variables }` as a JSON POST
    /// body and returns the envelope's `data` field verbatim. An absent
    /// `data` field is returned as JSON null.
    ///
    /// # Arguments
    ///
    /// * `document` - The GraphQL query or mutation string
    /// * `variables` - Optional variables for the document
    ///
    /// # Errors
    ///
    /// - [`ClientError::Transport`] for a non-2xx status
    ///   ([`TransportError::Status`] with code and reason phrase) or a
    ///   connection-level failure ([`TransportError::Network`]).
    /// - [`ClientError::Api`] when the envelope carries a non-empty `errors`
    ///   list; the error exposes the first message and the raw list.
    /// - [`ClientError::Parse`] when a 2xx body is not valid JSON.
    ///
    /// Note that platform business errors (`userErrors` inside mutation
    /// payloads) ride inside `data` and are not errors at this layer.
    pub async fn execute(
        &self,
        document: &str,
        variables: Option<Value>,
    ) -> Result<Value, ClientError> {
        let body = serde_json::json!({
            "query": document,
            "variables": variables.unwrap_or_else(|| Value::Object(serde_json::Map::new())),
        });

        let response = self
            .client
            .post(&self.endpoint)
            .header(AccessToken::HEADER_NAME, self.access_token.as_ref())
            .header("Accept", "application/json")
            .header("User-Agent", &self.user_agent)
            .json(&body)
            .send()
            .await
            .map_err(TransportError::Network)?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(code = status.as_u16(), "Storefront API request failed");
            return Err(TransportError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            }
            .into());
        }

        let text = response.text().await.map_err(TransportError::Network)?;
        let mut envelope: Value = serde_json::from_str(&text)?;

        // GraphQL-level failures arrive with HTTP 200 and a non-empty
        // errors list; an empty list is a success.
        if let Some(errors) = envelope.get("errors").and_then(Value::as_array) {
            if !errors.is_empty() {
                let error = ApiError::from_errors(errors.clone());
                tracing::debug!(message = %error.message, "Storefront API returned errors");
                return Err(error.into());
            }
        }

        Ok(envelope
            .get_mut("data")
            .map_or(Value::Null, Value::take))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiVersion, HostUrl, StoreDomain};

    fn create_test_config() -> StorefrontConfig {
        StorefrontConfig::builder()
            .store_domain(StoreDomain::new("test-shop").unwrap())
            .access_token(AccessToken::new("test-token").unwrap())
            .api_version(ApiVersion::V2025_01)
            .build()
            .unwrap()
    }

    // === Endpoint Composition Tests ===

    #[test]
    fn test_endpoint_composed_from_store_domain() {
        let client = StorefrontClient::new(&create_test_config());

        assert_eq!(
            client.endpoint(),
            "https://test-shop.myshopify.com/api/2025-01/graphql.json"
        );
    }

    #[test]
    fn test_endpoint_is_api_not_admin_api() {
        let client = StorefrontClient::new(&create_test_config());

        // Storefront API uses /api/{version}, NOT /admin/api/{version}
        assert!(!client.endpoint().contains("admin"));
    }

    #[test]
    fn test_endpoint_with_different_api_versions() {
        let config = StorefrontConfig::builder()
            .store_domain(StoreDomain::new("test-shop").unwrap())
            .access_token(AccessToken::new("test-token").unwrap())
            .api_version(ApiVersion::V2024_10)
            .build()
            .unwrap();
        let client = StorefrontClient::new(&config);

        assert!(client.endpoint().contains("/api/2024-10/"));
    }

    #[test]
    fn test_host_override_replaces_origin() {
        let config = StorefrontConfig::builder()
            .store_domain(StoreDomain::new("test-shop").unwrap())
            .access_token(AccessToken::new("test-token").unwrap())
            .api_version(ApiVersion::V2025_01)
            .api_host(HostUrl::new("http://127.0.0.1:8080").unwrap())
            .build()
            .unwrap();
        let client = StorefrontClient::new(&config);

        assert_eq!(
            client.endpoint(),
            "http://127.0.0.1:8080/api/2025-01/graphql.json"
        );
    }

    // === Thread Safety Tests ===

    #[test]
    fn test_storefront_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StorefrontClient>();
    }

    #[test]
    fn test_storefront_client_constructor_is_infallible() {
        // This test verifies that new() returns Self directly, not Result
        let _client: StorefrontClient = StorefrontClient::new(&create_test_config());
    }

    // === Debug Masking Tests ===

    #[test]
    fn test_debug_does_not_leak_access_token() {
        let client = StorefrontClient::new(&create_test_config());
        let debug_output = format!("{:?}", client);

        assert!(!debug_output.contains("test-token"));
    }
}
