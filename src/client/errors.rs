//! Error types for Storefront API operations.
//!
//! This module contains error types for the transport exchange and the
//! GraphQL response envelope.
//!
//! # Error Handling
//!
//! The client distinguishes three failure scenarios:
//!
//! - [`TransportError`]: HTTP-level failure - a non-2xx status or a
//!   connection-level error. Never retried.
//! - [`ApiError`]: the endpoint responded at the transport level but the
//!   envelope carried a non-empty `errors` list.
//! - [`ClientError`]: unified error type encompassing both, plus envelope
//!   parse failures.
//!
//! Platform business errors (`userErrors` riding inside a successful
//! response) are not errors at this layer; they are surfaced to the caller
//! by the cart session manager as data.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_storefront::{ClientError, TransportError};
//!
//! match client.execute(document, None).await {
//!     Ok(data) => println!("data: {data}"),
//!     Err(ClientError::Transport(TransportError::Status { code, reason })) => {
//!         println!("HTTP {code} {reason}");
//!     }
//!     Err(ClientError::Api(e)) => println!("API error: {}", e.message),
//!     Err(e) => println!("{e}"),
//! }
//! ```

use thiserror::Error;

/// Fallback message when the endpoint reports an error without a `message`.
pub(crate) const GENERIC_API_ERROR: &str = "Storefront API request failed";

/// Error returned when the HTTP exchange itself fails.
///
/// This covers both a response with a non-success status and a failure to
/// complete the exchange at all (connection refused, DNS failure, timeout
/// reported by the transport).
///
/// # Example
///
/// ```rust
/// use shopify_storefront::TransportError;
///
/// let error = TransportError::Status {
///     code: 503,
///     reason: "Service Unavailable".to_string(),
/// };
/// assert_eq!(error.to_string(), "Network error: 503 Service Unavailable");
/// ```
#[derive(Debug, Error)]
pub enum TransportError {
    /// The endpoint responded with a non-success status code.
    #[error("Network error: {code} {reason}")]
    Status {
        /// The HTTP status code of the response.
        code: u16,
        /// The reason phrase associated with the status.
        reason: String,
    },

    /// The exchange failed below the HTTP layer.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Error returned when a successful response carries GraphQL errors.
///
/// The endpoint answers protocol-level failures (malformed query, throttling
/// at the GraphQL layer, unknown fields) with HTTP 200 and a non-empty
/// `errors` list in the envelope. The first error's message becomes the
/// display message; the complete raw list is retained for diagnostics.
///
/// # Example
///
/// ```rust
/// use shopify_storefront::ApiError;
/// use serde_json::json;
///
/// let error = ApiError {
///     message: "Field 'cart' doesn't exist".to_string(),
///     errors: vec![json!({"message": "Field 'cart' doesn't exist"})],
/// };
/// assert!(error.to_string().contains("doesn't exist"));
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiError {
    /// The first error's message, or a generic fallback if absent.
    pub message: String,
    /// The complete raw `errors` list from the response envelope.
    pub errors: Vec<serde_json::Value>,
}

impl ApiError {
    /// Builds an `ApiError` from the raw `errors` list of a response
    /// envelope, taking the first error's `message` as the display message.
    #[must_use]
    pub fn from_errors(errors: Vec<serde_json::Value>) -> Self {
        let message = errors
            .first()
            .and_then(|e| e.get("message"))
            .and_then(serde_json::Value::as_str)
            .unwrap_or(GENERIC_API_ERROR)
            .to_string();
        Self { message, errors }
    }
}

/// Unified error type for Storefront API operations.
///
/// This enum provides a single error type for client operations, making it
/// easier to handle errors at API boundaries. Use pattern matching to
/// handle specific error types.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_storefront::ClientError;
///
/// match client.execute(document, None).await {
///     Ok(data) => { /* interpret data */ }
///     Err(ClientError::Transport(e)) => { /* transport failure */ }
///     Err(ClientError::Api(e)) => { /* GraphQL errors in envelope */ }
///     Err(ClientError::Parse(e)) => { /* body was not the JSON envelope */ }
/// }
/// ```
#[derive(Debug, Error)]
pub enum ClientError {
    /// The HTTP exchange failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The envelope carried a non-empty `errors` list.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A successful response's body was not the expected JSON shape.
    #[error("Invalid response body: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        Self::Transport(TransportError::Network(error))
    }
}
