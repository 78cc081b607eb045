//! API client for Storefront GraphQL communication.
//!
//! This module provides the transport layer of the crate: a schema-less
//! GraphQL client that sends one document per call and hands back the
//! envelope's `data` payload.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`StorefrontClient`]: The async GraphQL client
//! - [`ClientError`]: Unified error type for client operations
//! - [`TransportError`]: HTTP-level failures (non-2xx status, connectivity)
//! - [`ApiError`]: GraphQL `errors` list in an otherwise successful response
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_storefront::{StorefrontClient, StorefrontConfig};
//!
//! let config = StorefrontConfig::from_env()?;
//! let client = StorefrontClient::new(&config);
//!
//! let data = client.execute("query { shop { name } }", None).await?;
//! println!("Shop: {}", data["shop"]["name"]);
//! ```

mod errors;
mod storefront;

pub use errors::{ApiError, ClientError, TransportError};
pub use storefront::{StorefrontClient, CLIENT_VERSION};
