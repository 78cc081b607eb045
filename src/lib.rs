//! # Shopify Storefront Rust Client
//!
//! A Rust client for the Shopify Storefront API, providing type-safe
//! configuration, schema-less GraphQL execution, typed product listings, and
//! persisted cart session management for headless storefronts.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`StorefrontConfig`] and [`StorefrontConfigBuilder`]
//! - Validated newtypes for the store domain, access token, and API version
//! - An async GraphQL client ([`StorefrontClient`]) for the Storefront endpoint
//! - Typed product listings via the [`products`] module
//! - Cart session management with checkout-URL reconciliation via the
//!   [`cart`] module
//!
//! The platform owns all commerce state - products, carts, pricing, and
//! checkout. This crate's job is the API exchange, the persistence of two
//! identifiers (cart id and checkout URL), and the policy that keeps them
//! consistent.
//!
//! ## Quick Start
//!
//! ```rust
//! use shopify_storefront::{StorefrontConfig, StoreDomain, AccessToken, ApiVersion};
//!
//! // Create configuration using the builder pattern
//! let config = StorefrontConfig::builder()
//!     .store_domain(StoreDomain::new("your-store").unwrap())
//!     .access_token(AccessToken::new("your-storefront-token").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//! ```
//!
//! Or load it from the environment at process start:
//!
//! ```rust,ignore
//! use shopify_storefront::StorefrontConfig;
//!
//! // Reads SHOPIFY_STORE_DOMAIN, SHOPIFY_STOREFRONT_API_TOKEN,
//! // and optionally SHOPIFY_API_VERSION
//! let config = StorefrontConfig::from_env()?;
//! ```
//!
//! ## Querying Products
//!
//! ```rust,ignore
//! use shopify_storefront::{products, StorefrontClient, StorefrontConfig};
//!
//! let client = StorefrontClient::new(&StorefrontConfig::from_env()?);
//!
//! for listing in products::list(&client, 8).await? {
//!     let price = &listing.variant.price;
//!     println!("{}: {} {}", listing.title, price.amount, price.currency_code);
//! }
//! ```
//!
//! ## Managing a Cart
//!
//! ```rust,ignore
//! use shopify_storefront::{StorefrontClient, StorefrontConfig};
//! use shopify_storefront::cart::{CartSessionManager, FileStore};
//!
//! let client = StorefrontClient::new(&StorefrontConfig::from_env()?);
//! let store = FileStore::open("cart_session.json")?;
//! let mut cart = CartSessionManager::new(client, store);
//!
//! // A cart is created lazily on the first add
//! if let Some(outcome) = cart.add_line("gid://shopify/ProductVariant/123", 1).await? {
//!     for error in &outcome.user_errors {
//!         eprintln!("platform rejected the line: {}", error.message);
//!     }
//! }
//!
//! // Checkout handoff: navigate the user to the persisted URL
//! if let Some(url) = cart.checkout_url() {
//!     println!("checkout at {url}");
//! }
//!
//! // Buy-now side channel: a throwaway cart, the running session untouched
//! if let Some(url) = cart.buy_now("gid://shopify/ProductVariant/456").await? {
//!     println!("redirect to {url}");
//! }
//! ```
//!
//! ## Error Handling
//!
//! Network and protocol failures surface as [`ClientError`]:
//! [`TransportError`] for HTTP-level failures, [`ApiError`] for a GraphQL
//! `errors` list in an otherwise successful response. Platform business
//! errors (`userErrors`) are data, not errors - the cart module hands them
//! to the caller untouched. None of these are retried.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe client**: [`StorefrontClient`] is `Send + Sync`
//! - **Single writer**: Cart state has one writer per store; no locking
//! - **Async-first**: Designed for use with the Tokio async runtime

pub mod cart;
pub mod client;
pub mod config;
pub mod error;
pub mod products;

// Re-export public types at crate root for convenience
pub use client::{ApiError, ClientError, StorefrontClient, TransportError};
pub use config::{
    AccessToken, ApiVersion, HostUrl, StoreDomain, StorefrontConfig, StorefrontConfigBuilder,
};
pub use error::ConfigError;

// Re-export the cart session types for convenience
pub use cart::{CartSession, CartSessionManager, LineAddOutcome, UserError};
