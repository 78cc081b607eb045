//! Cart session management and checkout-URL reconciliation.
//!
//! This module provides the [`CartSessionManager`] type, which owns the two
//! persisted identifiers of a shopping session - the cart id and the
//! checkout URL - and reconciles them across cart mutations.
//!
//! # Session Lifecycle
//!
//! A session starts empty. The first cart-mutating operation creates a cart
//! on the platform and persists its id. Every subsequent mutation that
//! returns a checkout URL overwrites the persisted URL, because the platform
//! may issue a different URL as the cart's contents change. `clear` returns
//! the session to empty from any state.
//!
//! The manager trusts persisted state: an existing cart id is never
//! re-validated with the platform.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_storefront::{StorefrontClient, StorefrontConfig};
//! use shopify_storefront::cart::{CartSessionManager, FileStore};
//!
//! let config = StorefrontConfig::from_env()?;
//! let client = StorefrontClient::new(&config);
//! let store = FileStore::open("cart_session.json")?;
//! let mut cart = CartSessionManager::new(client, store);
//!
//! // Add an item; a cart is created on first use
//! let outcome = cart.add_line("gid://shopify/ProductVariant/123", 1).await?;
//!
//! // Hand off to checkout
//! if let Some(url) = cart.checkout_url() {
//!     println!("redirect to {url}");
//! }
//! ```

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{json, Value};

use crate::cart::store::{SessionStore, CART_ID_KEY, CHECKOUT_URL_KEY};
use crate::client::{ClientError, StorefrontClient};

/// Creates an empty cart. The created cart may be returned without an id or
/// checkout URL; callers must tolerate partial results.
const CART_CREATE: &str = r"
mutation CreateCart {
  cartCreate {
    cart {
      id
      checkoutUrl
    }
    userErrors {
      field
      message
    }
  }
}
";

/// Adds a single line to an existing cart.
const CART_LINES_ADD: &str = r"
mutation AddLine($cartId: ID!, $lines: [CartLineInput!]!) {
  cartLinesAdd(cartId: $cartId, lines: $lines) {
    cart {
      id
      checkoutUrl
    }
    userErrors {
      field
      message
    }
  }
}
";

/// Creates a throwaway single-line cart for an immediate checkout redirect.
const BUY_NOW_CREATE: &str = r"
mutation BuyNow($variantId: ID!) {
  cartCreate(input: { lines: [{ merchandiseId: $variantId, quantity: 1 }] }) {
    cart {
      checkoutUrl
    }
    userErrors {
      field
      message
    }
  }
}
";

/// Snapshot of the persisted cart session.
///
/// Both fields are independently optional: a cart may exist before the
/// platform has issued a checkout URL for it (a valid but degraded state in
/// which checkout cannot proceed yet).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSession {
    /// Opaque id of the platform-side cart, if one has been created.
    pub cart_id: Option<String>,
    /// Platform-issued URL completing payment for the cart's contents.
    pub checkout_url: Option<String>,
}

impl CartSession {
    /// Returns `true` when neither identifier is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cart_id.is_none() && self.checkout_url.is_none()
    }

    fn load(store: &impl SessionStore) -> Self {
        Self {
            cart_id: store.get(CART_ID_KEY),
            checkout_url: store.get(CHECKOUT_URL_KEY),
        }
    }
}

/// A platform-reported business error riding inside a successful mutation
/// response (e.g. "variant unavailable").
///
/// The session manager never interprets these; they are surfaced verbatim in
/// [`LineAddOutcome`] for the caller to act on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserError {
    /// Path to the input field the error refers to, when the platform
    /// provides one.
    #[serde(default)]
    pub field: Option<Vec<String>>,
    /// Human-readable error message.
    pub message: String,
}

/// Result of a successful [`CartSessionManager::add_line`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineAddOutcome {
    /// The persisted session after reconciliation.
    pub session: CartSession,
    /// Business errors the platform reported for the mutation, if any.
    /// An empty list means the line was accepted.
    pub user_errors: Vec<UserError>,
}

// Response payload shapes. The client returns `data` verbatim; these structs
// interpret only the fields the manager persists.

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CartCreateData {
    cart_create: Option<CartMutationPayload>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CartLinesAddData {
    cart_lines_add: Option<CartMutationPayload>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CartMutationPayload {
    cart: Option<CartHandle>,
    #[serde(default)]
    user_errors: Vec<UserError>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CartHandle {
    id: Option<String>,
    checkout_url: Option<String>,
}

/// Deserializes a mutation payload, tolerating an absent (`null`) `data`
/// field as an empty payload.
fn parse_payload<T: DeserializeOwned + Default>(data: Value) -> Result<T, ClientError> {
    if data.is_null() {
        return Ok(T::default());
    }
    Ok(serde_json::from_value(data)?)
}

/// Maintains exactly one [`CartSession`] across cart operations.
///
/// The manager is generic over its [`SessionStore`]; the store is the single
/// source of truth for persisted state, read through a thin in-memory cache
/// that is invalidated on every write so the two can never drift.
///
/// Mutating operations take `&mut self` - one writer per store instance, no
/// locking. [`buy_now`](Self::buy_now) takes `&self` because it never
/// touches persisted state.
///
/// Every network-dependent operation may fail with [`ClientError`]; the
/// manager adds no retry and surfaces failures unmodified, except the one
/// designated soft-failure case in [`ensure_cart`](Self::ensure_cart).
#[derive(Debug)]
pub struct CartSessionManager<S: SessionStore> {
    client: StorefrontClient,
    store: S,
    cached: Option<CartSession>,
}

impl<S: SessionStore> CartSessionManager<S> {
    /// Creates a manager over the given client and store.
    #[must_use]
    pub const fn new(client: StorefrontClient, store: S) -> Self {
        Self {
            client,
            store,
            cached: None,
        }
    }

    /// Returns the current persisted session snapshot.
    pub fn session(&mut self) -> CartSession {
        if self.cached.is_none() {
            self.cached = Some(CartSession::load(&self.store));
        }
        self.cached.clone().unwrap_or_default()
    }

    /// Returns the persisted cart id, if set.
    pub fn cart_id(&mut self) -> Option<String> {
        self.session().cart_id
    }

    /// Returns the persisted checkout URL, if set.
    pub fn checkout_url(&mut self) -> Option<String> {
        self.session().checkout_url
    }

    /// Ensures a platform-side cart exists, creating one if necessary.
    ///
    /// When a cart id is already persisted the existing session is returned
    /// unchanged with zero network calls; local state is trusted and never
    /// re-validated with the platform.
    ///
    /// Otherwise an empty cart is created and whichever of id / checkout URL
    /// the response carries is persisted. A creation response without a cart
    /// id is a soft failure: the returned session is empty, nothing is
    /// persisted, and no error is raised - the platform's `userErrors` list
    /// is the authoritative failure channel and is not reinterpreted here.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the creation request fails at the
    /// transport or envelope level.
    pub async fn ensure_cart(&mut self) -> Result<CartSession, ClientError> {
        let session = self.session();
        if session.cart_id.is_some() {
            return Ok(session);
        }

        let data = self.client.execute(CART_CREATE, None).await?;
        let payload: CartCreateData = parse_payload(data)?;
        let cart = payload
            .cart_create
            .and_then(|p| p.cart)
            .unwrap_or_default();

        let Some(id) = cart.id else {
            tracing::warn!("Cart creation returned no id; leaving session empty");
            return Ok(CartSession::default());
        };

        self.store.set(CART_ID_KEY, &id);
        if let Some(url) = &cart.checkout_url {
            self.store.set(CHECKOUT_URL_KEY, url);
        }
        self.cached = None;

        tracing::debug!(cart_id = %id, "Created cart");
        Ok(self.session())
    }

    /// Adds a single line to the session's cart, creating the cart first if
    /// none exists.
    ///
    /// `quantity` must be at least 1. Whether a repeated variant increments
    /// an existing line or adds a duplicate is the platform's decision; no
    /// local merging happens.
    ///
    /// On success, a checkout URL in the response overwrites the persisted
    /// one - the URL can change as the cart's contents change, and the
    /// latest mutation's URL always wins. The platform's `userErrors` are
    /// returned in the outcome without interpretation.
    ///
    /// Returns `Ok(None)` when no cart could be ensured (the soft-failure
    /// case of [`ensure_cart`](Self::ensure_cart)); the operation is then a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when either the creation or the add-line
    /// request fails at the transport or envelope level.
    pub async fn add_line(
        &mut self,
        variant_id: &str,
        quantity: u32,
    ) -> Result<Option<LineAddOutcome>, ClientError> {
        let session = self.ensure_cart().await?;
        let Some(cart_id) = session.cart_id else {
            tracing::warn!(variant_id, "No cart available; dropping add-line request");
            return Ok(None);
        };

        let variables = json!({
            "cartId": cart_id,
            "lines": [{ "merchandiseId": variant_id, "quantity": quantity }],
        });
        let data = self.client.execute(CART_LINES_ADD, Some(variables)).await?;
        let payload: CartLinesAddData = parse_payload(data)?;
        let (cart, user_errors) = payload
            .cart_lines_add
            .map_or_else(Default::default, |p| {
                (p.cart.unwrap_or_default(), p.user_errors)
            });

        if let Some(url) = &cart.checkout_url {
            self.store.set(CHECKOUT_URL_KEY, url);
            self.cached = None;
            tracing::debug!("Reconciled checkout URL from add-line response");
        }

        Ok(Some(LineAddOutcome {
            session: self.session(),
            user_errors,
        }))
    }

    /// Creates a brand-new single-line cart and returns its checkout URL for
    /// an immediate redirect.
    ///
    /// This is a side channel, not a mutation of the running cart: the
    /// persisted session is left untouched regardless of its state, which is
    /// why this method takes `&self`. Returns `Ok(None)` when the platform
    /// returned no URL (the caller should tell the user checkout could not
    /// start).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the creation request fails at the
    /// transport or envelope level.
    pub async fn buy_now(&self, variant_id: &str) -> Result<Option<String>, ClientError> {
        let variables = json!({ "variantId": variant_id });
        let data = self.client.execute(BUY_NOW_CREATE, Some(variables)).await?;
        let payload: CartCreateData = parse_payload(data)?;
        let url = payload
            .cart_create
            .and_then(|p| p.cart)
            .and_then(|c| c.checkout_url);

        if url.is_none() {
            tracing::warn!(variant_id, "Buy-now cart creation returned no checkout URL");
        }
        Ok(url)
    }

    /// Removes both persisted identifiers unconditionally, returning the
    /// session to empty. The next cart-mutating operation creates a fresh
    /// cart.
    pub fn clear(&mut self) {
        self.store.remove(CART_ID_KEY);
        self.store.remove(CHECKOUT_URL_KEY);
        self.cached = None;
    }
}
