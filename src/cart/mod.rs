//! Cart session management for the Storefront API.
//!
//! This module owns the one piece of recurring state in the crate: the
//! persisted pair of cart id and checkout URL, and the policy that keeps
//! them consistent across cart mutations.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`CartSessionManager`]: reconciles the persisted session across
//!   `ensure_cart`, `add_line`, and `buy_now`
//! - [`CartSession`]: snapshot of the two persisted identifiers
//! - [`LineAddOutcome`]: an add-line result with the platform's `userErrors`
//! - [`SessionStore`]: the storage seam, with [`MemoryStore`] and
//!   [`FileStore`] implementations
//!
//! # Reconciliation Policy
//!
//! The checkout URL is not stable: the platform may issue a new one as a
//! cart's contents change. The manager therefore overwrites the persisted
//! URL with the one from every successful mutation response that carries
//! one, so a stale URL is never left behind. Buy-now purchases deliberately
//! bypass this machinery - they create a throwaway cart and leave the
//! running session untouched.

mod session;
mod store;

pub use session::{CartSession, CartSessionManager, LineAddOutcome, UserError};
pub use store::{FileStore, MemoryStore, SessionStore, CART_ID_KEY, CHECKOUT_URL_KEY};
