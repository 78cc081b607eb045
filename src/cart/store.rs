//! Durable key-value storage for the cart session.
//!
//! The cart session manager persists exactly two string values - the cart id
//! and the checkout URL - under fixed keys. This module abstracts where they
//! live behind the minimal [`SessionStore`] trait so the manager is
//! storage-agnostic and testable with an in-memory fake.
//!
//! Two implementations are provided:
//!
//! - [`MemoryStore`]: `HashMap`-backed, for tests and ephemeral sessions
//! - [`FileStore`]: a JSON file flushed on every write, for durable sessions
//!
//! Neither applies schema versioning, encryption, or expiry.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Storage key holding the persisted cart id.
pub const CART_ID_KEY: &str = "shopify_cart_id";

/// Storage key holding the persisted checkout URL.
pub const CHECKOUT_URL_KEY: &str = "shopify_checkout_url";

/// A durable key-value store scoped to the client installation.
///
/// The interface mirrors browser-local storage: string keys, string values,
/// infallible writes. Implementations that can fail on write (e.g. a file
/// store) log the failure instead of raising; persistence here is
/// best-effort, and the authoritative cart state lives on the platform.
pub trait SessionStore: Send {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any prior value.
    fn set(&mut self, key: &str, value: &str);

    /// Removes the value stored under `key`, if any.
    fn remove(&mut self, key: &str);
}

/// In-memory [`SessionStore`] backed by a `HashMap`.
///
/// Values live only as long as the store instance. Used for tests and for
/// callers that do not want cross-process persistence.
///
/// # Example
///
/// ```rust
/// use shopify_storefront::cart::{MemoryStore, SessionStore};
///
/// let mut store = MemoryStore::new();
/// store.set("shopify_cart_id", "gid://shopify/Cart/1");
/// assert_eq!(store.get("shopify_cart_id").as_deref(), Some("gid://shopify/Cart/1"));
///
/// store.remove("shopify_cart_id");
/// assert_eq!(store.get("shopify_cart_id"), None);
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// File-backed [`SessionStore`] holding the key-value map as a JSON object.
///
/// The whole map is rewritten on every `set`/`remove`; with two small string
/// values this is never a meaningful cost. A missing file reads as an empty
/// store. A corrupt file is logged and treated as empty rather than failing
/// the session.
///
/// # Example
///
/// ```rust,no_run
/// use shopify_storefront::cart::{FileStore, SessionStore};
///
/// let mut store = FileStore::open("cart_session.json").unwrap();
/// store.set("shopify_cart_id", "gid://shopify/Cart/1");
/// ```
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStore {
    /// Opens a file-backed store at `path`, loading any existing contents.
    ///
    /// # Errors
    ///
    /// Returns an error when the file exists but cannot be read. A missing
    /// file is not an error; a file with corrupt contents is logged and
    /// treated as empty.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|error| {
                tracing::warn!(path = %path.display(), %error, "Discarding corrupt session store");
                HashMap::new()
            }),
            Err(error) if error.kind() == io::ErrorKind::NotFound => HashMap::new(),
            Err(error) => return Err(error),
        };

        Ok(Self { path, entries })
    }

    /// Returns the path backing this store.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) {
        let serialized = match serde_json::to_string_pretty(&self.entries) {
            Ok(serialized) => serialized,
            Err(error) => {
                tracing::warn!(%error, "Failed to serialize session store");
                return;
            }
        };
        if let Err(error) = fs::write(&self.path, serialized) {
            tracing::warn!(path = %self.path.display(), %error, "Failed to write session store");
        }
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush();
    }

    fn remove(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // === MemoryStore Tests ===

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get(CART_ID_KEY), None);

        store.set(CART_ID_KEY, "gid://shopify/Cart/abc");
        assert_eq!(
            store.get(CART_ID_KEY).as_deref(),
            Some("gid://shopify/Cart/abc")
        );

        store.remove(CART_ID_KEY);
        assert_eq!(store.get(CART_ID_KEY), None);
    }

    #[test]
    fn test_memory_store_set_overwrites() {
        let mut store = MemoryStore::new();
        store.set(CHECKOUT_URL_KEY, "https://shop/checkout/1");
        store.set(CHECKOUT_URL_KEY, "https://shop/checkout/2");
        assert_eq!(
            store.get(CHECKOUT_URL_KEY).as_deref(),
            Some("https://shop/checkout/2")
        );
    }

    #[test]
    fn test_memory_store_remove_missing_key_is_noop() {
        let mut store = MemoryStore::new();
        store.remove("never-set");
        assert_eq!(store.get("never-set"), None);
    }

    #[test]
    fn test_key_constants() {
        assert_eq!(CART_ID_KEY, "shopify_cart_id");
        assert_eq!(CHECKOUT_URL_KEY, "shopify_checkout_url");
    }

    // === FileStore Tests ===

    #[test]
    fn test_file_store_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        {
            let mut store = FileStore::open(&path).unwrap();
            store.set(CART_ID_KEY, "gid://shopify/Cart/abc");
            store.set(CHECKOUT_URL_KEY, "https://shop/checkout/1");
        }

        let store = FileStore::open(&path).unwrap();
        assert_eq!(
            store.get(CART_ID_KEY).as_deref(),
            Some("gid://shopify/Cart/abc")
        );
        assert_eq!(
            store.get(CHECKOUT_URL_KEY).as_deref(),
            Some("https://shop/checkout/1")
        );
    }

    #[test]
    fn test_file_store_missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("nonexistent.json")).unwrap();
        assert_eq!(store.get(CART_ID_KEY), None);
    }

    #[test]
    fn test_file_store_corrupt_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json at all {{{").unwrap();

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get(CART_ID_KEY), None);
    }

    #[test]
    fn test_file_store_remove_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        {
            let mut store = FileStore::open(&path).unwrap();
            store.set(CART_ID_KEY, "gid://shopify/Cart/abc");
            store.remove(CART_ID_KEY);
        }

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get(CART_ID_KEY), None);
    }
}
