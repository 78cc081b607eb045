//! Typed product listings from the Storefront API.
//!
//! The client itself is schema-less; this module interprets the shape of the
//! product-listing query used by storefront grids: id, title, description,
//! one representative image, and the primary variant with its price.
//!
//! Listings are read-only and re-fetched on every call. There is no caching,
//! so two loads may observe different results; no consistency guarantee is
//! made or needed for display data.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_storefront::{products, StorefrontClient, StorefrontConfig};
//!
//! let client = StorefrontClient::new(&StorefrontConfig::from_env()?);
//! for listing in products::list(&client, 8).await? {
//!     println!("{} - {} {}", listing.title, listing.variant.price.amount,
//!         listing.variant.price.currency_code);
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::client::{ClientError, StorefrontClient};

/// Fetches the first N product listings for display.
const PRODUCTS_QUERY: &str = r"
query Products($first: Int!) {
  products(first: $first) {
    edges {
      node {
        id
        title
        description
        images(first: 1) {
          edges {
            node {
              src
              altText
            }
          }
        }
        variants(first: 1) {
          edges {
            node {
              id
              title
              price {
                amount
                currencyCode
              }
            }
          }
        }
      }
    }
  }
}
";

/// A monetary amount as the platform serializes it.
///
/// The amount is a decimal string (e.g. `"39.95"`); no arithmetic is done
/// client-side, so it is carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    /// Decimal amount string.
    pub amount: String,
    /// ISO currency code (e.g. `"USD"`).
    pub currency_code: String,
}

/// A product's representative image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    /// Image source URL.
    pub src: String,
    /// Alternative text, when the merchant provided one.
    #[serde(default)]
    pub alt_text: Option<String>,
}

/// The primary purchasable variant of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    /// Opaque variant id, used as the merchandise id in cart mutations.
    pub id: String,
    /// Variant title (e.g. a size or color).
    pub title: String,
    /// The variant's price.
    pub price: Money,
}

/// A read-only product listing for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductListing {
    /// Opaque product id.
    pub id: String,
    /// Product title.
    pub title: String,
    /// Plain-text product description.
    pub description: String,
    /// Zero-or-one representative image.
    pub image: Option<ProductImage>,
    /// The primary variant carrying the displayed price.
    pub variant: ProductVariant,
}

// Connection shapes of the listing query. Flattened before they reach the
// public API.

#[derive(Debug, Default, Deserialize)]
struct ProductsData {
    #[serde(default)]
    products: Connection<ProductNode>,
}

#[derive(Debug, Deserialize)]
struct Connection<T> {
    #[serde(default = "Vec::new")]
    edges: Vec<Edge<T>>,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self { edges: Vec::new() }
    }
}

#[derive(Debug, Deserialize)]
struct Edge<T> {
    node: T,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductNode {
    id: String,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    images: Connection<ProductImage>,
    #[serde(default)]
    variants: Connection<ProductVariant>,
}

impl ProductNode {
    /// Flattens the connection shape into a listing. A node without a
    /// primary variant has nothing purchasable to display and yields `None`.
    fn into_listing(self) -> Option<ProductListing> {
        let variant = self.variants.edges.into_iter().next()?.node;
        Some(ProductListing {
            id: self.id,
            title: self.title,
            description: self.description,
            image: self.images.edges.into_iter().next().map(|e| e.node),
            variant,
        })
    }
}

/// Fetches the first `first` product listings.
///
/// Issues a fresh request on every call. Products without a primary variant
/// are skipped with a logged warning rather than failing the page.
///
/// # Errors
///
/// Returns [`ClientError`] when the request fails at the transport or
/// envelope level, or when the response does not match the listing shape.
pub async fn list(
    client: &StorefrontClient,
    first: u32,
) -> Result<Vec<ProductListing>, ClientError> {
    let data = client
        .execute(PRODUCTS_QUERY, Some(json!({ "first": first })))
        .await?;
    let parsed: ProductsData = if data.is_null() {
        ProductsData::default()
    } else {
        serde_json::from_value(data)?
    };

    let listings = parsed
        .products
        .edges
        .into_iter()
        .filter_map(|edge| {
            let id = edge.node.id.clone();
            let listing = edge.node.into_listing();
            if listing.is_none() {
                tracing::warn!(product_id = %id, "Skipping product with no variants");
            }
            listing
        })
        .collect();

    Ok(listings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_node(id: &str, with_variant: bool) -> serde_json::Value {
        let variants = if with_variant {
            json!({ "edges": [{ "node": {
                "id": format!("{id}/variant"),
                "title": "Default Title",
                "price": { "amount": "39.95", "currencyCode": "USD" }
            }}]})
        } else {
            json!({ "edges": [] })
        };
        json!({
            "id": id,
            "title": "Sample Product",
            "description": "A sample",
            "images": { "edges": [{ "node": { "src": "https://cdn/img.png", "altText": "Sample" } }] },
            "variants": variants,
        })
    }

    #[test]
    fn test_product_node_flattens_connections() {
        let node: ProductNode =
            serde_json::from_value(sample_node("gid://shopify/Product/1", true)).unwrap();
        let listing = node.into_listing().unwrap();

        assert_eq!(listing.id, "gid://shopify/Product/1");
        assert_eq!(listing.title, "Sample Product");
        assert_eq!(listing.image.as_ref().unwrap().src, "https://cdn/img.png");
        assert_eq!(
            listing.image.as_ref().unwrap().alt_text.as_deref(),
            Some("Sample")
        );
        assert_eq!(listing.variant.id, "gid://shopify/Product/1/variant");
        assert_eq!(listing.variant.price.amount, "39.95");
        assert_eq!(listing.variant.price.currency_code, "USD");
    }

    #[test]
    fn test_product_node_without_variant_yields_none() {
        let node: ProductNode =
            serde_json::from_value(sample_node("gid://shopify/Product/2", false)).unwrap();
        assert!(node.into_listing().is_none());
    }

    #[test]
    fn test_product_node_tolerates_missing_image() {
        let mut raw = sample_node("gid://shopify/Product/3", true);
        raw["images"] = json!({ "edges": [] });

        let node: ProductNode = serde_json::from_value(raw).unwrap();
        let listing = node.into_listing().unwrap();
        assert!(listing.image.is_none());
    }

    #[test]
    fn test_products_data_parses_full_page() {
        let data = json!({
            "products": {
                "edges": [
                    { "node": sample_node("gid://shopify/Product/1", true) },
                    { "node": sample_node("gid://shopify/Product/2", false) },
                ]
            }
        });

        let parsed: ProductsData = serde_json::from_value(data).unwrap();
        assert_eq!(parsed.products.edges.len(), 2);
    }

    #[test]
    fn test_money_round_trips() {
        let money = Money {
            amount: "10.00".to_string(),
            currency_code: "EUR".to_string(),
        };
        let json = serde_json::to_value(&money).unwrap();
        assert_eq!(json["currencyCode"], "EUR");
        let restored: Money = serde_json::from_value(json).unwrap();
        assert_eq!(restored, money);
    }

    #[test]
    fn test_products_query_requests_display_fields() {
        assert!(PRODUCTS_QUERY.contains("products(first: $first)"));
        assert!(PRODUCTS_QUERY.contains("images(first: 1)"));
        assert!(PRODUCTS_QUERY.contains("variants(first: 1)"));
        assert!(PRODUCTS_QUERY.contains("currencyCode"));
    }
}
