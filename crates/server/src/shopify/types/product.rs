//! Product domain types for the Shopify Admin REST API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shopify_admin_mcp_core::{ImageSource, PageLimit, Price, ProductStatus};

use super::common::{Extra, QueryPairs, Timestamp};

// =============================================================================
// Product Types
// =============================================================================

/// A product as returned by `products.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Product {
    /// Product ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Product title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Description (HTML).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,
    /// Vendor/brand name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    /// Product type/category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    /// URL handle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    /// Publication status (`active`, `archived`, `draft`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Comma-separated tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    /// Creation timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    /// Last update timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
    /// Product variants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<ProductVariant>>,
    /// Product images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<ProductImage>>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Extra,
}

/// A product variant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductVariant {
    /// Variant ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Owning product ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    /// Variant title (combination of option values).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Current price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// SKU code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// Inventory quantity across all locations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_quantity: Option<i64>,
    /// Inventory item ID (for inventory level lookups).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_item_id: Option<u64>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Extra,
}

/// A product image.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductImage {
    /// Image ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Owning product ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    /// Image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    /// Alt text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Extra,
}

/// Response of `GET /products.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductsResponse {
    /// One page of products.
    pub products: Vec<Product>,
}

/// Response of single-product endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductResponse {
    /// The product.
    pub product: Product,
}

// =============================================================================
// Request Types
// =============================================================================

/// Parameters for listing products.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductListParams {
    /// Page size.
    pub limit: PageLimit,
    /// Opaque cursor from a previous page's `Link` header.
    pub page_info: Option<String>,
    /// Only products with this status.
    pub status: Option<ProductStatus>,
}

impl ProductListParams {
    /// Query string pairs for this listing.
    #[must_use]
    pub fn query(&self) -> QueryPairs {
        let mut query = vec![("limit", self.limit.to_string())];
        if let Some(page_info) = &self.page_info {
            query.push(("page_info", page_info.clone()));
        }
        if let Some(status) = self.status {
            query.push(("status", status.as_str().to_string()));
        }
        query
    }
}

/// Filters for counting products.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductCountParams {
    /// Only products from this vendor.
    pub vendor: Option<String>,
    /// Only products of this type.
    pub product_type: Option<String>,
}

impl ProductCountParams {
    /// Query string pairs for this count.
    #[must_use]
    pub fn query(&self) -> QueryPairs {
        let mut query = Vec::new();
        if let Some(vendor) = &self.vendor {
            query.push(("vendor", vendor.clone()));
        }
        if let Some(product_type) = &self.product_type {
            query.push(("product_type", product_type.clone()));
        }
        query
    }
}

/// Body of `POST /products.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewProduct {
    /// Product title.
    pub title: String,
    /// Description (HTML).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,
    /// Vendor/brand name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    /// Product type/category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    /// Initial status (Shopify defaults to `active`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,
    /// Comma-separated tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    /// Variants to create with the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<NewVariant>>,
    /// Images to attach.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<NewImage>>,
}

/// A variant created together with a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewVariant {
    /// Variant title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Price in the shop currency.
    pub price: Price,
    /// SKU code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// Starting inventory quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_quantity: Option<i64>,
}

/// An image attached to a new product by URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewImage {
    /// Image URL Shopify downloads from.
    pub src: ImageSource,
    /// Alt text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// Body of `PUT /products/{id}.json`.
///
/// All fields are optional - only provided fields will be updated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProductUpdate {
    /// New product title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New description (HTML).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,
    /// New vendor name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    /// New product type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    /// New status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,
    /// New tags (replaces existing tags).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}

/// Request wrapper: Shopify expects `{"product": {...}}`.
#[derive(Debug, Serialize)]
pub(crate) struct ProductBody<'a, T> {
    pub product: &'a T,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_list_query_always_has_limit() {
        let params = ProductListParams::default();
        assert_eq!(params.query(), vec![("limit", "50".to_string())]);
    }

    #[test]
    fn test_list_query_order() {
        let params = ProductListParams {
            limit: PageLimit::try_from(10).unwrap(),
            page_info: Some("eyJsYXN0X2lkIjo0fQ".to_string()),
            status: Some(ProductStatus::Archived),
        };
        assert_eq!(
            params.query(),
            vec![
                ("limit", "10".to_string()),
                ("page_info", "eyJsYXN0X2lkIjo0fQ".to_string()),
                ("status", "archived".to_string()),
            ]
        );
    }

    #[test]
    fn test_count_query_empty_by_default() {
        assert!(ProductCountParams::default().query().is_empty());
    }

    #[test]
    fn test_new_product_omits_absent_fields() {
        let product = NewProduct {
            title: "Burton Custom Freestyle 151".to_string(),
            body_html: None,
            vendor: Some("Burton".to_string()),
            product_type: None,
            status: Some(ProductStatus::Draft),
            tags: None,
            variants: Some(vec![NewVariant {
                title: None,
                price: Price::parse("10.00").unwrap(),
                sku: Some("BCF-151".to_string()),
                inventory_quantity: None,
            }]),
            images: None,
        };

        let body = serde_json::to_value(ProductBody { product: &product }).unwrap();
        assert_eq!(
            body,
            json!({
                "product": {
                    "title": "Burton Custom Freestyle 151",
                    "vendor": "Burton",
                    "status": "draft",
                    "variants": [{ "price": "10.00", "sku": "BCF-151" }]
                }
            })
        );
    }

    #[test]
    fn test_product_keeps_unmodelled_fields() {
        let raw = json!({
            "id": 632_910_392,
            "title": "IPod Nano - 8GB",
            "created_at": "2024-01-02T09:28:43-05:00",
            "published_scope": "web",
            "variants": [{ "id": 808_950_810, "price": "199.00", "position": 1 }]
        });

        let product: Product = serde_json::from_value(raw).unwrap();
        assert_eq!(product.id, Some(632_910_392));
        assert_eq!(product.extra.get("published_scope"), Some(&json!("web")));

        let variant = product.variants.as_ref().unwrap().first().unwrap();
        assert_eq!(variant.price.unwrap().to_string(), "199.00");
        assert_eq!(variant.extra.get("position"), Some(&json!(1)));

        let back = serde_json::to_value(&product).unwrap();
        assert_eq!(back["published_scope"], json!("web"));
        assert_eq!(back["variants"][0]["price"], json!("199.00"));
        assert!(back.get("body_html").is_none());
    }
}
