//! Product tool inputs.

use rmcp::schemars::{self, JsonSchema};
use serde::Deserialize;
use shopify_admin_mcp_core::{ImageSource, Price, ProductId, ProductStatus};

use super::page_limit;
use crate::mcp::error::ValidationError;
use crate::shopify::{
    NewImage, NewProduct, NewVariant, ProductCountParams, ProductListParams, ProductUpdate,
};

/// Input for `shopify_list_products`.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListProductsInput {
    /// Products per page (1-250, default 50).
    #[schemars(range(min = 1, max = 250))]
    pub limit: Option<i64>,
    /// Cursor from a previous page's `Link` header.
    pub page_info: Option<String>,
    /// Only products with this status.
    pub status: Option<ProductStatus>,
}

impl ListProductsInput {
    /// Check the page size.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if `limit` is outside 1..=250.
    pub fn validate(self) -> Result<ProductListParams, ValidationError> {
        Ok(ProductListParams {
            limit: page_limit(self.limit)?,
            page_info: self.page_info,
            status: self.status,
        })
    }
}

/// Input for `shopify_get_product`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetProductInput {
    /// Product ID.
    #[serde(rename = "productId")]
    #[schemars(range(min = 1))]
    pub product_id: i64,
}

impl GetProductInput {
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the ID is not positive.
    pub fn validate(self) -> Result<ProductId, ValidationError> {
        product_id(self.product_id)
    }
}

/// A variant in `shopify_create_product`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct VariantInput {
    /// Variant title (e.g., "Small / Red").
    pub title: Option<String>,
    /// Price as a decimal string (e.g., "19.99").
    pub price: String,
    /// SKU code.
    pub sku: Option<String>,
    /// Starting inventory quantity.
    pub inventory_quantity: Option<i64>,
}

/// An image in `shopify_create_product`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ImageInput {
    /// Public URL Shopify downloads the image from.
    #[schemars(url)]
    pub src: String,
    /// Alt text.
    pub alt: Option<String>,
}

/// Input for `shopify_create_product`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateProductInput {
    /// Product title.
    pub title: String,
    /// Description (HTML).
    pub body_html: Option<String>,
    /// Vendor/brand name.
    pub vendor: Option<String>,
    /// Product type/category.
    pub product_type: Option<String>,
    /// Initial status.
    pub status: Option<ProductStatus>,
    /// Comma-separated tags.
    pub tags: Option<String>,
    /// Variants to create with the product.
    pub variants: Option<Vec<VariantInput>>,
    /// Images to attach by URL.
    pub images: Option<Vec<ImageInput>>,
}

impl CreateProductInput {
    /// Check variant prices and image URLs.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] naming the first bad variant price or
    /// image URL.
    pub fn validate(self) -> Result<NewProduct, ValidationError> {
        let variants = self
            .variants
            .map(|variants| {
                variants
                    .into_iter()
                    .map(|v| -> Result<NewVariant, ValidationError> {
                        Ok(NewVariant {
                            price: Price::parse(&v.price)
                                .map_err(|e| ValidationError::new("variants.price", e))?,
                            title: v.title,
                            sku: v.sku,
                            inventory_quantity: v.inventory_quantity,
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;

        let images = self
            .images
            .map(|images| {
                images
                    .into_iter()
                    .map(|i| -> Result<NewImage, ValidationError> {
                        Ok(NewImage {
                            src: ImageSource::parse(&i.src)
                                .map_err(|e| ValidationError::new("images.src", e))?,
                            alt: i.alt,
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;

        Ok(NewProduct {
            title: self.title,
            body_html: self.body_html,
            vendor: self.vendor,
            product_type: self.product_type,
            status: self.status,
            tags: self.tags,
            variants,
            images,
        })
    }
}

/// Input for `shopify_update_product`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateProductInput {
    /// Product ID.
    #[serde(rename = "productId")]
    #[schemars(range(min = 1))]
    pub product_id: i64,
    /// New title.
    pub title: Option<String>,
    /// New description (HTML).
    pub body_html: Option<String>,
    /// New vendor name.
    pub vendor: Option<String>,
    /// New product type.
    pub product_type: Option<String>,
    /// New status.
    pub status: Option<ProductStatus>,
    /// New tags (replaces existing tags).
    pub tags: Option<String>,
}

impl UpdateProductInput {
    /// Split into the target ID and the fields to change.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the ID is not positive.
    pub fn validate(self) -> Result<(ProductId, ProductUpdate), ValidationError> {
        let id = product_id(self.product_id)?;
        Ok((
            id,
            ProductUpdate {
                title: self.title,
                body_html: self.body_html,
                vendor: self.vendor,
                product_type: self.product_type,
                status: self.status,
                tags: self.tags,
            },
        ))
    }
}

/// Input for `shopify_count_products`.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct CountProductsInput {
    /// Only products from this vendor.
    pub vendor: Option<String>,
    /// Only products of this type.
    pub product_type: Option<String>,
}

impl CountProductsInput {
    #[must_use]
    pub fn into_params(self) -> ProductCountParams {
        ProductCountParams {
            vendor: self.vendor,
            product_type: self.product_type,
        }
    }
}

fn product_id(raw: i64) -> Result<ProductId, ValidationError> {
    ProductId::try_from(raw).map_err(|e| ValidationError::new("productId", e))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_list_defaults() {
        let params = ListProductsInput::default().validate().unwrap();
        assert_eq!(params.limit.get(), 50);
        assert!(params.status.is_none());
    }

    #[test]
    fn test_list_rejects_out_of_range_limit() {
        for limit in [0, -5, 251] {
            let input = ListProductsInput {
                limit: Some(limit),
                ..ListProductsInput::default()
            };
            assert_eq!(input.validate().unwrap_err().field, "limit");
        }
    }

    #[test]
    fn test_unknown_status_fails_to_deserialize() {
        let result = serde_json::from_value::<ListProductsInput>(json!({ "status": "deleted" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_get_product_uses_camel_case_id() {
        let input: GetProductInput = serde_json::from_value(json!({ "productId": 632_910_392 })).unwrap();
        assert_eq!(input.validate().unwrap().get(), 632_910_392);

        let input: GetProductInput = serde_json::from_value(json!({ "productId": 0 })).unwrap();
        assert_eq!(input.validate().unwrap_err().field, "productId");

        assert!(serde_json::from_value::<GetProductInput>(json!({ "product_id": 1 })).is_err());
    }

    #[test]
    fn test_create_product_validates_nested_values() {
        let input: CreateProductInput = serde_json::from_value(json!({
            "title": "Tee",
            "variants": [{ "price": "12.50", "sku": "TEE-S" }],
            "images": [{ "src": "https://cdn.example.com/tee.png" }]
        }))
        .unwrap();
        let product = input.validate().unwrap();
        assert_eq!(product.variants.unwrap()[0].price.to_string(), "12.50");
        assert_eq!(
            product.images.unwrap()[0].src.as_str(),
            "https://cdn.example.com/tee.png"
        );

        let bad_price: CreateProductInput = serde_json::from_value(json!({
            "title": "Tee",
            "variants": [{ "price": "twelve" }]
        }))
        .unwrap();
        assert_eq!(bad_price.validate().unwrap_err().field, "variants.price");

        let bad_src: CreateProductInput = serde_json::from_value(json!({
            "title": "Tee",
            "images": [{ "src": "not a url" }]
        }))
        .unwrap();
        assert_eq!(bad_src.validate().unwrap_err().field, "images.src");
    }

    #[test]
    fn test_create_product_requires_title() {
        assert!(serde_json::from_value::<CreateProductInput>(json!({ "vendor": "Acme" })).is_err());
    }

    #[test]
    fn test_update_product_keeps_only_given_fields() {
        let input: UpdateProductInput = serde_json::from_value(json!({
            "productId": 42,
            "status": "archived"
        }))
        .unwrap();
        let (id, update) = input.validate().unwrap();
        assert_eq!(id.get(), 42);
        assert_eq!(
            update,
            ProductUpdate {
                status: Some(ProductStatus::Archived),
                ..ProductUpdate::default()
            }
        );
    }
}
