//! Shop settings.

use serde::{Deserialize, Serialize};

use super::common::{Extra, Timestamp};

/// Store-wide settings returned by `shop.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Shop {
    /// Shop ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Store name shown to customers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Contact email of the store owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// The `*.myshopify.com` domain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub myshopify_domain: Option<String>,
    /// Primary custom domain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Three-letter currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// IANA timezone name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iana_timezone: Option<String>,
    /// Shopify plan, e.g. `basic` or `shopify_plus`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_name: Option<String>,
    /// When the store was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Extra,
}

/// Response of `GET /shop.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopResponse {
    /// The shop resource.
    pub shop: Shop,
}
