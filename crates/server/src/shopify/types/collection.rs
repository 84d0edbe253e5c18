//! Custom collection types.

use serde::{Deserialize, Serialize};
use shopify_admin_mcp_core::PageLimit;

use super::common::{Extra, QueryPairs, Timestamp};

/// A manually curated collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Collection {
    /// Collection ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Collection title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// URL handle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    /// Description (HTML).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,
    /// Sort order of products within the collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
    /// Publication timestamp (`null` when hidden).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<Timestamp>,
    /// Last update timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Extra,
}

/// Response of `GET /custom_collections.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionsResponse {
    /// One page of custom collections.
    pub custom_collections: Vec<Collection>,
}

/// Parameters for listing collections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectionListParams {
    /// Page size.
    pub limit: PageLimit,
}

impl CollectionListParams {
    /// Query string pairs for this listing.
    #[must_use]
    pub fn query(&self) -> QueryPairs {
        vec![("limit", self.limit.to_string())]
    }
}
