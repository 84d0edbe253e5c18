//! Inventory level types.

use serde::{Deserialize, Serialize};
use shopify_admin_mcp_core::{IdList, PageLimit};

use super::common::{Extra, QueryPairs, Timestamp};

/// Stock of one inventory item at one location.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryLevel {
    /// Inventory item ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_item_id: Option<u64>,
    /// Location ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<u64>,
    /// Available quantity (`null` when the item is not tracked).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<i64>,
    /// Last update timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Extra,
}

/// Response of `GET /inventory_levels.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryLevelsResponse {
    /// Matching inventory levels.
    pub inventory_levels: Vec<InventoryLevel>,
}

/// Filters for inventory level lookups.
///
/// Shopify answers 422 when neither ID list is given; that error is passed
/// through to the caller unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryLevelParams {
    /// Inventory item IDs.
    pub inventory_item_ids: Option<IdList>,
    /// Location IDs.
    pub location_ids: Option<IdList>,
    /// Page size.
    pub limit: PageLimit,
}

impl InventoryLevelParams {
    /// Query string pairs for this lookup.
    #[must_use]
    pub fn query(&self) -> QueryPairs {
        let mut query = Vec::new();
        if let Some(ids) = &self.inventory_item_ids {
            query.push(("inventory_item_ids", ids.to_string()));
        }
        if let Some(ids) = &self.location_ids {
            query.push(("location_ids", ids.to_string()));
        }
        query.push(("limit", self.limit.to_string()));
        query
    }
}
