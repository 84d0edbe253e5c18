//! Inventory tool inputs.

use rmcp::schemars::{self, JsonSchema};
use serde::Deserialize;
use shopify_admin_mcp_core::IdList;

use super::page_limit;
use crate::mcp::error::ValidationError;
use crate::shopify::InventoryLevelParams;

/// Input for `shopify_get_inventory_levels`.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GetInventoryLevelsInput {
    /// Comma-separated inventory item IDs.
    pub inventory_item_ids: Option<String>,
    /// Comma-separated location IDs.
    pub location_ids: Option<String>,
    /// Levels per page (1-250, default 50).
    #[schemars(range(min = 1, max = 250))]
    pub limit: Option<i64>,
}

impl GetInventoryLevelsInput {
    /// # Errors
    ///
    /// Returns [`ValidationError`] if an ID list has a non-numeric item or
    /// `limit` is outside 1..=250.
    pub fn validate(self) -> Result<InventoryLevelParams, ValidationError> {
        let ids = |field: &'static str, raw: Option<String>| {
            raw.map(|s| IdList::parse(&s).map_err(|e| ValidationError::new(field, e)))
                .transpose()
        };

        Ok(InventoryLevelParams {
            inventory_item_ids: ids("inventory_item_ids", self.inventory_item_ids)?,
            location_ids: ids("location_ids", self.location_ids)?,
            limit: page_limit(self.limit)?,
        })
    }
}
