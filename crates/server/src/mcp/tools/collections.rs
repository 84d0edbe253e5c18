//! Collection tool inputs.

use rmcp::schemars::{self, JsonSchema};
use serde::Deserialize;

use super::page_limit;
use crate::mcp::error::ValidationError;
use crate::shopify::CollectionListParams;

/// Input for `shopify_list_collections`.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListCollectionsInput {
    /// Collections per page (1-250, default 50).
    #[schemars(range(min = 1, max = 250))]
    pub limit: Option<i64>,
}

impl ListCollectionsInput {
    /// # Errors
    ///
    /// Returns [`ValidationError`] if `limit` is outside 1..=250.
    pub fn validate(self) -> Result<CollectionListParams, ValidationError> {
        Ok(CollectionListParams {
            limit: page_limit(self.limit)?,
        })
    }
}
