//! Order tool inputs.

use rmcp::schemars::{self, JsonSchema};
use serde::Deserialize;
use shopify_admin_mcp_core::{FinancialStatus, FulfillmentStatus, OrderId, OrderStatus};

use super::page_limit;
use crate::mcp::error::ValidationError;
use crate::shopify::OrderListParams;

/// Input for `shopify_list_orders`.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListOrdersInput {
    /// Orders per page (1-250, default 50).
    #[schemars(range(min = 1, max = 250))]
    pub limit: Option<i64>,
    /// Order state (Shopify defaults to open orders).
    pub status: Option<OrderStatus>,
    /// Payment state.
    pub financial_status: Option<FinancialStatus>,
    /// Shipping state.
    pub fulfillment_status: Option<FulfillmentStatus>,
}

impl ListOrdersInput {
    /// # Errors
    ///
    /// Returns [`ValidationError`] if `limit` is outside 1..=250.
    pub fn validate(self) -> Result<OrderListParams, ValidationError> {
        Ok(OrderListParams {
            limit: page_limit(self.limit)?,
            status: self.status,
            financial_status: self.financial_status,
            fulfillment_status: self.fulfillment_status,
        })
    }
}

/// Input for `shopify_get_order`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetOrderInput {
    /// Order ID.
    #[serde(rename = "orderId")]
    #[schemars(range(min = 1))]
    pub order_id: i64,
}

impl GetOrderInput {
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the ID is not positive.
    pub fn validate(self) -> Result<OrderId, ValidationError> {
        OrderId::try_from(self.order_id).map_err(|e| ValidationError::new("orderId", e))
    }
}
