//! Order domain types for the Shopify Admin REST API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shopify_admin_mcp_core::{FinancialStatus, FulfillmentStatus, OrderStatus, PageLimit};

use super::common::{Extra, QueryPairs, Timestamp};

// =============================================================================
// Order Types
// =============================================================================

/// An order as returned by `orders.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Order {
    /// Order ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Display name (e.g., "#1001").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Sequential order number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_number: Option<u64>,
    /// Customer email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Payment status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_status: Option<String>,
    /// Shipping status (`null` while unfulfilled).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<String>,
    /// Three-letter currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Sum of line item prices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal_price: Option<Decimal>,
    /// Total tax.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tax: Option<Decimal>,
    /// Grand total.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<Decimal>,
    /// Creation timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    /// Cancellation timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancelled_at: Option<Timestamp>,
    /// Close timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<Timestamp>,
    /// Purchased items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<LineItem>>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Extra,
}

/// A line item in an order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LineItem {
    /// Line item ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Product title at time of purchase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Quantity ordered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    /// Unit price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// SKU.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// Product ID (absent for deleted products).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    /// Variant ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<u64>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Extra,
}

/// Response of `GET /orders.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdersResponse {
    /// One page of orders.
    pub orders: Vec<Order>,
}

/// Response of `GET /orders/{id}.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderResponse {
    /// The order.
    pub order: Order,
}

// =============================================================================
// Request Types
// =============================================================================

/// Parameters for listing orders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderListParams {
    /// Page size.
    pub limit: PageLimit,
    /// Order state (Shopify defaults to `open`).
    pub status: Option<OrderStatus>,
    /// Payment state.
    pub financial_status: Option<FinancialStatus>,
    /// Shipping state.
    pub fulfillment_status: Option<FulfillmentStatus>,
}

impl OrderListParams {
    /// Query string pairs for this listing.
    #[must_use]
    pub fn query(&self) -> QueryPairs {
        let mut query = vec![("limit", self.limit.to_string())];
        if let Some(status) = self.status {
            query.push(("status", status.as_str().to_string()));
        }
        if let Some(status) = self.financial_status {
            query.push(("financial_status", status.as_str().to_string()));
        }
        if let Some(status) = self.fulfillment_status {
            query.push(("fulfillment_status", status.as_str().to_string()));
        }
        query
    }
}
