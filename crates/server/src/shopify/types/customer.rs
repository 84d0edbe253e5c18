//! Customer domain types for the Shopify Admin REST API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shopify_admin_mcp_core::{Email, PageLimit};

use super::common::{Extra, QueryPairs, Timestamp};

// =============================================================================
// Customer Types
// =============================================================================

/// A customer as returned by `customers.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Customer {
    /// Customer ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// First name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Phone number (E.164).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Account state (`disabled`, `invited`, `enabled`, `declined`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Number of orders placed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orders_count: Option<u64>,
    /// Lifetime spend.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_spent: Option<Decimal>,
    /// Comma-separated tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    /// Creation timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    /// Last update timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Extra,
}

/// Response of customer listing and search endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomersResponse {
    /// Matching customers.
    pub customers: Vec<Customer>,
}

/// Response of single-customer endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerResponse {
    /// The customer.
    pub customer: Customer,
}

// =============================================================================
// Request Types
// =============================================================================

/// Parameters for listing customers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerListParams {
    /// Page size.
    pub limit: PageLimit,
    /// Opaque cursor from a previous page's `Link` header.
    pub page_info: Option<String>,
}

impl CustomerListParams {
    /// Query string pairs for this listing.
    #[must_use]
    pub fn query(&self) -> QueryPairs {
        let mut query = vec![("limit", self.limit.to_string())];
        if let Some(page_info) = &self.page_info {
            query.push(("page_info", page_info.clone()));
        }
        query
    }
}

/// Body of `POST /customers.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewCustomer {
    /// Email address (unique per shop).
    pub email: Email,
    /// First name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Comma-separated tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}

/// Request wrapper: Shopify expects `{"customer": {...}}`.
#[derive(Debug, Serialize)]
pub(crate) struct CustomerBody<'a> {
    pub customer: &'a NewCustomer,
}
