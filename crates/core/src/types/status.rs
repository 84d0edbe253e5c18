//! Status filters accepted by the Shopify REST API.
//!
//! Each enum serializes to the lowercase wire value Shopify expects in query
//! strings and request bodies, and `as_str()` returns the same value.

use serde::{Deserialize, Serialize};

/// Publication status of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    /// Visible on sales channels.
    Active,
    /// Hidden and no longer sold.
    Archived,
    /// Work in progress, not visible.
    Draft,
}

impl ProductStatus {
    /// Wire value used in query strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Archived => "archived",
            Self::Draft => "draft",
        }
    }
}

/// Order state filter for order listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Open,
    Closed,
    Cancelled,
    Any,
}

impl OrderStatus {
    /// Wire value used in query strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Cancelled => "cancelled",
            Self::Any => "any",
        }
    }
}

/// Payment state filter for order listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum FinancialStatus {
    Authorized,
    Pending,
    Paid,
    PartiallyPaid,
    Refunded,
    Voided,
    PartiallyRefunded,
    Any,
}

impl FinancialStatus {
    /// Wire value used in query strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Authorized => "authorized",
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::PartiallyPaid => "partially_paid",
            Self::Refunded => "refunded",
            Self::Voided => "voided",
            Self::PartiallyRefunded => "partially_refunded",
            Self::Any => "any",
        }
    }
}

/// Shipping state filter for order listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum FulfillmentStatus {
    Shipped,
    Partial,
    Unshipped,
    Any,
}

impl FulfillmentStatus {
    /// Wire value used in query strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Shipped => "shipped",
            Self::Partial => "partial",
            Self::Unshipped => "unshipped",
            Self::Any => "any",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_matches_serde() {
        for status in [
            FinancialStatus::Authorized,
            FinancialStatus::PartiallyPaid,
            FinancialStatus::PartiallyRefunded,
            FinancialStatus::Any,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }

    #[test]
    fn test_product_status_parse() {
        let status: ProductStatus = serde_json::from_str("\"draft\"").unwrap();
        assert_eq!(status, ProductStatus::Draft);
        assert!(serde_json::from_str::<ProductStatus>("\"DRAFT\"").is_err());
    }

    #[test]
    fn test_order_filters_parse() {
        let status: OrderStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(status.as_str(), "cancelled");
        let fulfillment: FulfillmentStatus = serde_json::from_str("\"unshipped\"").unwrap();
        assert_eq!(fulfillment.as_str(), "unshipped");
        assert!(serde_json::from_str::<FulfillmentStatus>("\"fulfilled\"").is_err());
    }
}
