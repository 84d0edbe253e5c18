//! Customer tool inputs.

use rmcp::schemars::{self, JsonSchema};
use serde::Deserialize;
use shopify_admin_mcp_core::{CustomerId, Email, SearchQuery};

use super::page_limit;
use crate::mcp::error::ValidationError;
use crate::shopify::{CustomerListParams, NewCustomer};

/// Input for `shopify_list_customers`.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListCustomersInput {
    /// Customers per page (1-250, default 50).
    #[schemars(range(min = 1, max = 250))]
    pub limit: Option<i64>,
    /// Cursor from a previous page's `Link` header.
    pub page_info: Option<String>,
}

impl ListCustomersInput {
    /// # Errors
    ///
    /// Returns [`ValidationError`] if `limit` is outside 1..=250.
    pub fn validate(self) -> Result<CustomerListParams, ValidationError> {
        Ok(CustomerListParams {
            limit: page_limit(self.limit)?,
            page_info: self.page_info,
        })
    }
}

/// Input for `shopify_get_customer`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetCustomerInput {
    /// Customer ID.
    #[serde(rename = "customerId")]
    #[schemars(range(min = 1))]
    pub customer_id: i64,
}

impl GetCustomerInput {
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the ID is not positive.
    pub fn validate(self) -> Result<CustomerId, ValidationError> {
        CustomerId::try_from(self.customer_id).map_err(|e| ValidationError::new("customerId", e))
    }
}

/// Input for `shopify_create_customer`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateCustomerInput {
    /// Email address (must be unique in the shop).
    #[schemars(email)]
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Phone number in E.164 format.
    pub phone: Option<String>,
    /// Comma-separated tags.
    pub tags: Option<String>,
}

impl CreateCustomerInput {
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the email address is malformed.
    pub fn validate(self) -> Result<NewCustomer, ValidationError> {
        Ok(NewCustomer {
            email: Email::parse(&self.email).map_err(|e| ValidationError::new("email", e))?,
            first_name: self.first_name,
            last_name: self.last_name,
            phone: self.phone,
            tags: self.tags,
        })
    }
}

/// Input for `shopify_search_customers`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchCustomersInput {
    /// Shopify customer search query (e.g., `email:bob@example.com`).
    #[schemars(length(min = 1))]
    pub query: String,
}

impl SearchCustomersInput {
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the query is blank.
    pub fn validate(self) -> Result<SearchQuery, ValidationError> {
        SearchQuery::parse(&self.query).map_err(|e| ValidationError::new("query", e))
    }
}
