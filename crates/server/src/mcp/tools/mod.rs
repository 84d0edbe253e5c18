//! Tool input schemas and their validation.
//!
//! Each `*Input` struct is the raw JSON argument object advertised to the
//! agent through its JSON Schema. `validate()` turns it into the typed request
//! parameters the [`AdminClient`](crate::shopify::AdminClient) accepts.

pub mod collections;
pub mod customers;
pub mod inventory;
pub mod orders;
pub mod products;

pub use collections::*;
pub use customers::*;
pub use inventory::*;
pub use orders::*;
pub use products::*;

use shopify_admin_mcp_core::PageLimit;

use super::error::ValidationError;

fn page_limit(raw: Option<i64>) -> Result<PageLimit, ValidationError> {
    PageLimit::from_optional(raw).map_err(|e| ValidationError::new("limit", e))
}
