//! Domain types for the Shopify Admin REST API.
//!
//! Response types mirror the REST resources with optional fields. Fields not
//! modelled here are kept in each resource's `extra` map, so a tool result
//! carries everything Shopify returned.

pub mod collection;
pub mod common;
pub mod customer;
pub mod inventory;
pub mod order;
pub mod product;
pub mod shop;

// Re-export all types for convenience
pub use collection::*;
pub use common::*;
pub use customer::*;
pub use inventory::*;
pub use order::*;
pub use product::*;
pub use shop::*;
