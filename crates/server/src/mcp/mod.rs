//! MCP tool registry.
//!
//! Control flow for every tool: arguments are deserialized and validated
//! (failures become `invalid_params` protocol errors), the matching
//! [`AdminClient`](crate::shopify::AdminClient) method performs one request,
//! and the outcome is wrapped in the [`envelope`].

pub mod envelope;
pub mod error;
mod server;
pub mod tools;

pub use error::{ToolError, ValidationError};
pub use server::ShopifyToolServer;
