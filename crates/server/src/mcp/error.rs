//! Errors raised by tool handlers.

use rmcp::ErrorData as McpError;
use thiserror::Error;

use crate::shopify::ShopifyError;

/// A tool call that passed validation but could not be completed.
///
/// Rendered into the failure envelope, never raised as a protocol error.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Shopify credentials are missing or invalid.
    #[error("{0}")]
    Unavailable(String),

    /// The Shopify request failed.
    #[error(transparent)]
    Shopify(#[from] ShopifyError),
}

/// Tool input that violates its schema.
///
/// Raised as an MCP `invalid_params` error before any HTTP request is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: {reason}")]
pub struct ValidationError {
    /// Input field name as the caller spelled it.
    pub field: &'static str,
    /// Why the value was rejected.
    pub reason: String,
}

impl ValidationError {
    pub(crate) fn new(field: &'static str, reason: impl std::fmt::Display) -> Self {
        Self {
            field,
            reason: reason.to_string(),
        }
    }
}

impl From<ValidationError> for McpError {
    fn from(err: ValidationError) -> Self {
        Self::invalid_params(err.to_string(), None)
    }
}
