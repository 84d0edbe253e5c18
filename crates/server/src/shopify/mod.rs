//! Shopify Admin REST API client.
//!
//! # Security
//!
//! The access token grants write access to products and customers of the
//! configured store. It is sent only in the `X-Shopify-Access-Token` header
//! and never logged.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_admin_mcp::shopify::{AdminClient, ProductListParams};
//!
//! let client = AdminClient::new(&config)?;
//! let page = client.list_products(&ProductListParams::default()).await?;
//! let shop = client.get_shop().await?;
//! ```

mod client;
#[cfg(test)]
pub(crate) mod mock;
pub mod types;

pub use client::AdminClient;
pub use types::*;

use reqwest::header::InvalidHeaderValue;
use thiserror::Error;

/// Errors that can occur when calling the Shopify Admin REST API.
#[derive(Debug, Error)]
pub enum ShopifyError {
    /// HTTP request failed before a response arrived.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Shopify answered with a non-2xx status.
    #[error("Shopify API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body text, verbatim.
        body: String,
    },

    /// A 2xx response body did not match the expected shape.
    #[error("JSON parse error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The endpoint URL could not be built.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The access token cannot be sent as a header value.
    #[error("Invalid access token: {0}")]
    InvalidToken(#[from] InvalidHeaderValue),
}

impl ShopifyError {
    /// HTTP status of an API error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ShopifyError::Api {
            status: 404,
            body: r#"{"errors":"Not Found"}"#.to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#"Shopify API error (404): {"errors":"Not Found"}"#
        );
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_decode_error_has_no_status() {
        let err: ShopifyError = serde_json::from_str::<u8>("\"x\"")
            .map_err(ShopifyError::from)
            .unwrap_err();
        assert!(err.to_string().starts_with("JSON parse error"));
        assert_eq!(err.status(), None);
    }
}
