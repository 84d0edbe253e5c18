//! Core types for the Shopify Admin MCP bridge.
//!
//! This module provides type-safe wrappers for the values tool callers supply.

pub mod email;
pub mod id;
pub mod image;
pub mod pagination;
pub mod price;
pub mod query;
pub mod status;

pub use email::{Email, EmailError};
pub use id::*;
pub use image::{ImageSource, ImageSourceError};
pub use pagination::{LimitError, PageLimit};
pub use price::{Price, PriceError};
pub use query::{IdList, IdListError, QueryError, SearchQuery};
pub use status::*;
