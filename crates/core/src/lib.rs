//! Shopify Admin MCP Core - validated value types.
//!
//! This crate provides the types that tool inputs are validated into before
//! any request reaches the Shopify Admin API.
//!
//! # Architecture
//!
//! The core crate contains only types and their parsing rules - no I/O, no
//! HTTP clients. A value of one of these types has already passed validation,
//! so the client never has to re-check it.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, page limits, emails, prices and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
