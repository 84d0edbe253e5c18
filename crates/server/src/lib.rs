//! Shopify Admin MCP server library.
//!
//! Exposes a subset of the Shopify Admin REST API as schema-validated MCP
//! tools. Split into:
//!
//! - [`config`]: environment-driven settings
//! - [`shopify`]: the REST client and resource types
//! - [`mcp`]: tool inputs, validation and the server handler
//!
//! # Security
//!
//! The Admin API access token has write access to the store. It is held in a
//! [`secrecy::SecretString`] and redacted from `Debug` output and logs.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod mcp;
pub mod shopify;
