//! The uniform result shape every tool returns.
//!
//! Success carries the pretty-printed JSON response; failure carries
//! `Error: {message}` with `is_error` set.

use std::fmt::Display;

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;

use super::error::ToolError;

/// Wrap a response body in a success envelope.
pub fn success<T: Serialize>(value: &T) -> CallToolResult {
    match serde_json::to_string_pretty(value) {
        Ok(json) => CallToolResult::success(vec![Content::text(json)]),
        Err(e) => failure(&e),
    }
}

/// Wrap an error message in a failure envelope.
pub fn failure(err: &dyn Display) -> CallToolResult {
    CallToolResult::error(vec![Content::text(format!("Error: {err}"))])
}

/// Envelope for the outcome of a tool call.
pub fn respond<T: Serialize>(result: Result<T, ToolError>) -> CallToolResult {
    match result {
        Ok(value) => success(&value),
        Err(e) => {
            tracing::warn!(error = %e, "Tool call failed");
            failure(&e)
        }
    }
}
