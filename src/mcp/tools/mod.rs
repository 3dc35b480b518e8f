//! MCP tool implementations
//!
//! Tools render their outcome as lines of text. Malformed input becomes an
//! MCP `invalid_params` error, storage failures an `internal_error`, and a
//! missing id is just another line of output.

pub mod todos;

#[cfg(test)]
mod todos_test;

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use serde_json::json;
use tracing::{error, warn};

use crate::db::DbError;

/// Map a database error onto the MCP error it should surface as.
pub(crate) fn map_db_error(e: DbError) -> McpError {
    if e.is_validation() {
        warn!("Rejected tool input: {}", e);
        McpError::invalid_params("validation_error", Some(json!({"error": e.to_string()})))
    } else {
        error!("Todo storage failure: {}", e);
        McpError::internal_error("database_error", Some(json!({"error": e.to_string()})))
    }
}

/// Wrap rendered lines as a successful tool result, one text item per line.
pub(crate) fn text_result(lines: Vec<String>) -> CallToolResult {
    CallToolResult::success(lines.into_iter().map(Content::text).collect())
}
