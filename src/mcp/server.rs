//! MCP server implementation
//!
//! `McpServer` holds an explicitly constructed database handle and routes
//! tool calls to it. There is no process-wide store.

use std::sync::Arc;

use rmcp::{
    ServerHandler,
    handler::server::router::tool::ToolRouter,
    model::{ServerCapabilities, ServerInfo},
    tool_handler,
};

use crate::db::Database;

const INSTRUCTIONS: &str = "Todo MCP Server - Manage a persistent TODO list. \
    Use add_todo to create a task, list_todos to see all tasks with their ids, \
    complete_todo to mark a task done, update_todo_text to change its text, \
    and delete_todo to remove it.";

/// MCP server for the todo list.
///
/// Generic over `D: Database` for zero-cost abstraction (no dynamic dispatch).
pub struct McpServer<D: Database> {
    pub(crate) db: Arc<D>,
    tool_router: ToolRouter<Self>,
}

impl<D: Database + 'static> McpServer<D> {
    /// Create a new MCP server backed by the given database.
    ///
    /// The database must already be migrated.
    pub fn new(db: Arc<D>) -> Self {
        Self {
            db,
            tool_router: Self::todo_tool_router(),
        }
    }

    /// Get the tool router for this handler
    pub fn router(&self) -> &ToolRouter<Self> {
        &self.tool_router
    }
}

// Derived Clone would require `D: Clone`; only the handle is shared.
impl<D: Database> Clone for McpServer<D> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
            tool_router: self.tool_router.clone(),
        }
    }
}

#[tool_handler(router = self.tool_router)]
impl<D: Database + 'static> ServerHandler for McpServer<D> {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.capabilities = ServerCapabilities::builder().enable_tools().build();
        info.server_info.name = env!("CARGO_PKG_NAME").to_string();
        info.server_info.version = env!("CARGO_PKG_VERSION").to_string();
        info.instructions = Some(INSTRUCTIONS.to_string());
        info
    }
}
