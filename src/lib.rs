//! Persistent TODO list exposed as MCP tools.
//!
//! - [`db`]: the todo store (trait, SQLite implementation, validation)
//! - [`mcp`]: the MCP server that dispatches tool calls to the store
//! - [`paths`]: default locations for the database file

pub mod db;
pub mod mcp;
pub mod paths;
