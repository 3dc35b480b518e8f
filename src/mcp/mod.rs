//! Model Context Protocol (MCP) server implementation
//!
//! This module exposes the todo store as MCP tools an agent can call by name.
//!
//! # Architecture
//!
//! - **server**: `McpServer`, the `ServerHandler` that owns the tool router
//! - **tools**: tool definitions, parameter schemas and result rendering
//! - **service**: transport adapters (stdio, and Streamable HTTP behind the `http` feature)
//!
//! `McpServer` is generic over `D: Database`, so the tool layer never
//! depends on the concrete storage backend.

pub mod server;
mod service;
pub mod tools;


pub use server::McpServer;
#[cfg(feature = "http")]
pub use service::{HttpConfig, create_mcp_service, serve_http};
pub use service::{ServiceError, serve_stdio};
