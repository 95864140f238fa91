//! MCP (Model Context Protocol) server for Ledig.
//!
//! Lets AI assistants like Claude query and book the calendar as tools.
//! Implements JSON-RPC 2.0 over stdio.

mod protocol;
mod server;
mod tools;

pub use server::McpServer;
