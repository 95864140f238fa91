//! Agent system for answering scheduling questions with tool calling.
//!
//! Provides an LLM agent that can query and book against the availability
//! store. The agent owns the conversation loop; the store never talks to the
//! model.

mod client;
mod runner;
mod tools;

pub use client::create_client;
pub use runner::{Agent, AgentResponse, ToolCallRecord};
pub use tools::{parse_tool_call, tool_definitions, ToolCall, ToolContext};
