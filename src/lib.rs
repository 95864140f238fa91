//! Ledig - Scheduling Assistant for LLM Agents
//!
//! A CLI tool that keeps a booking calendar in memory and exposes it to
//! language-model agents as a pair of tools: one to list availability for a
//! date, one to book a slot.
//!
//! The name "Ledig" comes from the Norwegian word for "free" or "available."
//!
//! # Overview
//!
//! Ledig allows you to:
//! - Query which hourly slots are free or booked on a given date
//! - Book a free slot under a reservation name
//! - Ask natural-language scheduling questions through an OpenAI agent
//! - Serve the same two tools over MCP (stdio) or a small HTTP API
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `schedule` - The availability store: the booking calendar and its two operations
//! - `agent` - OpenAI tool-calling agent over the store
//! - `mcp` - MCP server exposing the store to AI assistants
//! - `cli` - Command-line interface
//! - `config` - Configuration management
//!
//! # Example
//!
//! ```rust
//! use ledig::schedule::Schedule;
//!
//! let mut schedule = Schedule::demo();
//! let report = schedule.book_slot("2025-11-10", "08:00", "09:00", "Alice");
//! assert!(report.is_success());
//! ```

pub mod agent;
pub mod cli;
pub mod config;
pub mod error;
pub mod mcp;
pub mod schedule;

pub use error::{LedigError, Result};
