//! CLI module for Ledig.

pub mod commands;
mod output;
pub mod preflight;

pub use output::Output;

use clap::{Parser, Subcommand};

/// Ledig - Scheduling Assistant for LLM Agents
///
/// A CLI tool that keeps a booking calendar in memory and exposes it to
/// language-model agents. The name "Ledig" comes from the Norwegian word
/// for "free" or "available."
#[derive(Parser, Debug)]
#[command(name = "ledig")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show free and booked slots for a date
    Slots {
        /// The date to query (YYYY-MM-DD); defaults to today
        date: Option<String>,
    },

    /// Book a slot under a reservation name
    Book {
        /// The date to book (YYYY-MM-DD)
        date: String,

        /// Start of the slot (HH:MM)
        start_time: String,

        /// End of the requested window (HH:MM)
        end_time: String,

        /// Who the reservation is for
        reservation_name: String,
    },

    /// Ask a scheduling question in natural language
    Ask {
        /// The question to ask
        question: String,

        /// Focus on a specific date (optional)
        #[arg(short, long)]
        date: Option<String>,

        /// LLM model to use
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Start an interactive scheduling chat session
    Chat {
        /// LLM model to use
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Start HTTP API server for integration with other systems
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },

    /// Start MCP server for AI assistant integration (Claude, etc.)
    Mcp,

    /// Check configuration and API key
    Doctor,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "agent.model")
        key: String,
        /// Configuration value
        value: String,
    },

    /// Open configuration file in editor
    Edit,

    /// Show configuration file path
    Path,
}
