//! Error types for Ledig.

use thiserror::Error;

/// Library-level error type for Ledig operations.
///
/// Availability lookups and booking attempts do not surface here: unknown
/// dates, invalid slots, and already-booked slots are ordinary outcomes and
/// are reported through the tagged types in [`crate::schedule`]. This enum
/// covers the conditions that are actually exceptional.
#[derive(Error, Debug)]
pub enum LedigError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Schedule seed error: {0}")]
    Seed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("OpenAI API error: {0}")]
    OpenAI(String),

    #[error("Agent error: {0}")]
    Agent(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for Ledig operations.
pub type Result<T> = std::result::Result<T, LedigError>;
