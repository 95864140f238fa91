//! Pre-flight checks before operations that need external services.
//!
//! Validates configuration before starting operations that would otherwise
//! fail midway through a conversation.

use crate::error::{LedigError, Result};

/// Requirements for different operations.
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    /// Agent conversations require an API key.
    Ask,
    /// Direct calendar queries and bookings run locally.
    Query,
}

/// Run pre-flight checks for the given operation.
///
/// Returns Ok(()) if all checks pass, or an error describing what's missing.
pub fn check(operation: Operation) -> Result<()> {
    match operation {
        Operation::Ask => {
            check_api_key()?;
        }
        Operation::Query => {
            // The calendar lives in-process; nothing external needed
        }
    }
    Ok(())
}

/// Check if OpenAI API key is configured.
fn check_api_key() -> Result<()> {
    match std::env::var("OPENAI_API_KEY") {
        Ok(key) if !key.is_empty() => Ok(()),
        Ok(_) => Err(LedigError::Config(
            "OPENAI_API_KEY is empty. Set it with: export OPENAI_API_KEY='sk-...'".to_string(),
        )),
        Err(_) => Err(LedigError::Config(
            "OPENAI_API_KEY not set. Set it with: export OPENAI_API_KEY='sk-...'".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_query_no_requirements() {
        // Local calendar operations should always pass pre-flight
        assert!(check(Operation::Query).is_ok());
    }
}
