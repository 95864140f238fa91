//! OpenAI client construction.

use async_openai::{config::OpenAIConfig, Client};
use std::time::Duration;

/// Default timeout for OpenAI API requests.
///
/// Scheduling conversations are short; a hung call should fail fast.
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Create an OpenAI client with a configured timeout.
///
/// Credentials come from the `OPENAI_API_KEY` environment variable; the core
/// schedule never touches the model.
pub fn create_client() -> Client<OpenAIConfig> {
    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
        .build()
        .expect("Failed to create HTTP client");

    Client::with_config(OpenAIConfig::default()).with_http_client(http_client)
}
