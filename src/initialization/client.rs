//! HTTP client initialization.

use std::time::Duration;

use crate::config::Config;
use crate::error_handling::InitializationError;
use reqwest::ClientBuilder;

/// Initializes the HTTP client shared by the lookup stages.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the config
/// - Per-request timeout from the config
/// - No idle connections kept, so every lookup opens a fresh connection
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .pool_max_idle_per_host(0)
        .build()?;
    Ok(client)
}
