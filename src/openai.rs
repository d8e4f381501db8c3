//! OpenAI-compatible client configuration.

use crate::error::{Result, TldwError};
use crate::llm::Credential;
use async_openai::{config::OpenAIConfig, Client};
use std::time::Duration;

/// Create a client for an OpenAI-compatible API.
///
/// The timeout bounds the whole request so a stalled provider surfaces as an error.
pub fn create_client(
    api_base: &str,
    credential: &Credential,
    timeout: Duration,
) -> Result<Client<OpenAIConfig>> {
    let http_client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| TldwError::Config(format!("Failed to create HTTP client: {}", e)))?;

    let config = OpenAIConfig::new()
        .with_api_base(api_base.trim_end_matches('/'))
        .with_api_key(credential.expose());

    Ok(Client::with_config(config).with_http_client(http_client))
}
