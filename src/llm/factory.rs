use anyhow::Result;

use super::client::{LlmClient, MockLlmClient};
use super::client_impl::{GroqClient, OpenAIClient};
use super::provider::{Provider, ProviderSelection};
use crate::config::Config;

/// Create the LLM client for the selected provider
pub fn create_client(
    selection: &ProviderSelection,
    config: &Config,
    dry_run: bool,
) -> Result<Box<dyn LlmClient>> {
    if dry_run {
        return Ok(Box::new(MockLlmClient::new()));
    }

    let base_url = config.base_url(selection.provider);
    let timeout_secs = config.provider(selection.provider).timeout_secs;
    let api_key = selection.api_key.clone();

    match selection.provider {
        Provider::Groq => Ok(Box::new(GroqClient::with_base_url(
            api_key,
            base_url,
            timeout_secs,
        )?)),

        Provider::OpenAI => Ok(Box::new(OpenAIClient::with_base_url(
            api_key,
            base_url,
            timeout_secs,
        )?)),
    }
}
