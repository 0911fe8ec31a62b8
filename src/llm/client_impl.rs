use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use super::client::LlmClient;
use super::provider::Provider;
use crate::util::SecretString;

// ============================================================================
// Chat-completions wire format (shared by Groq and OpenAI)
// ============================================================================

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// HTTP plumbing for one chat-completions endpoint.
struct ChatEndpoint {
    api_key: SecretString,
    base_url: String,
    client: Client,
}

impl ChatEndpoint {
    fn new(api_key: SecretString, base_url: String, timeout_secs: Option<u64>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build().context("failed to build HTTP client")?,
        })
    }

    async fn complete(&self, vendor: &str, model: &str, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: model.to_string(),
            messages: vec![ChatMessage {
                role: "system".to_string(),
                content: Some(prompt.to_string()),
            }],
        };

        let url = format!("{}/chat/completions", self.base_url);
        debug!("Calling {} API at {} with model: {}", vendor, url, model);

        let response = self
            .client
            .post(&url)
            .header("content-type", "application/json")
            .header(
                "authorization",
                format!("Bearer {}", self.api_key.expose()),
            )
            .json(&request)
            .send()
            .await
            .with_context(|| format!("Failed to send request to {} API", vendor))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            bail!("{} API error {}: {}", vendor, status, error_text);
        }

        let api_response: ChatResponse = response
            .json()
            .await
            .with_context(|| format!("Failed to parse {} API response", vendor))?;

        api_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .with_context(|| format!("No content in {} response", vendor))
    }
}

// ============================================================================
// Groq Client
// ============================================================================

pub struct GroqClient {
    endpoint: ChatEndpoint,
}

impl GroqClient {
    pub fn with_base_url(
        api_key: SecretString,
        base_url: String,
        timeout_secs: Option<u64>,
    ) -> Result<Self> {
        Ok(Self {
            endpoint: ChatEndpoint::new(api_key, base_url, timeout_secs)?,
        })
    }
}

#[async_trait]
impl LlmClient for GroqClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.endpoint
            .complete("Groq", Provider::Groq.model(), prompt)
            .await
    }

    fn model(&self) -> &str {
        Provider::Groq.model()
    }
}

// ============================================================================
// OpenAI Client
// ============================================================================

pub struct OpenAIClient {
    endpoint: ChatEndpoint,
}

impl OpenAIClient {
    pub fn with_base_url(
        api_key: SecretString,
        base_url: String,
        timeout_secs: Option<u64>,
    ) -> Result<Self> {
        Ok(Self {
            endpoint: ChatEndpoint::new(api_key, base_url, timeout_secs)?,
        })
    }
}

#[async_trait]
impl LlmClient for OpenAIClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.endpoint
            .complete("OpenAI", Provider::OpenAI.model(), prompt)
            .await
    }

    fn model(&self) -> &str {
        Provider::OpenAI.model()
    }
}

// ============================================================================
// Tests
// ============================================================================
