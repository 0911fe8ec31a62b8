use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::llm::provider::Provider;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub groq: ProviderConfig,
    #[serde(default)]
    pub openai: ProviderConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderConfig {
    /// Override the chat-completions base URL (e.g. a proxy or gateway)
    #[serde(default)]
    pub base_url: Option<String>,

    /// Request timeout in seconds. No timeout when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Load configuration from a specific path, or use default search paths
    pub fn load_with_path(path: Option<&str>) -> Result<Self> {
        if let Some(config_path) = path {
            debug!("Loading config from explicit path: {}", config_path);
            return Self::load_from_path(config_path)
                .with_context(|| format!("Failed to load config file: {}", config_path));
        }

        if let Ok(config) = Self::load_from_path("iatest.toml") {
            debug!("Loaded config from ./iatest.toml");
            return Ok(config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("iatest").join("config.toml");
            if let Ok(config) = Self::load_from_path(&config_path) {
                debug!("Loaded config from {:?}", config_path);
                return Ok(config);
            }
        }

        debug!("Using default config");
        Ok(Self::default())
    }

    fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn provider(&self, provider: Provider) -> &ProviderConfig {
        match provider {
            Provider::Groq => &self.groq,
            Provider::OpenAI => &self.openai,
        }
    }

    /// Base URL for a provider, falling back to its public endpoint
    pub fn base_url(&self, provider: Provider) -> String {
        self.provider(provider)
            .base_url
            .clone()
            .unwrap_or_else(|| provider.default_base_url().to_string())
    }
}
