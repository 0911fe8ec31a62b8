use std::env;
use std::fmt;

use crate::util::SecretString;

/// Environment variable holding the Groq API key. Takes priority when set.
pub const GROQ_API_KEY_ENV: &str = "GROQ_API_KEY";
/// Environment variable holding the OpenAI API key.
pub const OPENAI_API_KEY_ENV: &str = "OPEN_AI_KEY";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Groq,
    OpenAI,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Groq => "groq",
            Provider::OpenAI => "openai",
        }
    }

    /// The fixed model requested from this provider
    pub fn model(&self) -> &'static str {
        match self {
            Provider::Groq => "llama3-70b-8192",
            Provider::OpenAI => "gpt-4o",
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            Provider::Groq => "https://api.groq.com/openai/v1",
            Provider::OpenAI => "https://api.openai.com/v1",
        }
    }

    pub fn api_key_env(&self) -> &'static str {
        match self {
            Provider::Groq => GROQ_API_KEY_ENV,
            Provider::OpenAI => OPENAI_API_KEY_ENV,
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The provider chosen for this run together with its credential.
#[derive(Debug, Clone)]
pub struct ProviderSelection {
    pub provider: Provider,
    pub api_key: SecretString,
}

impl ProviderSelection {
    /// Pick a provider from the process environment.
    pub fn from_env() -> Self {
        Self::select(|name| env::var(name).ok())
    }

    /// Groq wins whenever its key is non-empty. Otherwise OpenAI is used with
    /// whatever its key holds, even nothing; a missing key only shows up as an
    /// authentication failure on the request.
    pub fn select<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(Provider::Groq.api_key_env()).filter(|key| !key.is_empty()) {
            Some(key) => Self {
                provider: Provider::Groq,
                api_key: key.into(),
            },
            None => Self {
                provider: Provider::OpenAI,
                api_key: lookup(Provider::OpenAI.api_key_env())
                    .unwrap_or_default()
                    .into(),
            },
        }
    }

    /// Startup notice naming the selected provider
    pub fn notice(&self) -> String {
        format!("Iniciando a geração dos testes usando {}", self.provider)
    }
}
