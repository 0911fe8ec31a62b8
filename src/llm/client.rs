use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send the prompt as a single system message and return the raw completion text.
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// Model name requested from the provider
    fn model(&self) -> &str;
}

/// Offline client for `--dry-run` and tests.
pub struct MockLlmClient {
    response: String,
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self {
            response: r#"```javascript
const { describe, it, expect } = require('@jest/globals');

describe('mock', () => {
  it('runs', () => {
    expect(true).toBe(true);
  });
});
```"#
                .to_string(),
        }
    }

    /// Answer every prompt with `response` verbatim
    pub fn with_response(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, _prompt: &str) -> Result<String> {
        Ok(self.response.clone())
    }

    fn model(&self) -> &str {
        "mock"
    }
}
