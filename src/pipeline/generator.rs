use std::path::PathBuf;

use tracing::{debug, error, info};

use super::extractor::extract_code;
use super::input::SourceFile;
use super::writer::{test_path_for, write_test_file};
use crate::error::GenerateError;
use crate::llm::client::LlmClient;
use crate::llm::prompts::build_prompt;

pub struct TestGenerator<'a> {
    client: &'a dyn LlmClient,
}

impl<'a> TestGenerator<'a> {
    pub fn new(client: &'a dyn LlmClient) -> Self {
        Self { client }
    }

    /// Ask the model once. Any failure, or a blank answer, yields `None`.
    pub async fn request_completion(&self, prompt: &str) -> Option<String> {
        debug!(
            "Requesting completion from {} ({} prompt bytes)",
            self.client.model(),
            prompt.len()
        );

        match self.client.complete(prompt).await {
            Ok(content) => {
                let content = content.trim();
                if content.is_empty() {
                    error!("Erro ao gerar testes: resposta vazia do modelo");
                    None
                } else {
                    Some(content.to_string())
                }
            }
            Err(e) => {
                error!("Erro ao gerar testes: {:?}", e);
                None
            }
        }
    }

    /// Generate the test file for `source` and return where it was written.
    pub async fn generate(&self, source: &SourceFile) -> Result<PathBuf, GenerateError> {
        info!("Generating tests for {}", source.path.display());

        let prompt = build_prompt(&source.content, &source.original);
        let completion = self
            .request_completion(&prompt)
            .await
            .ok_or(GenerateError::Completion)?;

        let code = extract_code(&completion);
        let test_path = test_path_for(&source.path);
        write_test_file(&test_path, code)?;

        info!("Wrote {} bytes to {}", code.len(), test_path.display());
        Ok(test_path)
    }
}
