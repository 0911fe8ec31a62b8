use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

use crate::config::Config;
use crate::error::GenerateError;
use crate::llm::factory;
use crate::llm::provider::ProviderSelection;
use crate::pipeline::{resolve_input, TestGenerator};

pub const SUCCESS_NOTICE: &str = "✅ O teste automatizado foi gerado com sucesso !";

/// Generate a `.test.js` file for the JavaScript file at `path`.
///
/// The provider is chosen from the environment before anything else so the
/// startup notice is always shown, even when the path argument is missing.
pub async fn run(
    path: Option<String>,
    config_path: Option<String>,
    dry_run: bool,
) -> Result<PathBuf> {
    let selection = ProviderSelection::from_env();
    println!("{}", selection.notice());
    info!(
        "Provider: {} (model {})",
        selection.provider,
        selection.provider.model()
    );

    let path = path.ok_or(GenerateError::Usage)?;
    let source = resolve_input(&path)?;
    info!("Source: {}", source.path.display());

    let config = Config::load_with_path(config_path.as_deref())?;
    if dry_run {
        info!("Dry run: using mock LLM client");
    }
    let client = factory::create_client(&selection, &config, dry_run)?;

    let test_path = TestGenerator::new(client.as_ref())
        .generate(&source)
        .await?;

    println!("{}", SUCCESS_NOTICE);
    Ok(test_path)
}
