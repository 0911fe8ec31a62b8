// Pipeline integration tests against a mock chat-completions server
// Coverage: provider selection → client factory → prompt → extraction → write

use iatest::config::Config;
use iatest::error::GenerateError;
use iatest::llm::factory;
use iatest::llm::provider::{Provider, ProviderSelection, GROQ_API_KEY_ENV, OPENAI_API_KEY_ENV};
use iatest::pipeline::{resolve_input, TestGenerator};
use std::fs;
use tempfile::TempDir;

fn completion_body(content: &str) -> String {
    serde_json::json!({
        "choices": [{"index": 0, "message": {"role": "assistant", "content": content}}]
    })
    .to_string()
}

fn openai_selection() -> ProviderSelection {
    ProviderSelection::select(|name| (name == OPENAI_API_KEY_ENV).then(|| "sk-test".to_string()))
}

fn config_for(provider: Provider, base_url: String) -> Config {
    let mut config = Config::default();
    match provider {
        Provider::Groq => config.groq.base_url = Some(base_url),
        Provider::OpenAI => config.openai.base_url = Some(base_url),
    }
    config
}

#[tokio::test]
async fn test_end_to_end_math_js() {
    let dir = TempDir::new().unwrap();
    let source_path = dir.path().join("math.js");
    fs::write(&source_path, "module.exports.soma = (a, b) => a + b;\n").unwrap();

    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_body(mockito::Matcher::Regex("soma = \\(a, b\\)".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("```javascript\nconst x=1;\n```"))
        .create_async()
        .await;

    let selection = openai_selection();
    let config = config_for(Provider::OpenAI, server.url());
    let client = factory::create_client(&selection, &config, false).unwrap();
    let source = resolve_input(source_path.to_str().unwrap()).unwrap();

    let out = TestGenerator::new(client.as_ref())
        .generate(&source)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(out, dir.path().join("math.test.js"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "const x=1;");
}

#[tokio::test]
async fn test_groq_end_to_end_uses_groq_model() {
    let dir = TempDir::new().unwrap();
    let source_path = dir.path().join("calc.js");
    fs::write(&source_path, "exports.sub = (a, b) => a - b;").unwrap();

    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer gsk_test")
        .match_body(mockito::Matcher::PartialJson(serde_json::json!({
            "model": "llama3-70b-8192"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("test('sub', () => {});"))
        .create_async()
        .await;

    let selection = ProviderSelection::select(|name| match name {
        GROQ_API_KEY_ENV => Some("gsk_test".to_string()),
        OPENAI_API_KEY_ENV => Some("sk-ignored".to_string()),
        _ => None,
    });
    assert_eq!(selection.provider, Provider::Groq);

    let config = config_for(Provider::Groq, server.url());
    let client = factory::create_client(&selection, &config, false).unwrap();
    let source = resolve_input(source_path.to_str().unwrap()).unwrap();
    let out = TestGenerator::new(client.as_ref())
        .generate(&source)
        .await
        .unwrap();

    mock.assert_async().await;
    // No fence: the whole answer is written
    assert_eq!(fs::read_to_string(out).unwrap(), "test('sub', () => {});");
}

#[tokio::test]
async fn test_provider_error_is_completion_error() {
    let dir = TempDir::new().unwrap();
    let source_path = dir.path().join("math.js");
    fs::write(&source_path, "1;").unwrap();

    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(429)
        .with_body(r#"{"error":{"message":"Rate limit reached"}}"#)
        .create_async()
        .await;

    let config = config_for(Provider::OpenAI, server.url());
    let client = factory::create_client(&openai_selection(), &config, false).unwrap();
    let source = resolve_input(source_path.to_str().unwrap()).unwrap();

    let err = TestGenerator::new(client.as_ref())
        .generate(&source)
        .await
        .unwrap_err();
    assert!(matches!(err, GenerateError::Completion));
    assert!(!dir.path().join("math.test.js").exists());
}

#[tokio::test]
async fn test_empty_choices_is_completion_error() {
    let dir = TempDir::new().unwrap();
    let source_path = dir.path().join("math.js");
    fs::write(&source_path, "1;").unwrap();

    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices":[]}"#)
        .create_async()
        .await;

    let config = config_for(Provider::OpenAI, server.url());
    let client = factory::create_client(&openai_selection(), &config, false).unwrap();
    let source = resolve_input(source_path.to_str().unwrap()).unwrap();

    let result = TestGenerator::new(client.as_ref()).generate(&source).await;
    assert!(matches!(result, Err(GenerateError::Completion)));
}

#[tokio::test]
async fn test_unreachable_server_is_completion_error() {
    let dir = TempDir::new().unwrap();
    let source_path = dir.path().join("math.js");
    fs::write(&source_path, "1;").unwrap();

    // Nothing listens on port 9 (discard) on test machines
    let config = config_for(Provider::OpenAI, "http://127.0.0.1:9".to_string());
    let client = factory::create_client(&openai_selection(), &config, false).unwrap();
    let source = resolve_input(source_path.to_str().unwrap()).unwrap();

    let result = TestGenerator::new(client.as_ref()).generate(&source).await;
    assert!(matches!(result, Err(GenerateError::Completion)));
}

#[tokio::test]
async fn test_two_runs_produce_identical_output() {
    let dir = TempDir::new().unwrap();
    let source_path = dir.path().join("math.js");
    fs::write(&source_path, "module.exports = {};").unwrap();

    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(
            "Segue:\n```javascript\nconst { it } = require('@jest/globals');\nit('ok', () => {});\n```\nFim.",
        ))
        .expect(2)
        .create_async()
        .await;

    let config = config_for(Provider::OpenAI, server.url());
    let client = factory::create_client(&openai_selection(), &config, false).unwrap();
    let source = resolve_input(source_path.to_str().unwrap()).unwrap();
    let generator = TestGenerator::new(client.as_ref());

    let out = generator.generate(&source).await.unwrap();
    let first = fs::read(&out).unwrap();
    generator.generate(&source).await.unwrap();
    let second = fs::read(&out).unwrap();

    mock.assert_async().await;
    assert_eq!(first, second);
    assert_eq!(
        String::from_utf8(second).unwrap(),
        "const { it } = require('@jest/globals');\nit('ok', () => {});"
    );
}
