use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use pantry_recipes::{
    config::{GeneratorConfig, Provider},
    generator::TextGenerator,
    server::{self, AppState},
};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;

/// Generator configuration pointing both registry and inference API at `base_url`
pub fn create_generator_config(base_url: &str) -> GeneratorConfig {
    GeneratorConfig {
        provider: Provider::HuggingFace,
        model: "flax-community/t5-recipe-generation".to_string(),
        token_env: "PANTRY_RECIPES_TEST_TOKEN_UNSET".to_string(),
        hub_url: base_url.to_string(),
        inference_url: base_url.to_string(),
        ..GeneratorConfig::default()
    }
}

/// Router backed by the given generator, or by no model at all
pub fn create_test_app(generator: Option<Arc<dyn TextGenerator>>) -> Router {
    server::router(AppState::new(generator))
}

pub fn json_post(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Write a config file into a fresh temp directory
pub async fn create_test_config_file(content: &str) -> (TempDir, String) {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await.unwrap();
    (dir, config_path.to_string_lossy().to_string())
}

pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "0.0.0.0"
  port: 8080
  logs:
    level: "debug"

generator:
  provider: "huggingface"
  model: "flax-community/t5-recipe-generation"
  token_env: "HF_TOKEN"
  max_new_tokens: 256
  temperature: 0.7
"#;

pub const OPENAI_CONFIG_YAML: &str = r#"
generator:
  provider: "openai"
  model: "meta-llama/Llama-3.1-8B-Instruct"
  base_url: "https://router.huggingface.co/v1"
"#;

pub const INVALID_CONFIG_YAML: &str = r#"
server:
  port: "not-a-number"
"#;

pub const EMPTY_MODEL_CONFIG_YAML: &str = r#"
generator:
  model: ""
"#;
