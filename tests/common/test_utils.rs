use super::mocks::{MockDataSource, MockInferenceProvider};
use axum::Router;
use multi_api_rust::{
    Result,
    config::{Config, FetchConfig, InferenceConfig},
    inference::SummaryParams,
    server::{self, handlers::AppState},
    service::NlpService,
};
use serde_json::{Value, json};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;

pub const SUMMARIZATION_MODEL: &str = "sshleifer/distilbart-cnn-12-6";
pub const CLASSIFICATION_MODEL: &str = "distilbert-base-uncased-finetuned-sst-2-english";

pub const ARTICLE: &str = "The tower is 324 metres (1,063 ft) tall, about the same height as an \
81-storey building, and the tallest structure in Paris. Its base is square, measuring 125 metres \
(410 ft) on each side. During its construction, the Eiffel Tower surpassed the Washington Monument \
to become the tallest man-made structure in the world.";

/// Build a router backed by the given mocks
pub fn create_test_app(
    provider: Arc<MockInferenceProvider>,
    source: Arc<MockDataSource>,
) -> Router {
    let service = NlpService::new(provider, source, SummaryParams::default());
    server::router(AppState {
        service: Arc::new(service),
    })
}

/// Router whose mocks succeed with canned outputs
pub fn create_default_test_app() -> Router {
    let provider = MockInferenceProvider::new()
        .with_summary("The Eiffel Tower is 324 metres tall and the tallest structure in Paris.")
        .with_classification("POSITIVE", 0.9987);
    let source = MockDataSource::new().with_body(sample_post());

    create_test_app(Arc::new(provider), Arc::new(source))
}

/// Configuration pointing both collaborators at a local mock server
pub fn create_test_config(base_url: &str) -> Config {
    Config {
        inference: InferenceConfig {
            base_url: base_url.to_string(),
            api_key: Some("hf_test_token".to_string()),
            ..InferenceConfig::default()
        },
        fetch: FetchConfig {
            url: format!("{}/posts/1", base_url),
        },
        ..Config::default()
    }
}

/// Base URL of a local port with nothing listening on it
pub fn unreachable_base_url() -> String {
    let listener =
        std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind ephemeral port");
    let addr = listener.local_addr().expect("Failed to read local address");
    drop(listener);
    format!("http://{}", addr)
}

/// The fixed jsonplaceholder post relayed by `/fetch`
pub fn sample_post() -> Value {
    json!({
        "userId": 1,
        "id": 1,
        "title": "sunt aut facere repellat provident occaecati excepturi optio reprehenderit",
        "body": "quia et suscipit\nsuscipit recusandae consequuntur expedita et cum\nreprehenderit molestiae ut ut quas totam\nnostrum rerum est autem sunt rem eveniet architecto"
    })
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<String> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}

pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 9000
  logs:
    level: "debug"

inference:
  base_url: "http://localhost:8081"
  api_key: "hf_secret"
  summarization_model: "facebook/bart-large-cnn"
  classification_model: "cardiffnlp/twitter-roberta-base-sentiment"
  wait_for_model: false
  summary:
    max_length: 120
    min_length: 30
    do_sample: true

fetch:
  url: "http://localhost:8082/posts/7"
"#;

pub const PARTIAL_CONFIG_YAML: &str = r#"
server:
  port: 8081
"#;

pub const INVALID_CONFIG_YAML: &str = r#"
server:
  port: "not-a-number"
"#;

pub const INVERTED_LENGTHS_CONFIG_YAML: &str = r#"
inference:
  summary:
    max_length: 20
    min_length: 60
"#;
