#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use edith_rust::{
    Result,
    assistant::{Assistant, PlaceholderAssistant},
    config::Config,
    server::{self, AppState},
};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;
use tower::ServiceExt; // for `oneshot`

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    let mut config = Config::default();
    config.server.host = "127.0.0.1".to_string();
    config.server.logs.level = "debug".to_string();
    config
}

/// Build the router around an arbitrary assistant
pub fn create_test_app_with(assistant: Arc<dyn Assistant>, config: &Config) -> Router {
    let state = AppState::new(assistant, &config.assistant.name);
    server::router(state, config.server.max_body_bytes, config.server.cors)
}

/// Build the router around the placeholder assistant with default settings
pub fn create_test_app() -> Router {
    let config = create_test_config();
    let assistant = PlaceholderAssistant::new(config.assistant.clone());
    create_test_app_with(Arc::new(assistant), &config)
}

/// POST a raw body and return the status plus the parsed JSON response
pub async fn post_raw(app: Router, uri: &str, body: impl Into<Body>) -> (StatusCode, Option<Value>) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).ok())
}

/// POST a JSON value and return the status plus the parsed JSON response
pub async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Option<Value>) {
    post_raw(app, uri, body.to_string()).await
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
