use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use dream_relay::{
    config::{Config, InterpreterConfig},
    interpreter::{HttpInterpreter, InterpretationService},
    relay::Relay,
    server::{self, AppState},
};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;
use tower::ServiceExt; // for `oneshot`

/// Create a test configuration pointing at the given interpretation service
pub fn create_test_config(service_url: &str) -> Config {
    let mut config = Config::default();
    config.server.host = "127.0.0.1".to_string();
    config.server.port = 0;
    config.server.logs.level = "debug".to_string();
    config.interpreter = InterpreterConfig {
        base_url: service_url.to_string(),
        timeout_secs: 2,
    };
    config
}

/// Relay router backed by the real HTTP interpreter
pub fn relay_app(service_url: &str) -> Router {
    let config = create_test_config(service_url);
    let interpreter = HttpInterpreter::new(&config.interpreter).unwrap();
    server::router(AppState::new(Relay::new(Arc::new(interpreter))))
}

/// Relay router backed by an in-process service
pub fn relay_app_with(service: Arc<dyn InterpretationService>) -> Router {
    server::router(AppState::new(Relay::new(service)))
}

/// Base URL on which nothing is listening
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

pub fn interpret_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/interpret")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

/// Send a request through the router and decode the JSON body
pub async fn send_json(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub async fn post_dream(app: Router, body: Value) -> (StatusCode, Value) {
    send_json(app, interpret_request(body.to_string())).await
}

/// Serve the router on an ephemeral port, returning its base URL
pub async fn spawn_relay(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        server::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> String {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await.unwrap();
    config_path.to_string_lossy().to_string()
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 8088
  logs:
    level: "debug"
interpreter:
  base_url: "http://ai-service:5000"
  timeout_secs: 10
client:
  backend_url: "http://relay:8088"
"#;
