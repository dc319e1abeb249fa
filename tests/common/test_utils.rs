use super::mocks::MockCompletionClient;
use axum::Router;
use saarthi_rust::{
    Result,
    config::{Config, LlmConfig, LogsConfig, PersonaConfig, ServerConfig},
    llm::CompletionClient,
    prompt::SystemPersona,
    server::{
        self,
        handlers::{AppState, ChatService},
    },
};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;

pub const TEST_PERSONA: &str = "You are Saarthi, the official JECRC Foundation chatbot.";
pub const TEST_ORIGIN: &str = "http://localhost:3002";

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5001,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
            cors_origins: vec![TEST_ORIGIN.to_string()],
        },
        llm: LlmConfig {
            provider: "gemini".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta/openai".to_string(),
            api_key: "test-api-key".to_string(),
            model: "gemini-2.5-flash".to_string(),
            temperature: 0.7,
        },
        persona: PersonaConfig::default(),
    }
}

/// Application state around any completion client, credential marked as configured
pub fn create_test_state(client: Arc<dyn CompletionClient>, model: &str) -> AppState {
    AppState {
        chat: ChatService::new(
            SystemPersona::new(TEST_PERSONA).unwrap(),
            client,
            model.to_string(),
        ),
        credential_configured: true,
    }
}

pub fn create_test_app_from_state(state: AppState) -> Router {
    server::router(state, &[TEST_ORIGIN.to_string()]).unwrap()
}

/// Build the full router around any completion client
pub fn create_test_app_with_client(client: Arc<dyn CompletionClient>, model: &str) -> Router {
    create_test_app_from_state(create_test_state(client, model))
}

pub fn create_test_app(client: Arc<MockCompletionClient>) -> Router {
    create_test_app_with_client(client, "gemini-2.5-flash")
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

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 8080
  cors_origins:
    - "http://localhost:3002"
    - "http://localhost:5173"
  logs:
    level: "debug"

llm:
  provider: "gemini"
  base_url: "http://localhost:9999/v1beta/openai"
  api_key: "test-api-key"
  model: "gemini-1.5-flash"
  temperature: 0.2
"#;

/// Only the pieces that differ from the defaults
pub const PARTIAL_CONFIG_YAML: &str = r#"
llm:
  model: "gemini-pro"
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: "not-a-number"
"#;
