//! Shared helpers for integration tests.

#![allow(dead_code)]

pub mod mocks;

use axum_test::TestServer;
use better_health::{api, utils::Config, AppState, ModelClient};
use std::sync::Arc;

/// Configuration pointing at `url`, with test-friendly timeouts.
pub fn test_config(url: &str) -> Config {
    let mut config = Config::default();
    config.model.url = url.to_string();
    config.model.api_key = "test-key-123456".to_string();
    config
}

/// Full application over an arbitrary model client.
pub fn test_server_with(client: Arc<dyn ModelClient>) -> TestServer {
    let state = AppState::with_client(test_config(client.endpoint()), client);
    TestServer::new(api::create_app(state)).expect("Failed to create test server")
}

/// Full application over the real HTTP client, pointed at `config.model.url`.
pub fn test_server_for(config: Config) -> TestServer {
    let state = AppState::new(config).expect("Failed to build app state");
    TestServer::new(api::create_app(state)).expect("Failed to create test server")
}
