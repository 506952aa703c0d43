use std::sync::Arc;

use axum::Router;
use taskflow_server::config::Config;
use taskflow_server::store::MemoryTaskStore;
use taskflow_server::task::api::TaskState;
use taskflow_server::web::create_app;

pub fn test_config() -> Config {
    Config {
        port: 5005,
        client_origin: "http://localhost:5173".to_string(),
    }
}

/// Builds the full application router backed by a fresh in-memory store.
pub fn setup_app() -> Router {
    // Allow multiple calls to init for tests.
    let _ = tracing_subscriber::fmt().try_init();

    let state = TaskState {
        store: Arc::new(MemoryTaskStore::new()),
    };
    create_app(&test_config(), state).expect("failed to build test app")
}
