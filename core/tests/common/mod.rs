//! Shared fixtures for the black-box API suite.
//!
//! With `API_ENV` (`dev`, `staging`, `prod`) set, tests run against the
//! settings resolved for that environment. Without it, the mock server is
//! started once per test binary on a random local port and every wrapper
//! points at it.

#![allow(dead_code)]

use std::collections::BTreeSet;
use std::sync::OnceLock;

use placeholder_core::{get_config, CommentApi, PostApi, Settings, UserApi};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

pub fn settings() -> Settings {
    static SETTINGS: OnceLock<Settings> = OnceLock::new();
    SETTINGS
        .get_or_init(|| {
            let settings = match std::env::var("API_ENV") {
                Ok(tag) => get_config(&tag).expect("invalid environment configuration"),
                Err(_) => {
                    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "INFO".to_string());
                    Settings::new(spawn_mock_server(), 5, true, level)
                }
            };
            init_tracing(settings.tracing_directive());
            settings
        })
        .clone()
}

pub fn user_api() -> UserApi {
    UserApi::new(settings())
}

pub fn post_api() -> PostApi {
    PostApi::new(settings())
}

pub fn comment_api() -> CommentApi {
    CommentApi::new(settings())
}

/// Start the mock server on a background thread and return its base URL.
fn spawn_mock_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

fn init_tracing(directive: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directive))
        .with_test_writer()
        .try_init();
}

/// Decoded body as an array, panicking with the raw body otherwise.
pub fn as_list(body: &Value) -> &Vec<Value> {
    body.as_array()
        .unwrap_or_else(|| panic!("expected a JSON list, got {body}"))
}

pub fn ids(items: &[Value]) -> BTreeSet<i64> {
    items.iter().filter_map(|item| item["id"].as_i64()).collect()
}
