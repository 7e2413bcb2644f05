//! Blocking client and resource wrappers for a JSONPlaceholder-style API.
//!
//! # Overview
//! `Settings` are resolved from an environment tag and environment
//! variables. `ApiClient` holds one HTTP session built from those settings
//! and performs single, uninterpreted round trips. `UserApi`, `PostApi` and
//! `CommentApi` each own an `ApiClient` and expose one method per endpoint.
//!
//! # Design
//! - Non-2xx statuses are data, not errors. Only transport failures, closed
//!   sessions and JSON encode/decode failures surface as `ApiError`.
//! - Response bodies are decoded lazily with `HttpResponse::json`.
//! - Sessions are released on `close()` or drop.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod types;

pub use api::{CommentApi, PostApi, UserApi};
pub use client::ApiClient;
pub use config::{get_config, ConfigError, Environment, Settings};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, RequestOptions};
pub use types::{Comment, NewComment, NewPost, NewUser, Post, PostPatch, Todo, User, UserPatch};
