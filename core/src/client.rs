//! Blocking HTTP client shared by the resource wrappers.
//!
//! # Design
//! `ApiClient` owns one `ureq::Agent` for its whole lifetime, so every call
//! made through the same client reuses its connection pool. Each verb call
//! builds an `HttpRequest` and performs exactly one round trip. Status codes
//! are never interpreted here: 4xx/5xx responses come back as ordinary
//! `HttpResponse` values. Only transport failures become errors.

use std::fmt;

use ureq::http::Response;
use ureq::tls::TlsConfig;
use ureq::typestate::{WithBody, WithoutBody};
use ureq::{Agent, Body, RequestBuilder};

use tracing::{debug, info};

use crate::config::Settings;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, RequestOptions};

/// Session-holding client for one base URL.
pub struct ApiClient {
    settings: Settings,
    agent: Option<Agent>,
}

impl ApiClient {
    pub fn new(settings: Settings) -> Self {
        let agent = build_agent(&settings);
        Self {
            settings,
            agent: Some(agent),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn base_url(&self) -> &str {
        self.settings.base_url()
    }

    pub fn is_closed(&self) -> bool {
        self.agent.is_none()
    }

    pub fn get(&self, path: &str, options: RequestOptions) -> Result<HttpResponse, ApiError> {
        self.send(self.build(HttpMethod::Get, path, options))
    }

    pub fn post(&self, path: &str, options: RequestOptions) -> Result<HttpResponse, ApiError> {
        self.send(self.build(HttpMethod::Post, path, options))
    }

    pub fn put(&self, path: &str, options: RequestOptions) -> Result<HttpResponse, ApiError> {
        self.send(self.build(HttpMethod::Put, path, options))
    }

    pub fn patch(&self, path: &str, options: RequestOptions) -> Result<HttpResponse, ApiError> {
        self.send(self.build(HttpMethod::Patch, path, options))
    }

    pub fn delete(&self, path: &str, options: RequestOptions) -> Result<HttpResponse, ApiError> {
        self.send(self.build(HttpMethod::Delete, path, options))
    }

    /// Build the request a verb call would send, without sending it.
    pub fn build(&self, method: HttpMethod, path: &str, options: RequestOptions) -> HttpRequest {
        HttpRequest::build(method, self.settings.base_url(), path, options)
    }

    /// Execute a prepared request. One attempt, no retries.
    pub fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let agent = self.agent.as_ref().ok_or(ApiError::Closed)?;
        info!("{} {}", request.method, request.url);

        let mut response = dispatch(agent, &request)?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| Some((name.as_str().to_string(), value.to_str().ok()?.to_string())))
            .collect();
        let body = response.body_mut().read_to_string()?;

        debug!(status, url = %request.url, "response received");
        Ok(HttpResponse { status, headers, body })
    }

    /// Release the underlying agent. Safe to call more than once.
    pub fn close(&mut self) {
        if self.agent.take().is_some() {
            debug!(base_url = %self.settings.base_url(), "client session closed");
        }
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("settings", &self.settings)
            .field("closed", &self.is_closed())
            .finish()
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

fn build_agent(settings: &Settings) -> Agent {
    let tls_config = TlsConfig::builder()
        .disable_verification(!settings.verify_tls())
        .build();

    Agent::config_builder()
        .http_status_as_error(false)
        .timeout_global(Some(settings.timeout()))
        .tls_config(tls_config)
        .build()
        .new_agent()
}

fn dispatch(agent: &Agent, req: &HttpRequest) -> Result<Response<Body>, ureq::Error> {
    let body = req.body.as_deref();
    match req.method {
        HttpMethod::Get => send_without_body(decorate(agent.get(&req.url), req), body),
        HttpMethod::Delete => send_without_body(decorate(agent.delete(&req.url), req), body),
        HttpMethod::Post => send_with_body(decorate(agent.post(&req.url), req), body),
        HttpMethod::Put => send_with_body(decorate(agent.put(&req.url), req), body),
        HttpMethod::Patch => send_with_body(decorate(agent.patch(&req.url), req), body),
    }
}

fn decorate<B>(mut builder: RequestBuilder<B>, req: &HttpRequest) -> RequestBuilder<B> {
    for (key, value) in &req.query {
        builder = builder.query(key, value);
    }
    for (name, value) in &req.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

fn send_without_body(builder: RequestBuilder<WithoutBody>, body: Option<&str>) -> Result<Response<Body>, ureq::Error> {
    match body {
        Some(body) => builder.force_send_body().send(body.as_bytes()),
        None => builder.call(),
    }
}

fn send_with_body(builder: RequestBuilder<WithBody>, body: Option<&str>) -> Result<Response<Body>, ureq::Error> {
    match body {
        Some(body) => builder.send(body.as_bytes()),
        None => builder.send_empty(),
    }
}
