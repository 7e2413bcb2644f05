//! Plain-data HTTP request and response types.
//!
//! # Design
//! `ApiClient` first builds an `HttpRequest` value (URL, query, headers,
//! serialized body) and only then hands it to the transport. Keeping the
//! request as data makes URL joining and body encoding testable without a
//! network. `HttpResponse` holds the raw status and body; decoding happens
//! only when the caller asks for it.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional query, body and headers for a single verb call.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub(crate) query: Vec<(String, String)>,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) body: Option<String>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Serialize `body` as the JSON payload.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, ApiError> {
        let encoded = serde_json::to_string(body).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        self.body = Some(encoded);
        Ok(self)
    }
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Join `base_url` and `path` verbatim and attach `options`.
    ///
    /// A JSON body adds `content-type: application/json` unless the caller
    /// already supplied a content type.
    pub fn build(method: HttpMethod, base_url: &str, path: &str, options: RequestOptions) -> Self {
        let RequestOptions {
            query,
            mut headers,
            body,
        } = options;
        if body.is_some() && !headers.iter().any(|(k, _)| k.eq_ignore_ascii_case("content-type")) {
            headers.push(("content-type".to_string(), "application/json".to_string()));
        }
        Self {
            method,
            url: format!("{base_url}{path}"),
            query,
            headers,
            body,
        }
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// First header value matching `name`, case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Decode the body into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    /// Decode the body as untyped JSON (a list or a mapping).
    pub fn json_value(&self) -> Result<serde_json::Value, ApiError> {
        self.json()
    }

    /// Turn a non-2xx status into an error, passing 2xx responses through.
    pub fn error_for_status(self) -> Result<Self, ApiError> {
        if self.is_success() {
            return Ok(self);
        }
        if self.status == 404 {
            return Err(ApiError::NotFound);
        }
        Err(ApiError::HttpError {
            status: self.status,
            body: self.body,
        })
    }
}
