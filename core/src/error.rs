//! Error types for the API client.
//!
//! # Design
//! Transport failures (the exchange never completed) and payload failures
//! are errors. A completed exchange with a non-2xx status is not: verb
//! operations return it as a normal `HttpResponse`. `NotFound` and
//! `HttpError` only come out of `HttpResponse::error_for_status`, for
//! callers that opt in to status interpretation.

use thiserror::Error;

/// Errors returned by `ApiClient` and the resource wrappers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request did not complete within the configured timeout.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// DNS resolution of the target host failed.
    #[error("host not found: {0}")]
    HostNotFound(String),

    /// The TCP connection could not be established.
    #[error("connection failed: {0}")]
    Connection(String),

    /// TLS handshake or certificate verification failed.
    #[error("tls failure: {0}")]
    Tls(String),

    /// Any other failure to complete the exchange.
    #[error("transport failure: {0}")]
    Transport(String),

    /// A verb operation was called after `close()`.
    #[error("client session is closed")]
    Closed,

    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}

impl ApiError {
    /// True when the network exchange itself failed.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ApiError::Timeout(_)
                | ApiError::HostNotFound(_)
                | ApiError::Connection(_)
                | ApiError::Tls(_)
                | ApiError::Transport(_)
        )
    }
}

impl From<ureq::Error> for ApiError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Timeout(_) => ApiError::Timeout(err.to_string()),
            ureq::Error::HostNotFound => ApiError::HostNotFound(err.to_string()),
            ureq::Error::ConnectionFailed => ApiError::Connection(err.to_string()),
            ureq::Error::Tls(_) => ApiError::Tls(err.to_string()),
            ureq::Error::Io(e) if e.kind() == std::io::ErrorKind::TimedOut => ApiError::Timeout(e.to_string()),
            ureq::Error::Io(e) if e.kind() == std::io::ErrorKind::ConnectionRefused => {
                ApiError::Connection(e.to_string())
            }
            other => ApiError::Transport(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_variants_are_flagged() {
        assert!(ApiError::Timeout("5s".into()).is_transport());
        assert!(ApiError::HostNotFound("x".into()).is_transport());
        assert!(ApiError::Connection("refused".into()).is_transport());
        assert!(ApiError::Tls("bad cert".into()).is_transport());
        assert!(ApiError::Transport("reset".into()).is_transport());
    }

    #[test]
    fn status_and_payload_variants_are_not_transport() {
        assert!(!ApiError::NotFound.is_transport());
        assert!(!ApiError::HttpError { status: 500, body: String::new() }.is_transport());
        assert!(!ApiError::DeserializationError("eof".into()).is_transport());
        assert!(!ApiError::SerializationError("nan".into()).is_transport());
        assert!(!ApiError::Closed.is_transport());
    }

    #[test]
    fn host_not_found_maps_from_ureq() {
        let err: ApiError = ureq::Error::HostNotFound.into();
        assert!(matches!(err, ApiError::HostNotFound(_)));
    }

    #[test]
    fn refused_io_maps_to_connection() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err: ApiError = ureq::Error::Io(io).into();
        assert!(matches!(err, ApiError::Connection(_)));
    }

    #[test]
    fn display_includes_status_and_body() {
        let err = ApiError::HttpError {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 500: boom");
    }
}
