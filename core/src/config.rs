//! Environment-driven settings for the API client.
//!
//! # Design
//! An environment tag (`dev`, `staging`, `prod`) selects a `Settings` record.
//! Values come from environment variables with built-in defaults. Unknown
//! tags resolve to `dev` instead of failing. `Settings` has no mutating
//! methods; build a new one to change anything.

use std::fmt;
use std::time::Duration;

use thiserror::Error;
use tracing::debug;

/// Public test API host used when no base URL variable is set.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Request timeout used when `TIMEOUT` is unset.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

pub const DEFAULT_LOG_LEVEL: &str = "INFO";

/// Errors raised while resolving settings from the environment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Deployment environment the suite runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Environment {
    #[default]
    Dev,
    Staging,
    Prod,
}

impl Environment {
    /// Map a tag to an environment. Anything unrecognised is `Dev`.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "dev" => Environment::Dev,
            "staging" => Environment::Staging,
            "prod" => Environment::Prod,
            other => {
                debug!(tag = other, "unknown environment tag, using dev");
                Environment::Dev
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Dev => "dev",
            Environment::Staging => "staging",
            Environment::Prod => "prod",
        }
    }

    /// Name of the variable overriding the base URL for this environment.
    fn base_url_key(self) -> &'static str {
        match self {
            Environment::Dev => "DEV_BASE_URL",
            Environment::Staging => "STAGING_BASE_URL",
            Environment::Prod => "PROD_BASE_URL",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable settings bundle for one environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    environment: Environment,
    base_url: String,
    timeout_secs: u64,
    verify_tls: bool,
    log_level: String,
    debug: bool,
}

impl Settings {
    /// Explicit construction, bypassing the environment entirely.
    pub fn new(base_url: impl Into<String>, timeout_secs: u64, verify_tls: bool, log_level: impl Into<String>) -> Self {
        Self {
            environment: Environment::Dev,
            base_url: base_url.into(),
            timeout_secs,
            verify_tls,
            log_level: log_level.into(),
            debug: true,
        }
    }

    /// Resolve settings for `environment` using `lookup` to read variables.
    ///
    /// The base URL prefers the per-environment variable, then `BASE_URL`,
    /// then [`DEFAULT_BASE_URL`]. `prod` always verifies TLS.
    pub fn resolve<F>(environment: Environment, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(environment.base_url_key())
            .or_else(|| lookup("BASE_URL"))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        // Zero would make every call time out immediately.
        let timeout_secs = match lookup("TIMEOUT") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => return Err(ConfigError::InvalidValue { key: "TIMEOUT", value: raw }),
            },
            None => DEFAULT_TIMEOUT_SECS,
        };

        let verify_tls = match environment {
            Environment::Prod => true,
            _ => lookup("VERIFY_SSL").map_or(true, |v| v.eq_ignore_ascii_case("true")),
        };

        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(Self {
            environment,
            base_url,
            timeout_secs,
            verify_tls,
            log_level,
            debug: environment == Environment::Dev,
        })
    }

    /// Resolve settings from the process environment.
    pub fn from_env(environment: Environment) -> Result<Self, ConfigError> {
        Self::resolve(environment, |key| std::env::var(key).ok())
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    pub fn verify_tls(&self) -> bool {
        self.verify_tls
    }

    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    /// `log_level` as a `tracing` filter directive.
    ///
    /// Accepts the Python-style names (`CRITICAL`, `WARNING`, `NOTSET`, ...)
    /// as well as tracing's own. Anything else falls back to `info`.
    pub fn tracing_directive(&self) -> &'static str {
        match self.log_level.trim().to_ascii_uppercase().as_str() {
            "CRITICAL" | "FATAL" | "ERROR" => "error",
            "WARNING" | "WARN" => "warn",
            "INFO" => "info",
            "DEBUG" => "debug",
            "NOTSET" | "TRACE" => "trace",
            "OFF" => "off",
            other => {
                debug!(level = other, "unknown log level, using info");
                "info"
            }
        }
    }
}

impl Default for Settings {
    /// Built-in `dev` defaults without consulting the environment.
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, true, DEFAULT_LOG_LEVEL)
    }
}

/// Load `.env` if present, then resolve settings for `tag`.
///
/// Variables already set in the process take precedence over `.env`.
pub fn get_config(tag: &str) -> Result<Settings, ConfigError> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            debug!(error = %e, "ignoring unreadable .env file");
        }
    }
    Settings::from_env(Environment::from_tag(tag))
}
