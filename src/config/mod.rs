//! Configuration for the extraction client.
//!
//! The client itself never reads process state: a `ClientConfig` is built by
//! the caller and handed to `ExtractionClient::new`. `ClientConfig::from_env`
//! exists for binaries that want the usual environment-driven setup with
//! development defaults.

use std::env;
use std::time::Duration;

use thiserror::Error;

/// Environment variable names. Public so tests and binaries can refer to them.
pub const ENV_API_BASE: &str = "API_BASE";
pub const ENV_TIMEOUT_SECS: &str = "EXTRACT_TIMEOUT_SECS";
pub const ENV_USER_AGENT: &str = "EXTRACT_USER_AGENT";

/// Default development values used when environment variables are absent.
const DEFAULT_API_BASE: &str = "http://127.0.0.1:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_USER_AGENT: &str = "ExtractionClient/0.1";

/// Runtime configuration for `ExtractionClient`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_base: String,
    request_timeout: Duration,
    user_agent: String,
}

impl ClientConfig {
    /// Config pointing at `api_base` with the default 30s request budget.
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Load from environment variables, falling back to development defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_base = env::var(ENV_API_BASE).unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let user_agent =
            env::var(ENV_USER_AGENT).unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());

        let timeout_secs = match env::var(ENV_TIMEOUT_SECS) {
            Ok(raw) => parse_timeout_secs(&raw)?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_base,
            request_timeout: Duration::from_secs(timeout_secs),
            user_agent,
        })
    }

    /// Base URL of the extraction backend, used verbatim.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Upper bound on a single scrape request, body read included.
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Full URL of the backend `scrape` endpoint.
    pub fn scrape_url(&self) -> String {
        format!("{}/scrape", self.api_base)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

fn parse_timeout_secs(raw: &str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(ConfigError::InvalidValue {
            field: ENV_TIMEOUT_SECS,
            reason: "must be greater than zero".to_string(),
        }),
        Ok(secs) => Ok(secs),
        Err(e) => Err(ConfigError::InvalidValue {
            field: ENV_TIMEOUT_SECS,
            reason: e.to_string(),
        }),
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
