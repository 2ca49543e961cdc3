use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_REQUIRED_TIER: &str = "BASIC";
pub const DEFAULT_PROTECTION_TYPE: &str = "unknown";
pub const DEFAULT_PROTECTION_MESSAGE: &str =
    "This site uses anti-scraping protection and cannot be extracted on your current plan";

/// The target site actively blocks extraction.
///
/// This is the only failure `extract` surfaces; it is not retryable and no
/// placeholder content applies. Carries enough structure for the caller to
/// render an upgrade prompt.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct ProtectionError {
    pub message: String,
    pub protection_type: String,
    pub upgrade_required: bool,
    pub required_tier: String,
}

impl ProtectionError {
    pub fn new(protection_type: impl Into<String>) -> Self {
        Self {
            message: DEFAULT_PROTECTION_MESSAGE.to_string(),
            protection_type: protection_type.into(),
            upgrade_required: true,
            required_tier: DEFAULT_REQUIRED_TIER.to_string(),
        }
    }
}

impl Default for ProtectionError {
    fn default() -> Self {
        Self::new(DEFAULT_PROTECTION_TYPE)
    }
}

/// Failures of the HTTP exchange itself. Always absorbed into fallback content.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("request timeout")]
    Timeout,

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("request failed: {0}")]
    Request(String),

    #[error("failed to read response body: {0}")]
    Body(String),

    #[error("unknown: {0}")]
    Unknown(String),
}

impl TransportError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    pub fn from_reqwest_error(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            // DNS failures surface here as well
            Self::Connect(err.to_string())
        } else if err.is_body() || err.is_decode() {
            Self::Body(err.to_string())
        } else if err.is_request() || err.is_builder() || err.is_redirect() {
            Self::Request(err.to_string())
        } else {
            Self::Unknown(err.to_string())
        }
    }
}

/// The underlying HTTP client could not be constructed.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("http client build failed: {0}")]
    Http(#[from] reqwest::Error),
}
