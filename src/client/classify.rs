use reqwest::StatusCode;
use serde_json::Value;
use tracing::{info, warn};

use crate::client::{
    errors::{
        DEFAULT_PROTECTION_MESSAGE, DEFAULT_PROTECTION_TYPE, DEFAULT_REQUIRED_TIER,
        ProtectionError, TransportError,
    },
    types::{ExtractionResult, ScrapeResponse},
};
use crate::{fallback::fallback, simplifier::simplify};

/// `error` value the backend uses for protected sites.
pub const PROTECTION_ERROR_CODE: &str = "anti_scraping_protection";

/// Title used when the backend does not provide one.
pub const DEFAULT_TITLE: &str = "Extracted Content";

#[derive(Debug)]
pub enum MalformedReason {
    /// A success status with an HTML document as body.
    HtmlBody,
    InvalidJson(String),
    /// `text` missing, or blank after trimming.
    EmptyText,
}

/// Where a single scrape attempt ended up.
#[derive(Debug)]
pub enum Outcome {
    Success { text: String, title: Option<String> },
    Malformed(MalformedReason),
    ServerError { status: StatusCode },
    Protected(ProtectionError),
    NetworkFailure(TransportError),
    TimedOut,
}

impl Outcome {
    pub fn from_transport(err: TransportError) -> Self {
        if err.is_timeout() {
            Self::TimedOut
        } else {
            Self::NetworkFailure(err)
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Success { .. } => "success",
            Self::Malformed(_) => "malformed_response",
            Self::ServerError { .. } => "server_error",
            Self::Protected(_) => "protected",
            Self::NetworkFailure(_) => "network_failure",
            Self::TimedOut => "timed_out",
        }
    }

    /// Turn the outcome into what the caller sees.
    ///
    /// `Protected` is the only outcome that yields an error; every other
    /// non-success outcome becomes placeholder content for `url`.
    pub fn resolve(self, url: &str) -> Result<ExtractionResult, ProtectionError> {
        match self {
            Self::Success { text, title } => {
                let content = simplify(&text);
                if content.trim().is_empty() {
                    warn!(url, "Extracted text was only boilerplate, using fallback content");
                    return Ok(fallback(url));
                }

                let title = title
                    .filter(|t| !t.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_TITLE.to_string());

                info!(url, chars = content.len(), "Extracted content");
                Ok(ExtractionResult {
                    content,
                    title,
                    source_url: url.to_string(),
                })
            }
            Self::Protected(err) => {
                warn!(
                    url,
                    protection_type = %err.protection_type,
                    required_tier = %err.required_tier,
                    "Site is protected against extraction"
                );
                Err(err)
            }
            other => {
                warn!(url, outcome = other.kind(), detail = ?other, "Using fallback content");
                Ok(fallback(url))
            }
        }
    }
}

/// Classify a completed HTTP exchange from its status and raw body.
pub fn classify(status: StatusCode, body: &str) -> Outcome {
    if !status.is_success() {
        return classify_error(status, body);
    }

    // Checked before any JSON parsing: a misconfigured backend may serve an
    // HTML error page with a 200.
    if looks_like_html(body) {
        return Outcome::Malformed(MalformedReason::HtmlBody);
    }

    let payload: ScrapeResponse = match serde_json::from_str(body) {
        Ok(payload) => payload,
        Err(e) => return Outcome::Malformed(MalformedReason::InvalidJson(e.to_string())),
    };

    match payload.text {
        Some(text) if !text.trim().is_empty() => Outcome::Success {
            text,
            title: payload.title,
        },
        _ => Outcome::Malformed(MalformedReason::EmptyText),
    }
}

fn classify_error(status: StatusCode, body: &str) -> Outcome {
    let Ok(payload) = serde_json::from_str::<Value>(body) else {
        return Outcome::ServerError { status };
    };

    if payload.get("error").and_then(Value::as_str) == Some(PROTECTION_ERROR_CODE) {
        Outcome::Protected(protection_from_payload(&payload))
    } else {
        Outcome::ServerError { status }
    }
}

fn protection_from_payload(payload: &Value) -> ProtectionError {
    ProtectionError {
        message: string_field(payload, "message")
            .unwrap_or_else(|| DEFAULT_PROTECTION_MESSAGE.to_string()),
        protection_type: string_field(payload, "protectionType")
            .unwrap_or_else(|| DEFAULT_PROTECTION_TYPE.to_string()),
        upgrade_required: payload
            .get("upgradeRequired")
            .and_then(Value::as_bool)
            .unwrap_or(true),
        required_tier: string_field(payload, "requiredTier")
            .unwrap_or_else(|| DEFAULT_REQUIRED_TIER.to_string()),
    }
}

fn string_field(payload: &Value, key: &str) -> Option<String> {
    payload
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn looks_like_html(body: &str) -> bool {
    let head: String = body
        .trim_start()
        .chars()
        .take(9)
        .flat_map(char::to_lowercase)
        .collect();
    head.starts_with("<!doctype") || head.starts_with("<html")
}
