use reqwest::StatusCode;

use crate::client::classify::{DEFAULT_TITLE, MalformedReason, Outcome, classify};
use crate::client::errors::{ProtectionError, TransportError};
use crate::fallback::fallback;

const URL: &str = "https://example.com/article";

#[test]
fn test_classify_success() {
    let outcome = classify(StatusCode::OK, r#"{"text": "Body text", "title": "T"}"#);
    match outcome {
        Outcome::Success { text, title } => {
            assert_eq!(text, "Body text");
            assert_eq!(title.as_deref(), Some("T"));
        }
        other => panic!("Expected Success, got {other:?}"),
    }
}

#[test]
fn test_classify_html_body_before_json() {
    for body in [
        "<!DOCTYPE html><html><body>Oops</body></html>",
        "  \n<html><head></head></html>",
        "<!doctype HTML>",
    ] {
        assert!(matches!(
            classify(StatusCode::OK, body),
            Outcome::Malformed(MalformedReason::HtmlBody)
        ));
    }
}

#[test]
fn test_classify_invalid_json() {
    assert!(matches!(
        classify(StatusCode::OK, "not json at all"),
        Outcome::Malformed(MalformedReason::InvalidJson(_))
    ));
    assert!(matches!(
        classify(StatusCode::OK, r#"{"text": 42}"#),
        Outcome::Malformed(MalformedReason::InvalidJson(_))
    ));
}

#[test]
fn test_classify_missing_or_blank_text() {
    for body in [r#"{"title": "T"}"#, r#"{"text": "", "title": "T"}"#, r#"{"text": " \n\t "}"#] {
        assert!(matches!(
            classify(StatusCode::OK, body),
            Outcome::Malformed(MalformedReason::EmptyText)
        ));
    }
}

#[test]
fn test_classify_protection_with_defaults() {
    let body = r#"{"error": "anti_scraping_protection", "protectionType": "cloudflare"}"#;
    match classify(StatusCode::FORBIDDEN, body) {
        Outcome::Protected(err) => {
            assert_eq!(err.protection_type, "cloudflare");
            assert_eq!(err.required_tier, "BASIC");
            assert!(err.upgrade_required);
        }
        other => panic!("Expected Protected, got {other:?}"),
    }
}

#[test]
fn test_classify_protection_with_all_fields() {
    let body = r#"{
        "error": "anti_scraping_protection",
        "message": "Blocked by bot detection",
        "protectionType": "datadome",
        "upgradeRequired": false,
        "requiredTier": "PRO"
    }"#;
    match classify(StatusCode::from_u16(451).unwrap(), body) {
        Outcome::Protected(err) => assert_eq!(
            err,
            ProtectionError {
                message: "Blocked by bot detection".to_string(),
                protection_type: "datadome".to_string(),
                upgrade_required: false,
                required_tier: "PRO".to_string(),
            }
        ),
        other => panic!("Expected Protected, got {other:?}"),
    }
}

#[test]
fn test_classify_protection_ignores_mistyped_fields() {
    let body = r#"{"error": "anti_scraping_protection", "upgradeRequired": "yes", "requiredTier": 3}"#;
    match classify(StatusCode::FORBIDDEN, body) {
        Outcome::Protected(err) => {
            assert!(err.upgrade_required);
            assert_eq!(err.required_tier, "BASIC");
            assert_eq!(err.protection_type, "unknown");
        }
        other => panic!("Expected Protected, got {other:?}"),
    }
}

#[test]
fn test_classify_other_error_statuses() {
    for (status, body) in [
        (StatusCode::INTERNAL_SERVER_ERROR, r#"{"error": "internal"}"#),
        (StatusCode::BAD_GATEWAY, "<html>Bad gateway</html>"),
        (StatusCode::TOO_MANY_REQUESTS, ""),
        (StatusCode::FORBIDDEN, r#""anti_scraping_protection""#),
    ] {
        match classify(status, body) {
            Outcome::ServerError { status: got } => assert_eq!(got, status),
            other => panic!("Expected ServerError for {status}, got {other:?}"),
        }
    }
}

#[test]
fn test_protection_only_on_error_status() {
    // the marker inside a 200 body is just an unusable success payload
    let body = r#"{"error": "anti_scraping_protection"}"#;
    assert!(matches!(
        classify(StatusCode::OK, body),
        Outcome::Malformed(MalformedReason::EmptyText)
    ));
}

#[test]
fn test_transport_errors_map_to_outcomes() {
    assert!(matches!(
        Outcome::from_transport(TransportError::Timeout),
        Outcome::TimedOut
    ));
    assert!(matches!(
        Outcome::from_transport(TransportError::Connect("refused".to_string())),
        Outcome::NetworkFailure(_)
    ));
}

#[test]
fn test_resolve_success_simplifies_text() {
    let outcome = Outcome::Success {
        text: "  Hello world.   \n\n\n\nBye.  ".to_string(),
        title: Some("T".to_string()),
    };
    let result = outcome.resolve(URL).unwrap();
    assert_eq!(result.content, "Hello world.\n\nBye.");
    assert_eq!(result.title, "T");
    assert_eq!(result.source_url, URL);
}

#[test]
fn test_resolve_success_defaults_title() {
    for title in [None, Some(String::new()), Some("   ".to_string())] {
        let outcome = Outcome::Success {
            text: "Body".to_string(),
            title,
        };
        assert_eq!(outcome.resolve(URL).unwrap().title, DEFAULT_TITLE);
    }
}

#[test]
fn test_resolve_boilerplate_only_text_falls_back() {
    let outcome = Outcome::Success {
        text: "Advertisement".to_string(),
        title: Some("T".to_string()),
    };
    assert_eq!(outcome.resolve(URL).unwrap(), fallback(URL));
}

#[test]
fn test_resolve_whitespace_left_after_boilerplate_falls_back() {
    for text in ["Advertisement\nSponsored content", "advertisement sponsored content"] {
        let outcome = Outcome::Success {
            text: text.to_string(),
            title: Some("T".to_string()),
        };
        assert_eq!(outcome.resolve(URL).unwrap(), fallback(URL), "text {text:?}");
    }
}

#[test]
fn test_resolve_failures_fall_back() {
    let outcomes = [
        Outcome::Malformed(MalformedReason::HtmlBody),
        Outcome::Malformed(MalformedReason::EmptyText),
        Outcome::ServerError {
            status: StatusCode::SERVICE_UNAVAILABLE,
        },
        Outcome::NetworkFailure(TransportError::Connect("refused".to_string())),
        Outcome::TimedOut,
    ];
    for outcome in outcomes {
        let kind = outcome.kind();
        assert_eq!(outcome.resolve(URL).unwrap(), fallback(URL), "outcome {kind}");
    }
}

#[test]
fn test_resolve_protected_is_error() {
    let err = ProtectionError::new("cloudflare");
    let outcome = Outcome::Protected(err.clone());
    assert_eq!(outcome.resolve(URL).unwrap_err(), err);
}
