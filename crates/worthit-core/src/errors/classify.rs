//! Map failures onto `ErrorKind`: status code first, then message keywords.

use super::failure::Failure;
use super::kind::ErrorKind;

/// Message keyword rules, checked in order against the lowercased message.
const MESSAGE_RULES: &[(ErrorKind, &[&str])] = &[
    (
        ErrorKind::NetworkError,
        &["network", "failed to fetch", "load failed"],
    ),
    (ErrorKind::Timeout, &["timeout", "timed out"]),
    (ErrorKind::AuthError, &["not authenticated", "jwt expired"]),
    (ErrorKind::Unauthorized, &["forbidden", "permission denied"]),
    (ErrorKind::NotFound, &["not found"]),
    (ErrorKind::Conflict, &["already exists", "duplicate key"]),
    (ErrorKind::ValidationError, &["invalid", "validation"]),
    (ErrorKind::RateLimit, &["too many requests", "rate limit"]),
];

/// Classify an HTTP-like status code. `None` when no rule covers it.
pub fn classify_status(code: u16) -> Option<ErrorKind> {
    match code {
        401 => Some(ErrorKind::AuthError),
        403 => Some(ErrorKind::Unauthorized),
        404 => Some(ErrorKind::NotFound),
        409 => Some(ErrorKind::Conflict),
        400 => Some(ErrorKind::ValidationError),
        429 => Some(ErrorKind::RateLimit),
        500..=599 => Some(ErrorKind::ServerError),
        _ => None,
    }
}

/// Classify a failure message by case-insensitive keyword match.
pub fn classify_message(message: &str) -> Option<ErrorKind> {
    let lower = message.to_lowercase();
    MESSAGE_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(kind, _)| *kind)
}

/// Classify any failure. Total: falls back to `ErrorKind::Unknown`.
pub fn classify<F: Failure + ?Sized>(failure: &F) -> ErrorKind {
    failure
        .status()
        .and_then(classify_status)
        .or_else(|| failure.message().and_then(classify_message))
        .unwrap_or(ErrorKind::Unknown)
}

/// True exactly when the failure's kind is worth another attempt.
pub fn is_retryable<F: Failure + ?Sized>(failure: &F) -> bool {
    classify(failure).is_retryable()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RawFailure;
    use serde_json::{json, Value};

    fn msg(m: &str) -> ErrorKind {
        classify(&RawFailure::with_message(m))
    }

    fn status(code: u16) -> ErrorKind {
        classify(&RawFailure::with_status(code))
    }

    #[test]
    fn status_codes() {
        assert_eq!(status(401), ErrorKind::AuthError);
        assert_eq!(status(403), ErrorKind::Unauthorized);
        assert_eq!(status(404), ErrorKind::NotFound);
        assert_eq!(status(409), ErrorKind::Conflict);
        assert_eq!(status(400), ErrorKind::ValidationError);
        assert_eq!(status(429), ErrorKind::RateLimit);
        assert_eq!(status(500), ErrorKind::ServerError);
        assert_eq!(status(503), ErrorKind::ServerError);
        assert_eq!(status(599), ErrorKind::ServerError);
        assert_eq!(status(418), ErrorKind::Unknown);
        assert_eq!(status(600), ErrorKind::Unknown);
    }

    #[test]
    fn message_keywords() {
        assert_eq!(msg("Network error"), ErrorKind::NetworkError);
        assert_eq!(msg("Failed to fetch"), ErrorKind::NetworkError);
        assert_eq!(msg("Request timeout"), ErrorKind::Timeout);
        assert_eq!(msg("timed out"), ErrorKind::Timeout);
        assert_eq!(msg("Not authenticated"), ErrorKind::AuthError);
        assert_eq!(msg("Forbidden"), ErrorKind::Unauthorized);
        assert_eq!(msg("not found"), ErrorKind::NotFound);
        assert_eq!(msg("already exists"), ErrorKind::Conflict);
        assert_eq!(msg("Invalid input"), ErrorKind::ValidationError);
        assert_eq!(msg("too many requests"), ErrorKind::RateLimit);
        assert_eq!(msg("Unknown error"), ErrorKind::Unknown);
    }

    #[test]
    fn message_rules_first_match_wins() {
        // Mentions both network and timeout; network is checked first.
        assert_eq!(msg("network timeout"), ErrorKind::NetworkError);
        assert_eq!(msg("Invalid token: not authenticated"), ErrorKind::AuthError);
    }

    #[test]
    fn status_beats_message() {
        let f = RawFailure::new(401, "Network error");
        assert_eq!(classify(&f), ErrorKind::AuthError);
        let f = RawFailure::new(503, "not found");
        assert_eq!(classify(&f), ErrorKind::ServerError);
    }

    #[test]
    fn unmatched_status_falls_back_to_message() {
        let f = RawFailure::new(418, "request timed out");
        assert_eq!(classify(&f), ErrorKind::Timeout);
    }

    #[test]
    fn missing_failures_are_unknown() {
        assert_eq!(classify(&RawFailure::default()), ErrorKind::Unknown);
        assert_eq!(classify(&None::<RawFailure>), ErrorKind::Unknown);
        assert_eq!(classify(&Value::Null), ErrorKind::Unknown);
        assert_eq!(classify(&json!({})), ErrorKind::Unknown);
        assert_eq!(classify(&json!("Network error")), ErrorKind::Unknown);
        assert_eq!(classify(&json!([404])), ErrorKind::Unknown);
    }

    #[test]
    fn json_failures_classify_like_raw() {
        assert_eq!(classify(&json!({ "status": 429 })), ErrorKind::RateLimit);
        assert_eq!(
            classify(&json!({ "message": "Failed to fetch" })),
            ErrorKind::NetworkError
        );
    }

    #[test]
    fn retryable_kinds() {
        assert!(is_retryable(&RawFailure::with_message("Network error")));
        assert!(is_retryable(&RawFailure::with_message("timeout")));
        assert!(is_retryable(&RawFailure::with_status(429)));
        assert!(is_retryable(&RawFailure::with_status(500)));
        assert!(!is_retryable(&RawFailure::with_status(401)));
        assert!(!is_retryable(&RawFailure::with_status(400)));
        assert!(!is_retryable(&RawFailure::default()));
    }
}
