use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification label assigned to a failure.
///
/// The set is closed; `Unknown` is the fallback when no rule matches, so
/// every failure maps to exactly one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// Connection could not be made or dropped mid-request.
    NetworkError,
    /// Request took too long.
    Timeout,
    /// Caller is not logged in (401).
    AuthError,
    /// Caller is logged in but not allowed (403).
    Unauthorized,
    /// Resource does not exist (404).
    NotFound,
    /// Resource already exists or was modified concurrently (409).
    Conflict,
    /// Request was rejected as malformed (400).
    ValidationError,
    /// Server asked us to slow down (429).
    RateLimit,
    /// Any 5xx response.
    ServerError,
    /// Nothing matched.
    Unknown,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 10] = [
        ErrorKind::NetworkError,
        ErrorKind::Timeout,
        ErrorKind::AuthError,
        ErrorKind::Unauthorized,
        ErrorKind::NotFound,
        ErrorKind::Conflict,
        ErrorKind::ValidationError,
        ErrorKind::RateLimit,
        ErrorKind::ServerError,
        ErrorKind::Unknown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::NetworkError => "NETWORK_ERROR",
            ErrorKind::Timeout => "TIMEOUT",
            ErrorKind::AuthError => "AUTH_ERROR",
            ErrorKind::Unauthorized => "UNAUTHORIZED",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::Conflict => "CONFLICT",
            ErrorKind::ValidationError => "VALIDATION_ERROR",
            ErrorKind::RateLimit => "RATE_LIMIT",
            ErrorKind::ServerError => "SERVER_ERROR",
            ErrorKind::Unknown => "UNKNOWN",
        }
    }

    /// Whether another attempt could plausibly succeed.
    pub fn is_retryable(self) -> bool {
        matches!(
            self,
            ErrorKind::NetworkError
                | ErrorKind::Timeout
                | ErrorKind::RateLimit
                | ErrorKind::ServerError
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_set_is_exact() {
        let retryable: Vec<ErrorKind> = ErrorKind::ALL
            .into_iter()
            .filter(|k| k.is_retryable())
            .collect();
        assert_eq!(
            retryable,
            vec![
                ErrorKind::NetworkError,
                ErrorKind::Timeout,
                ErrorKind::RateLimit,
                ErrorKind::ServerError,
            ]
        );
        assert!(!ErrorKind::Unknown.is_retryable());
    }

    #[test]
    fn serde_uses_screaming_labels() {
        for kind in ErrorKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
            let back: ErrorKind = serde_json::from_str(&json).unwrap();
            assert_eq!(back, kind);
        }
    }
}
