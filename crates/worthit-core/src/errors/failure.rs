//! Loosely-shaped failures as reported by the transport layer.

use serde_json::Value;
use std::fmt;

/// Read access to the two fields the classifier looks at.
///
/// Either field may be absent; an implementor with neither classifies as
/// `ErrorKind::Unknown`.
pub trait Failure {
    /// Numeric HTTP-like status code, if the failure carries one.
    fn status(&self) -> Option<u16>;
    /// Human-readable message, if the failure carries one.
    fn message(&self) -> Option<&str>;
}

/// Unclassified failure: optional status code and optional message.
///
/// `RawFailure::default()` stands in for a missing (null) failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFailure {
    pub status: Option<u16>,
    pub message: Option<String>,
}

impl RawFailure {
    pub fn with_status(status: u16) -> Self {
        Self {
            status: Some(status),
            message: None,
        }
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: Some(message.into()),
        }
    }

    /// Failure carrying both a status code and a message.
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: Some(message.into()),
        }
    }

    /// Build from an arbitrary JSON value. Never fails: null, non-objects and
    /// objects with missing or mistyped fields give an empty failure.
    pub fn from_json(value: &Value) -> Self {
        Self {
            status: json_status(value),
            message: json_message(value).map(str::to_owned),
        }
    }

    /// Parse JSON text, then convert tolerantly. Only malformed JSON is an error.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Self::from_json(&value))
    }

    /// Copy the fields out of any other failure shape.
    pub fn from_failure<F: Failure + ?Sized>(failure: &F) -> Self {
        Self {
            status: failure.status(),
            message: failure.message().map(str::to_owned),
        }
    }
}

impl Failure for RawFailure {
    fn status(&self) -> Option<u16> {
        self.status
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for RawFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.status, self.message.as_deref()) {
            (Some(code), Some(msg)) => write!(f, "HTTP {}: {}", code, msg),
            (Some(code), None) => write!(f, "HTTP {}", code),
            (None, Some(msg)) => f.write_str(msg),
            (None, None) => f.write_str("unknown failure"),
        }
    }
}

impl std::error::Error for RawFailure {}

/// Accepts an integer in u16 range or a string holding one.
fn json_status(value: &Value) -> Option<u16> {
    match value.get("status")? {
        Value::Number(n) => n.as_u64().and_then(|n| u16::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn json_message(value: &Value) -> Option<&str> {
    value.get("message").and_then(Value::as_str)
}

impl Failure for Value {
    fn status(&self) -> Option<u16> {
        json_status(self)
    }

    fn message(&self) -> Option<&str> {
        json_message(self)
    }
}

impl<F: Failure> Failure for Option<F> {
    fn status(&self) -> Option<u16> {
        self.as_ref().and_then(Failure::status)
    }

    fn message(&self) -> Option<&str> {
        self.as_ref().and_then(Failure::message)
    }
}

impl<F: Failure + ?Sized> Failure for &F {
    fn status(&self) -> Option<u16> {
        (**self).status()
    }

    fn message(&self) -> Option<&str> {
        (**self).message()
    }
}

impl<F: Failure + ?Sized> Failure for Box<F> {
    fn status(&self) -> Option<u16> {
        (**self).status()
    }

    fn message(&self) -> Option<&str> {
        (**self).message()
    }
}
