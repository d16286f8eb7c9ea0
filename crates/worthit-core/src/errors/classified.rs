use super::classify::classify;
use super::failure::{Failure, RawFailure};
use super::kind::ErrorKind;
use super::message::user_message_for_kind;

/// A backend failure tagged with its classification.
///
/// Data-access code returns this so callers can branch on `kind()` without
/// re-inspecting the payload; the original fields stay available. The kind
/// is always computed from the failure, never supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", display_text(.kind, .failure))]
pub struct ClassifiedError {
    kind: ErrorKind,
    failure: RawFailure,
}

fn display_text(kind: &ErrorKind, failure: &RawFailure) -> String {
    match failure.message.as_deref() {
        Some(m) if !m.is_empty() => m.to_owned(),
        _ => kind.to_string(),
    }
}

impl ClassifiedError {
    pub fn new<F: Failure + ?Sized>(failure: &F) -> Self {
        Self {
            kind: classify(failure),
            failure: RawFailure::from_failure(failure),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn failure(&self) -> &RawFailure {
        &self.failure
    }

    pub fn into_failure(self) -> RawFailure {
        self.failure
    }

    pub fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }

    pub fn user_message(&self, context: Option<&str>) -> String {
        user_message_for_kind(self.kind, context)
    }
}

impl From<RawFailure> for ClassifiedError {
    fn from(failure: RawFailure) -> Self {
        Self {
            kind: classify(&failure),
            failure,
        }
    }
}

impl Failure for ClassifiedError {
    fn status(&self) -> Option<u16> {
        self.failure.status
    }

    fn message(&self) -> Option<&str> {
        self.failure.message.as_deref()
    }
}
