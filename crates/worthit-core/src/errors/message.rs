//! Friendly, user-facing text for classified failures.

use super::classify::classify;
use super::failure::Failure;
use super::kind::ErrorKind;

/// User-facing message for a failure, optionally naming what the user was
/// doing (e.g. `Some("voting")` gives "... while voting ...").
///
/// Always returns a non-empty sentence.
pub fn user_message<F: Failure + ?Sized>(failure: &F, context: Option<&str>) -> String {
    user_message_for_kind(classify(failure), context)
}

/// Same as [`user_message`] for an already-classified kind.
pub fn user_message_for_kind(kind: ErrorKind, context: Option<&str>) -> String {
    let during = match context.map(str::trim) {
        Some(c) if !c.is_empty() => format!(" while {}", c),
        _ => String::new(),
    };
    match kind {
        ErrorKind::NetworkError => format!(
            "We couldn't connect{during}. Please check your internet connection and try again."
        ),
        ErrorKind::Timeout => {
            format!("The request timed out{during}. Please try again.")
        }
        ErrorKind::AuthError => format!(
            "You're not logged in. Please sign in and try again{during}."
        ),
        ErrorKind::Unauthorized => {
            format!("You don't have permission to do that{during}.")
        }
        ErrorKind::NotFound => {
            format!("We couldn't find what you were looking for{during}.")
        }
        ErrorKind::Conflict => {
            format!("That already exists{during}. Refresh to see the latest.")
        }
        ErrorKind::ValidationError => {
            format!("Some of the information was invalid{during}. Please check and try again.")
        }
        ErrorKind::RateLimit => {
            format!("Too many requests{during}. Please wait a moment and try again.")
        }
        ErrorKind::ServerError => {
            format!("Something went wrong on our end{during}. Please try again shortly.")
        }
        ErrorKind::Unknown => {
            format!("Something went wrong{during}. Please try again.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RawFailure;

    #[test]
    fn network_mentions_connection() {
        let m = user_message(&RawFailure::with_message("Network error"), None);
        assert!(m.contains("internet connection"), "{m}");
    }

    #[test]
    fn timeout_and_auth_wording() {
        let m = user_message(&RawFailure::with_message("timeout"), None);
        assert!(m.contains("timed out"), "{m}");
        let m = user_message(&RawFailure::with_status(401), None);
        assert!(m.contains("not logged in"), "{m}");
    }

    #[test]
    fn context_clause_is_included() {
        let m = user_message(&RawFailure::with_message("Network error"), Some("voting"));
        assert!(m.contains("while voting"), "{m}");
        for kind in ErrorKind::ALL {
            let m = user_message_for_kind(kind, Some("saving a dish"));
            assert!(m.contains("while saving a dish"), "{kind}: {m}");
        }
    }

    #[test]
    fn blank_context_is_ignored() {
        let m = user_message_for_kind(ErrorKind::Timeout, Some("   "));
        assert!(!m.contains("while"), "{m}");
        assert_eq!(m, user_message_for_kind(ErrorKind::Timeout, None));
    }

    #[test]
    fn every_kind_has_text() {
        for kind in ErrorKind::ALL {
            assert!(!user_message_for_kind(kind, None).trim().is_empty());
        }
        let m = user_message(&RawFailure::with_message("Unknown error"), None);
        assert!(!m.is_empty());
        assert!(!user_message(&None::<RawFailure>, None).is_empty());
    }
}
