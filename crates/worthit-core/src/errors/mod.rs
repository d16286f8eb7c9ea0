//! Error classification and retry policy.
//!
//! Failures coming back from the data layer are loosely shaped (a status
//! code, a message, both or neither). This module assigns each one an
//! `ErrorKind`, turns it into text fit for the user, and drives a bounded
//! exponential-backoff retry loop around async operations.

mod classified;
mod classify;
mod failure;
mod kind;
mod message;
mod policy;
mod run;

pub use classified::ClassifiedError;
pub use classify::{classify, classify_message, classify_status, is_retryable};
pub use failure::{Failure, RawFailure};
pub use kind::ErrorKind;
pub use message::{user_message, user_message_for_kind};
pub use policy::{PolicyError, RetryDecision, RetryPolicy};
pub use run::{with_retry, with_retry_notify};
