//! Retry loop: run an async operation until success or the policy says stop.

use super::classify::classify;
use super::failure::Failure;
use super::policy::{RetryDecision, RetryPolicy};
use std::future::Future;
use std::time::Duration;

/// Runs `op` until it succeeds or the retry policy says to stop.
/// On retryable failure, sleeps for the backoff duration then tries again.
/// The terminal failure is returned unchanged.
pub async fn with_retry<F, Fut, T, E>(policy: &RetryPolicy, op: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Failure,
{
    with_retry_notify(policy, op, |_, _| {}).await
}

/// Like [`with_retry`], calling `on_retry(retry_number, delay)` before each
/// backoff sleep. `retry_number` starts at 1.
pub async fn with_retry_notify<F, Fut, T, E, N>(
    policy: &RetryPolicy,
    mut op: F,
    mut on_retry: N,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Failure,
    N: FnMut(u32, Duration),
{
    let mut attempt = 1u32;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) => {
                let kind = classify(&e);
                match policy.decide(attempt, kind) {
                    RetryDecision::NoRetry => {
                        tracing::debug!(attempt, %kind, "giving up");
                        return Err(e);
                    }
                    RetryDecision::RetryAfter(d) => {
                        tracing::warn!(
                            attempt,
                            %kind,
                            delay_ms = millis(d),
                            "retryable failure, backing off"
                        );
                        on_retry(attempt, d);
                        tokio::time::sleep(d).await;
                        attempt += 1;
                    }
                }
            }
        }
    }
}

/// Whole milliseconds for log fields, saturating instead of truncating.
fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RawFailure;
    use std::cell::Cell;

    #[tokio::test(start_paused = true)]
    async fn success_needs_one_call() {
        let calls = Cell::new(0u32);
        let out: Result<&str, RawFailure> = with_retry(&RetryPolicy::default(), || {
            calls.set(calls.get() + 1);
            async { Ok("success") }
        })
        .await;
        assert_eq!(out.unwrap(), "success");
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn non_retryable_returns_original_failure() {
        let calls = Cell::new(0u32);
        let out: Result<(), RawFailure> = with_retry(&RetryPolicy::default(), || {
            calls.set(calls.get() + 1);
            async { Err(RawFailure::with_status(401)) }
        })
        .await;
        assert_eq!(out.unwrap_err(), RawFailure::with_status(401));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn millis_saturates_for_huge_delays() {
        assert_eq!(millis(Duration::from_millis(1500)), 1500);
        assert_eq!(millis(Duration::MAX), u64::MAX);
    }
}
