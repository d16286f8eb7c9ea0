//! `worthit simulate` – drive a scripted flaky operation through the retry loop.

use anyhow::Result;
use std::cell::Cell;
use worthit_core::config::WorthitConfig;
use worthit_core::errors::{user_message, with_retry_notify, RawFailure};

use super::policy::PolicyOverrides;

/// Failure each simulated attempt reports; a bare network error by default.
pub(crate) fn simulated_failure(status: Option<u16>, message: Option<String>) -> RawFailure {
    match (status, message) {
        (None, None) => RawFailure::with_message("Network error"),
        (status, message) => RawFailure { status, message },
    }
}

pub async fn run_simulate(
    cfg: &WorthitConfig,
    overrides: &PolicyOverrides,
    failures: u32,
    status: Option<u16>,
    message: Option<String>,
    context: Option<&str>,
) -> Result<()> {
    let policy = overrides.resolve(cfg)?;
    let failure = simulated_failure(status, message);
    let calls = Cell::new(0u32);

    let outcome = with_retry_notify(
        &policy,
        || {
            let n = calls.get() + 1;
            calls.set(n);
            let result = if n <= failures {
                Err(failure.clone())
            } else {
                Ok(n)
            };
            async move { result }
        },
        |retry, delay| println!("attempt failed, retry {} in {} ms", retry, delay.as_millis()),
    )
    .await;

    match outcome {
        Ok(n) => {
            println!("succeeded on attempt {}", n);
            Ok(())
        }
        Err(e) => {
            println!("gave up after {} attempt(s): {}", calls.get(), e);
            println!("user sees: {}", user_message(&e, context));
            Err(anyhow::Error::new(e).context("simulated operation failed"))
        }
    }
}
