//! `worthit classify` – classify one failure.

use anyhow::{Context, Result};
use worthit_core::errors::{classify, user_message, RawFailure};

pub fn run_classify(
    status: Option<u16>,
    message: Option<String>,
    json: Option<&str>,
    context: Option<&str>,
) -> Result<()> {
    let failure = match json {
        Some(text) => RawFailure::from_json_str(text).context("--json is not valid JSON")?,
        None => RawFailure { status, message },
    };
    let kind = classify(&failure);
    tracing::debug!(%kind, "classified {}", failure);

    println!("kind:      {}", kind);
    println!("retryable: {}", if kind.is_retryable() { "yes" } else { "no" });
    println!("message:   {}", user_message(&failure, context));
    Ok(())
}
