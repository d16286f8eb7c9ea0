//! `worthit policy` – print the effective backoff schedule.

use anyhow::Result;
use clap::Args;
use std::time::Duration;
use worthit_core::config::WorthitConfig;
use worthit_core::errors::RetryPolicy;

/// Command-line overrides on top of the `[retry]` config section.
#[derive(Debug, Clone, Default, Args)]
pub struct PolicyOverrides {
    /// Maximum attempts, including the first.
    #[arg(long, value_name = "N")]
    pub attempts: Option<u32>,
    /// Delay before the first retry, in milliseconds.
    #[arg(long, value_name = "MS")]
    pub initial_delay_ms: Option<u64>,
}

impl PolicyOverrides {
    /// Config policy with any overrides applied (and re-validated).
    pub fn resolve(&self, cfg: &WorthitConfig) -> Result<RetryPolicy> {
        let base = cfg.retry_policy()?;
        if self.attempts.is_none() && self.initial_delay_ms.is_none() {
            return Ok(base);
        }
        let attempts = self.attempts.unwrap_or(base.max_attempts());
        let initial = self
            .initial_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(base.initial_delay());
        let policy = RetryPolicy::new(attempts, initial)?;
        match base.max_delay() {
            Some(cap) => Ok(policy.with_max_delay(cap)?),
            None => Ok(policy),
        }
    }
}

pub fn run_policy(cfg: &WorthitConfig, overrides: &PolicyOverrides) -> Result<()> {
    let policy = overrides.resolve(cfg)?;
    println!("max attempts:  {}", policy.max_attempts());
    println!("initial delay: {} ms", policy.initial_delay().as_millis());
    match policy.max_delay() {
        Some(cap) => println!("max delay:     {} ms", cap.as_millis()),
        None => println!("max delay:     none"),
    }

    let schedule = policy.schedule();
    if schedule.is_empty() {
        println!("no retries");
        return Ok(());
    }
    for (i, d) in schedule.iter().enumerate() {
        println!("retry {:<3} after {} ms", i + 1, d.as_millis());
    }
    let total: Duration = schedule.iter().sum();
    println!("worst-case wait: {} ms", total.as_millis());
    Ok(())
}
