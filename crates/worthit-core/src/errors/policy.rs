use super::kind::ErrorKind;
use std::time::Duration;

/// Decision returned by the retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Do not retry this error.
    NoRetry,
    /// Retry after the given delay.
    RetryAfter(Duration),
}

/// Rejected policy parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolicyError {
    #[error("max_attempts must be at least 1")]
    ZeroAttempts,
    #[error("initial delay must be greater than zero")]
    ZeroDelay,
    #[error("max delay {max:?} must be longer than initial delay {initial:?}")]
    CapNotAboveInitial { initial: Duration, max: Duration },
}

/// Bounded exponential backoff: `initial_delay * 2^(attempt-1)`.
///
/// Uncapped unless `with_max_delay` is used, so delays strictly grow with
/// each attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the first).
    max_attempts: u32,
    /// Delay before the first retry.
    initial_delay: Duration,
    /// Optional upper bound on backoff delay.
    max_delay: Option<Duration>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_secs(1),
            max_delay: None,
        }
    }
}

impl RetryPolicy {
    /// Uncapped policy.
    pub fn new(max_attempts: u32, initial_delay: Duration) -> Result<Self, PolicyError> {
        if max_attempts == 0 {
            return Err(PolicyError::ZeroAttempts);
        }
        if initial_delay.is_zero() {
            return Err(PolicyError::ZeroDelay);
        }
        Ok(Self {
            max_attempts,
            initial_delay,
            max_delay: None,
        })
    }

    /// Cap later delays. Once reached, further retries wait the cap.
    /// A cap that would flatten the very first retries is rejected.
    pub fn with_max_delay(self, max_delay: Duration) -> Result<Self, PolicyError> {
        if self.max_attempts > 1 && max_delay <= self.initial_delay {
            return Err(PolicyError::CapNotAboveInitial {
                initial: self.initial_delay,
                max: max_delay,
            });
        }
        Ok(Self {
            max_delay: Some(max_delay),
            ..self
        })
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn initial_delay(&self) -> Duration {
        self.initial_delay
    }

    pub fn max_delay(&self) -> Option<Duration> {
        self.max_delay
    }

    /// Backoff before the retry that follows failed attempt `attempt` (1-based).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let shift = attempt.saturating_sub(1).min(31);
        let raw = self.initial_delay.saturating_mul(1u32 << shift);
        match self.max_delay {
            Some(cap) => raw.min(cap),
            None => raw,
        }
    }

    /// Whether to retry after failed attempt `attempt` (1-based) of `kind`.
    pub fn decide(&self, attempt: u32, kind: ErrorKind) -> RetryDecision {
        if attempt >= self.max_attempts || !kind.is_retryable() {
            return RetryDecision::NoRetry;
        }
        RetryDecision::RetryAfter(self.delay_for(attempt))
    }

    /// Delays that would be slept if every attempt failed with a retryable error.
    pub fn schedule(&self) -> Vec<Duration> {
        (1..self.max_attempts).map(|a| self.delay_for(a)).collect()
    }
}
