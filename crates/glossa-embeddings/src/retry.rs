//! Retry-with-backoff combinator for fallible async operations.
//!
//! Shared by the single-text and batch paths. Only errors for which
//! `GlossaError::is_retryable` holds are retried; anything else returns at once.

use std::future::Future;
use std::time::Duration;

use glossa_core::config::{BackoffStrategy, EmbeddingConfig};
use glossa_core::errors::GlossaResult;
use tracing::{debug, warn};

/// Bounded repetition with a pause between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay: Duration,
    max_delay: Duration,
    strategy: BackoffStrategy,
}

impl RetryPolicy {
    /// `max_attempts` counts every attempt, the first included. Zero is treated as one.
    pub fn new(max_attempts: u32, base_delay: Duration, strategy: BackoffStrategy) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay,
            max_delay: Duration::MAX,
            strategy,
        }
    }

    pub fn from_config(config: &EmbeddingConfig) -> Self {
        Self::new(
            config.max_retries,
            Duration::from_millis(config.retry_delay_ms),
            config.backoff,
        )
        .with_max_delay(Duration::from_millis(config.max_retry_delay_ms))
    }

    pub fn with_max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = max_delay;
        self
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Pause after the failed attempt with 0-based index `attempt`.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = match self.strategy {
            BackoffStrategy::Linear => u64::from(attempt) + 1,
            BackoffStrategy::Exponential => 1u64.checked_shl(attempt).unwrap_or(u64::MAX),
        };
        let base_ms = u64::try_from(self.base_delay.as_millis()).unwrap_or(u64::MAX);
        Duration::from_millis(base_ms.saturating_mul(factor)).min(self.max_delay)
    }

    /// Run `op` until it succeeds, fails with a non-retryable error, or the
    /// attempt budget is spent. `op` receives the 0-based attempt index.
    /// No pause follows the final attempt. Returns the last error on exhaustion.
    pub async fn run<T, F, Fut>(&self, operation: &str, mut op: F) -> GlossaResult<T>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = GlossaResult<T>>,
    {
        let mut attempt = 0u32;
        loop {
            match op(attempt).await {
                Ok(value) => {
                    if attempt > 0 {
                        debug!(operation, attempts = attempt + 1, "succeeded after retry");
                    }
                    return Ok(value);
                }
                Err(e) if !e.is_retryable() => {
                    warn!(operation, error = %e, "non-retryable failure");
                    return Err(e);
                }
                Err(e) if attempt + 1 >= self.max_attempts => {
                    warn!(
                        operation,
                        attempts = self.max_attempts,
                        error = %e,
                        "all attempts exhausted"
                    );
                    return Err(e);
                }
                Err(e) => {
                    let delay = self.delay_for(attempt);
                    warn!(
                        operation,
                        attempt = attempt + 1,
                        max_attempts = self.max_attempts,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "attempt failed, backing off"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }
}
