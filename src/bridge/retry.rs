//! Bounded-attempt retry with exponential backoff
//!
//! One helper wraps every remote call the bridge makes. An operation is
//! attempted at most `max_attempts` times; between attempts the thread
//! sleeps for the error's suggested delay or an exponential fallback.

use std::time::Duration;

use super::error::{BridgeError, Result};
use crate::cli::logging::{warn, LogLevel};

/// Retry bounds shared by every remote operation in a run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum total attempts (first try included)
    pub max_attempts: u32,
    /// Backoff base; attempt n sleeps `base * 2^(n-1)` absent a hint
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { max_attempts: 3, base_delay: Duration::from_millis(500) }
    }
}

impl RetryPolicy {
    /// Delay to sleep after a failed attempt (1-based)
    #[must_use]
    pub fn backoff_delay(&self, attempt: u32, err: &BridgeError) -> Duration {
        err.retry_after()
            .unwrap_or_else(|| self.base_delay * 2u32.saturating_pow(attempt.saturating_sub(1)))
    }
}

/// Run `f` until it succeeds, it fails non-retryably, or attempts run out.
///
/// Every failed attempt is logged with the operation name, the attempt
/// number, and the underlying error. The final error is returned to the
/// caller, which decides whether the run continues with partial results.
pub fn with_retries<T>(
    policy: RetryPolicy,
    operation: &str,
    level: LogLevel,
    mut f: impl FnMut() -> Result<T>,
) -> Result<T> {
    let mut attempt = 1;
    loop {
        match f() {
            Ok(value) => return Ok(value),
            Err(e) if e.is_retryable() && attempt < policy.max_attempts => {
                warn(
                    level,
                    &format!(
                        "{operation}: attempt {attempt}/{} failed: {e}; retrying",
                        policy.max_attempts
                    ),
                );
                std::thread::sleep(policy.backoff_delay(attempt, &e));
                attempt += 1;
            }
            Err(e) => {
                warn(
                    level,
                    &format!("{operation}: giving up after attempt {attempt}: {e}"),
                );
                return Err(e);
            }
        }
    }
}
