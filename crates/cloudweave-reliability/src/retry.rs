//! Exponential backoff with full jitter (spec §4.2).
//!
//! Delay for attempt `n` is `min(max_delay, base_delay * 2^(n-1))`,
//! multiplied by a random factor in `[0,1]` when jitter is enabled.

use std::future::Future;
use std::time::Duration;

use cloudweave_core::CloudError;
use tracing::{info, warn};

/// Tuning knobs for [`retry`]. Defaults match spec §4.2.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
    pub jitter: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(10),
            jitter: true,
        }
    }
}

impl RetryPolicy {
    fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let exp = self.base_delay.saturating_mul(1u32.checked_shl(attempt - 1).unwrap_or(u32::MAX));
        let capped = exp.min(self.max_delay);
        if !self.jitter {
            return capped;
        }
        let factor: f64 = rand::random::<f64>();
        Duration::from_secs_f64(capped.as_secs_f64() * factor)
    }
}

/// The default retryable classification (spec §4.2): `ServiceUnavailable`
/// and `Timeout` retry; everything else does not.
pub fn default_retryable(error: &CloudError) -> bool {
    error.is_retryable()
}

/// Run `op` under the retry loop described by `policy`, using `retryable` to
/// classify each failure. On final failure, returns the *last* error with
/// the attempt count attached — never the first.
pub async fn retry<T, F, Fut>(
    op: F,
    policy: &RetryPolicy,
    retryable: impl Fn(&CloudError) -> bool,
) -> Result<T, CloudError>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, CloudError>>,
{
    let mut attempt = 0u32;
    loop {
        attempt += 1;
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if attempt >= policy.max_attempts || !retryable(&err) {
                    warn!(attempts = attempt, kind = %err.kind, "retry exhausted or non-retryable error");
                    return Err(err.with_attempts(attempt));
                }
                let delay = policy.delay_for_attempt(attempt);
                info!(attempt, ?delay, kind = %err.kind, "retrying after classified error");
                tokio::time::sleep(delay).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudweave_core::ErrorKind;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test]
    async fn retries_until_success() {
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy {
            max_attempts: 5,
            base_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(5),
            jitter: false,
        };
        let result = retry(
            || async {
                let n = calls.fetch_add(1, Ordering::SeqCst);
                if n < 2 {
                    Err(CloudError::service_unavailable("still warming up"))
                } else {
                    Ok(42)
                }
            },
            &policy,
            default_retryable,
        )
        .await;
        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn non_retryable_error_attempts_exactly_once() {
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy::default();
        let result = retry(
            || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Err::<(), _>(CloudError::validation("bad shape"))
            },
            &policy,
            default_retryable,
        )
        .await;
        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn exhausting_retries_returns_last_error_with_attempt_count() {
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy {
            max_attempts: 3,
            base_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(2),
            jitter: false,
        };
        let result = retry(
            || async {
                let n = calls.fetch_add(1, Ordering::SeqCst);
                Err::<(), _>(CloudError::timeout(format!("attempt {n}")))
            },
            &policy,
            default_retryable,
        )
        .await;
        let err = result.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Timeout);
        assert_eq!(err.message, "attempt 2");
        assert_eq!(err.context.get("attempt").unwrap(), "3");
    }
}
