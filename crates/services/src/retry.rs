use std::future::Future;
use std::time::Duration;

use crate::error::ApiError;

/// Bounded retry with a fixed pause between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Extra attempts after the first one.
    pub retries: u32,
    pub delay: Duration,
}

impl RetryPolicy {
    pub const DEFAULT_RETRIES: u32 = 3;
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

    #[must_use]
    pub fn new(retries: u32, delay: Duration) -> Self {
        Self { retries, delay }
    }

    /// Single attempt, no waiting.
    #[must_use]
    pub fn none() -> Self {
        Self::new(0, Duration::ZERO)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RETRIES, Self::DEFAULT_DELAY)
    }
}

/// Run `op` until it succeeds, fails with a non-retryable error, or the
/// policy's retries are spent.
///
/// Every retry is logged with the URL and the attempts left.
///
/// # Errors
///
/// Returns the last `ApiError` produced by `op`.
pub async fn fetch_with_retry<T, F, Fut>(
    url: &str,
    policy: RetryPolicy,
    mut op: F,
) -> Result<T, ApiError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let mut retries_left = policy.retries;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) if err.is_retryable() && retries_left > 0 => {
                retries_left -= 1;
                tracing::warn!(
                    url,
                    attempts_left = retries_left,
                    error = %err,
                    "request failed; retrying"
                );
                tokio::time::sleep(policy.delay).await;
            }
            Err(err) => return Err(err),
        }
    }
}
