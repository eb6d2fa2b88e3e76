//! Retry wrapper for lookup providers.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};

use super::UserLookup;
use crate::{Error, Result};

/// Wraps a lookup provider with exponential-backoff retries.
///
/// Only errors reporting [`Error::is_retryable`] are retried.
pub struct RetryLookup {
    inner: Arc<dyn UserLookup>,
    max_attempts: u32,
    initial_delay: Duration,
    max_delay: Duration,
}

impl RetryLookup {
    /// Creates a new retry wrapper with default settings.
    ///
    /// Default settings:
    /// - Max attempts: 3
    /// - Initial delay: 100 milliseconds
    /// - Max delay: 2 seconds
    pub fn new(lookup: Arc<dyn UserLookup>) -> Self {
        Self {
            inner: lookup,
            max_attempts: 3,
            initial_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(2),
        }
    }

    /// Sets the maximum number of attempts.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Sets the initial delay between retries.
    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Sets the maximum delay between retries.
    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    fn should_retry(error: &Error) -> bool {
        error.is_retryable()
    }
}

#[async_trait]
impl UserLookup for RetryLookup {
    async fn lookup_user_name(&self, id: &str) -> Result<String> {
        // backon counts retries, not attempts.
        let backoff = ExponentialBuilder::default()
            .with_min_delay(self.initial_delay)
            .with_max_delay(self.max_delay)
            .with_max_times(self.max_attempts.saturating_sub(1) as usize);

        let lookup = self.inner.clone();

        (|| async { lookup.lookup_user_name(id).await })
            .retry(backoff)
            .when(Self::should_retry)
            .notify(|err: &Error, dur: Duration| {
                log::debug!("retrying user lookup for {id} in {dur:?}: {err}");
            })
            .await
    }
}
