use std::time::Duration;

use lexi_types::{Degraded, LookupOutcome};

use crate::preprocess::normalize_query;
use crate::resolver::Lookup;

pub const DEFAULT_MAX_RETRIES: u32 = 2;
pub const DEFAULT_BACKOFF: Duration = Duration::from_millis(1000);

/// Bounded retry loop around a [`Lookup`].
///
/// Failed attempts are retried after a fixed backoff. `NotFound` is final
/// and returned straight away. When every attempt fails the caller gets a
/// `Degraded` outcome instead of an error.
pub struct RetrySupervisor<L> {
    inner: L,
    max_retries: u32,
    backoff: Duration,
}

impl<L: Lookup> RetrySupervisor<L> {
    pub fn new(inner: L) -> Self {
        Self {
            inner,
            max_retries: DEFAULT_MAX_RETRIES,
            backoff: DEFAULT_BACKOFF,
        }
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    pub fn inner(&self) -> &L {
        &self.inner
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Resolve with the configured retry budget
    pub async fn resolve_with_retry(&self, query: &str) -> LookupOutcome {
        self.resolve_with_retries(query, self.max_retries).await
    }

    /// One initial attempt plus up to `max_retries` retries
    pub async fn resolve_with_retries(&self, query: &str, max_retries: u32) -> LookupOutcome {
        let mut attempt = 0;

        loop {
            match self.inner.lookup(query).await {
                Ok(LookupOutcome::NotFound) => {
                    tracing::debug!(attempt = attempt + 1, "'{}' not found, not retrying", query);
                    return LookupOutcome::NotFound;
                }
                Ok(outcome) => return outcome,
                Err(err) if attempt >= max_retries => {
                    tracing::error!(
                        attempts = attempt + 1,
                        "All dictionary attempts failed for '{}': {}",
                        query,
                        err
                    );
                    return LookupOutcome::Degraded(Degraded::exhausted(
                        normalize_query(query),
                        query,
                    ));
                }
                Err(err) => {
                    tracing::warn!(
                        attempt = attempt + 1,
                        "Lookup of '{}' failed, retrying in {:?}: {}",
                        query,
                        self.backoff,
                        err
                    );
                    attempt += 1;
                    if !self.backoff.is_zero() {
                        tokio::time::sleep(self.backoff).await;
                    }
                }
            }
        }
    }
}
