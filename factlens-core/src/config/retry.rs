use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Retry/backoff policy for outbound HTTP. Pure configuration passed into
/// each call site — no process-wide retry state exists anywhere.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Additional attempts after the first.
    pub max_retries: u32,
    /// Delay before the first retry (milliseconds).
    pub base_delay_ms: u64,
    /// Upper bound on any single backoff delay (milliseconds).
    pub max_delay_ms: u64,
}

impl RetryPolicy {
    /// Policy for search-engine calls. Search endpoints intermittently
    /// rate-limit, so allow two retries with a generous cap.
    pub fn for_search() -> Self {
        Self {
            max_retries: defaults::DEFAULT_SEARCH_MAX_RETRIES,
            base_delay_ms: defaults::DEFAULT_RETRY_BASE_DELAY_MS,
            max_delay_ms: defaults::DEFAULT_SEARCH_MAX_DELAY_MS,
        }
    }

    /// Policy for candidate-page fetches: one retry, fail fast — a dead page
    /// is a non-match, not a reason to stall the verification.
    pub fn for_page_fetch() -> Self {
        Self {
            max_retries: defaults::DEFAULT_FETCH_MAX_RETRIES,
            base_delay_ms: defaults::DEFAULT_RETRY_BASE_DELAY_MS,
            max_delay_ms: defaults::DEFAULT_FETCH_MAX_DELAY_MS,
        }
    }

    /// Exponential backoff delay before retry `attempt` (1-based), capped at
    /// `max_delay_ms`.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let shift = attempt.saturating_sub(1).min(20);
        let delay = self.base_delay_ms.saturating_mul(1u64 << shift);
        Duration::from_millis(delay.min(self.max_delay_ms))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::for_search()
    }
}
