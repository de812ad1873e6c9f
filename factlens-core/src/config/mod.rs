//! Engine configuration. Everything tunable — match thresholds, decay
//! constants, retry policies, result caps — lives here, loadable from TOML
//! and validated at engine construction.

pub mod decay_config;
pub mod defaults;
pub mod retry;

pub use decay_config::DecayConfig;
pub use retry::RetryPolicy;

use serde::{Deserialize, Serialize};

use crate::errors::{VerifyError, VerifyResult};

/// Top-level verification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifyConfig {
    /// Destination name appended to queries that don't already mention it.
    pub destination: String,
    /// Search results requested per verification.
    pub max_results: usize,
    /// Candidate sources inspected per verification.
    pub max_sources: usize,
    /// Keywords used to build the search query.
    pub query_keywords: usize,
    /// Tier-1 domains listed in a `site:` hint clause.
    pub site_hint_domains: usize,
    /// Leading keywords compared against a search snippet in the cheap check.
    pub snippet_keywords: usize,
    /// Fraction of snippet keywords that must appear to match without a fetch.
    pub snippet_match_threshold: f64,
    /// Fraction of all keywords that must appear in fetched page text.
    pub page_match_threshold: f64,
    /// Fetched bodies are truncated to this many bytes.
    pub max_page_bytes: usize,
    /// Per-page fetch timeout (seconds).
    pub fetch_timeout_secs: u64,
    /// Search request timeout (seconds).
    pub search_timeout_secs: u64,
    /// Bot User-Agent sent on every outbound request. Identifies the bot
    /// and carries a contact URL.
    pub user_agent: String,
    pub search_retry: RetryPolicy,
    pub fetch_retry: RetryPolicy,
    pub decay: DecayConfig,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            destination: defaults::DEFAULT_DESTINATION.to_string(),
            max_results: defaults::DEFAULT_MAX_RESULTS,
            max_sources: defaults::DEFAULT_MAX_SOURCES,
            query_keywords: defaults::DEFAULT_QUERY_KEYWORDS,
            site_hint_domains: defaults::DEFAULT_SITE_HINT_DOMAINS,
            snippet_keywords: defaults::DEFAULT_SNIPPET_KEYWORDS,
            snippet_match_threshold: defaults::DEFAULT_SNIPPET_MATCH_THRESHOLD,
            page_match_threshold: defaults::DEFAULT_PAGE_MATCH_THRESHOLD,
            max_page_bytes: defaults::DEFAULT_MAX_PAGE_BYTES,
            fetch_timeout_secs: defaults::DEFAULT_FETCH_TIMEOUT_SECS,
            search_timeout_secs: defaults::DEFAULT_SEARCH_TIMEOUT_SECS,
            user_agent: defaults::DEFAULT_USER_AGENT.to_string(),
            search_retry: RetryPolicy::for_search(),
            fetch_retry: RetryPolicy::for_page_fetch(),
            decay: DecayConfig::default(),
        }
    }
}

impl VerifyConfig {
    /// Parse and validate a TOML config document.
    pub fn from_toml(text: &str) -> VerifyResult<Self> {
        let config: Self = toml::from_str(text).map_err(|e| VerifyError::Config {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the engine cannot run with.
    pub fn validate(&self) -> VerifyResult<()> {
        fn invalid(reason: impl Into<String>) -> VerifyError {
            VerifyError::Config {
                reason: reason.into(),
            }
        }

        if self.destination.trim().is_empty() {
            return Err(invalid("destination must not be empty"));
        }
        if self.user_agent.trim().is_empty() {
            return Err(invalid("user_agent must not be empty"));
        }
        if self.max_results == 0 || self.max_sources == 0 {
            return Err(invalid("max_results and max_sources must be at least 1"));
        }
        if self.query_keywords == 0 || self.snippet_keywords == 0 {
            return Err(invalid(
                "query_keywords and snippet_keywords must be at least 1",
            ));
        }
        if self.max_page_bytes == 0 {
            return Err(invalid("max_page_bytes must be nonzero"));
        }
        for (name, value) in [
            ("snippet_match_threshold", self.snippet_match_threshold),
            ("page_match_threshold", self.page_match_threshold),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(invalid(format!("{name} must be in (0, 1], got {value}")));
            }
        }
        Ok(())
    }
}
