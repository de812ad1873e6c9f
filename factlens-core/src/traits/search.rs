use async_trait::async_trait;

use crate::models::SearchHit;

/// A web-search backend. Implementations own their scraping or API
/// strategy; swapping one out must never touch matching or scoring.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Run `query` and return up to `limit` parsed results, in engine
    /// order. Failures are logged by the implementation and surface as an
    /// empty list — callers treat "no results" as data, not as an error.
    async fn search(&self, query: &str, limit: usize) -> Vec<SearchHit>;
}
