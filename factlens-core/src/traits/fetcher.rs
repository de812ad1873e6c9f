use async_trait::async_trait;

use crate::errors::FetchError;

/// Fetches candidate page bodies. Implementations bound body size and wall
/// time; caller-initiated cancellation surfaces as a timeout error.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch `url` and return the (possibly truncated) response body.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}
