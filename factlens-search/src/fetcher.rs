//! Candidate-page fetcher over the shared transport.

use async_trait::async_trait;

use factlens_core::config::VerifyConfig;
use factlens_core::errors::FetchError;
use factlens_core::traits::PageFetcher;

use crate::transport::HttpClient;

/// Fetches candidate pages with the page-fetch retry policy and an explicit
/// byte cap on bodies.
pub struct HttpPageFetcher {
    http: HttpClient,
    max_bytes: usize,
}

impl HttpPageFetcher {
    pub fn new(config: &VerifyConfig) -> Result<Self, FetchError> {
        Ok(Self {
            http: HttpClient::new(
                &config.user_agent,
                config.fetch_timeout_secs,
                config.fetch_retry,
            )?,
            max_bytes: config.max_page_bytes,
        })
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.http.get_text(url, self.max_bytes).await
    }
}
