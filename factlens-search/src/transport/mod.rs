//! Resilient HTTP transport: bounded retries with exponential backoff,
//! explicit timeouts, byte-capped body reads.

use std::time::Duration;

use factlens_core::config::RetryPolicy;
use factlens_core::errors::FetchError;

/// Thin reqwest wrapper carrying the User-Agent, timeout, and retry policy
/// for one class of outbound call. Search and page fetches get separate
/// instances with their own policies.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    retry: RetryPolicy,
    timeout_secs: u64,
}

impl HttpClient {
    pub fn new(
        user_agent: &str,
        timeout_secs: u64,
        retry: RetryPolicy,
    ) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| FetchError::ClientBuild {
                reason: e.to_string(),
            })?;
        Ok(Self {
            client,
            retry,
            timeout_secs,
        })
    }

    /// GET `url`, retrying per the policy, and return at most `max_bytes`
    /// of the body decoded as UTF-8 (lossy).
    pub async fn get_text(&self, url: &str, max_bytes: usize) -> Result<String, FetchError> {
        let mut attempt = 0u32;
        loop {
            match self.try_get(url, max_bytes).await {
                Ok(body) => return Ok(body),
                Err(e) if attempt < self.retry.max_retries && retryable(&e) => {
                    attempt += 1;
                    let delay = self.retry.delay_for(attempt);
                    tracing::debug!("transport: retry {attempt} for {url} in {delay:?}: {e}");
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn try_get(&self, url: &str, max_bytes: usize) -> Result<String, FetchError> {
        let mut response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
            });
        }

        // Stream chunks and stop at the cap rather than buffering the
        // whole body first.
        let mut body: Vec<u8> = Vec::with_capacity(max_bytes.min(64 * 1024));
        loop {
            let chunk = match response.chunk().await {
                Ok(Some(chunk)) => chunk,
                Ok(None) => break,
                Err(e) if e.is_timeout() => {
                    return Err(FetchError::Timeout {
                        seconds: self.timeout_secs,
                    })
                }
                Err(e) => {
                    return Err(FetchError::Body {
                        reason: e.to_string(),
                    })
                }
            };
            let remaining = max_bytes - body.len();
            if chunk.len() >= remaining {
                body.extend_from_slice(&chunk[..remaining]);
                break;
            }
            body.extend_from_slice(&chunk);
        }

        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    /// Map a reqwest send error onto the fetch taxonomy. Caller-side
    /// cancellation surfaces as a timeout and is handled identically.
    fn classify(&self, e: reqwest::Error) -> FetchError {
        if e.is_timeout() {
            FetchError::Timeout {
                seconds: self.timeout_secs,
            }
        } else {
            FetchError::Network {
                reason: e.to_string(),
            }
        }
    }
}

/// Timeouts, network failures, rate limits, and server errors are worth
/// another attempt; other client errors are not — a 404 stays a 404.
fn retryable(e: &FetchError) -> bool {
    match e {
        FetchError::Timeout { .. } | FetchError::Network { .. } => true,
        FetchError::Http { status } => *status == 429 || *status >= 500,
        FetchError::Body { .. } | FetchError::ClientBuild { .. } => false,
    }
}
