//! # factlens-search
//!
//! Web-facing half of the verification system: resilient HTTP transport,
//! the DuckDuckGo plain-HTML search client, the candidate-page fetcher,
//! and the trust-based result prioritizer.

pub mod duckduckgo;
pub mod fetcher;
pub mod prioritizer;
pub mod transport;

pub use duckduckgo::DuckDuckGoClient;
pub use fetcher::HttpPageFetcher;
pub use prioritizer::{host_of, prioritize};
pub use transport::HttpClient;
