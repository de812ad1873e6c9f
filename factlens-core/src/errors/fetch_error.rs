/// Page and transport fetch errors. Caller-initiated cancellation surfaces
/// through the same timeout variant — the two are treated identically.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("fetch returned HTTP {status}")]
    Http { status: u16 },

    #[error("network error: {reason}")]
    Network { reason: String },

    #[error("failed to read response body: {reason}")]
    Body { reason: String },

    #[error("failed to build HTTP client: {reason}")]
    ClientBuild { reason: String },
}
