/// Search client errors.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("search rate-limited: HTTP {status}")]
    RateLimited { status: u16 },

    #[error("search returned HTTP {status}")]
    Http { status: u16 },

    #[error("search network error: {reason}")]
    Network { reason: String },

    #[error("no parseable result blocks in search response")]
    Parse,
}
