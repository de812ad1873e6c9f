//! Error taxonomy. Network-origin failures are contained inside the engine
//! (empty search results, non-matching source checks); these types cover the
//! transport internals and the only surfaces that genuinely fail —
//! configuration and client construction.

pub mod fetch_error;
pub mod search_error;

pub use fetch_error::FetchError;
pub use search_error::SearchError;

/// Top-level error for the verification system.
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    #[error(transparent)]
    Search(#[from] SearchError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("invalid configuration: {reason}")]
    Config { reason: String },
}

/// Convenience alias used across the workspace.
pub type VerifyResult<T> = Result<T, VerifyError>;
