//! # factlens-core
//!
//! Foundation crate for the factlens verification system.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod fact;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::VerifyConfig;
pub use errors::{VerifyError, VerifyResult};
pub use fact::{Fact, FactCategory, FactStatus};
pub use models::{
    SearchHit, SourceCheck, TrustTier, VerificationVerdict, WebVerificationResult,
};
