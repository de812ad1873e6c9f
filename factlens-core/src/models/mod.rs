pub mod search_hit;
pub mod source_check;
pub mod tier;
pub mod verification;

pub use search_hit::SearchHit;
pub use source_check::SourceCheck;
pub use tier::TrustTier;
pub use verification::{VerificationVerdict, WebVerificationResult};
