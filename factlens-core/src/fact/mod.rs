pub mod category;
pub mod status;

pub use category::FactCategory;
pub use status::FactStatus;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A short factual claim about the destination, owned by the content
/// pipeline. Immutable for the duration of a verification call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fact {
    pub id: String,
    pub category: FactCategory,
    /// Publication state, maintained by the pipeline — not consumed here.
    pub status: FactStatus,
    /// Times this fact has been through verification.
    pub verification_count: u32,
    pub created_at: DateTime<Utc>,
    /// The claim itself, free text in the working language.
    pub fact_text: String,
}

impl Fact {
    /// Whole days elapsed since the fact was created. Never negative.
    pub fn age_days(&self, now: DateTime<Utc>) -> i64 {
        (now - self.created_at).num_days().max(0)
    }
}
