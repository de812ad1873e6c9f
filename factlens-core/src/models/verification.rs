use std::fmt;

use serde::{Deserialize, Serialize};

use super::source_check::SourceCheck;

/// Categorical verdict of a verification run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationVerdict {
    Verified,
    Outdated,
    Unverifiable,
    FlaggedForReview,
}

impl VerificationVerdict {
    /// Whether the publication pipeline should hold this fact for a human.
    /// `Outdated` and `Verified` are informative levels with human override.
    pub fn blocks_publication(self) -> bool {
        matches!(
            self,
            VerificationVerdict::Unverifiable | VerificationVerdict::FlaggedForReview
        )
    }
}

impl fmt::Display for VerificationVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VerificationVerdict::Verified => "verified",
            VerificationVerdict::Outdated => "outdated",
            VerificationVerdict::Unverifiable => "unverifiable",
            VerificationVerdict::FlaggedForReview => "flagged_for_review",
        };
        f.write_str(name)
    }
}

/// Result of verifying one fact against independent web sources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebVerificationResult {
    /// Corroboration confidence, 0–95.
    pub confidence: u8,
    pub result: VerificationVerdict,
    /// Comma-joined domains that matched, or every domain checked when none
    /// did, or a short-circuit marker.
    pub source: String,
    /// Human-readable rationale.
    pub notes: String,
    /// At most five entries, in the order the sources were inspected.
    pub sources_checked: Vec<SourceCheck>,
}
