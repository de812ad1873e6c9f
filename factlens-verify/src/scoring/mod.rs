//! Tier-weighted confidence aggregation.

pub mod decay;

use factlens_core::constants::{BASE_CONFIDENCE, MAX_CONFIDENCE};
use factlens_core::models::TrustTier;

/// Per-tier match counts for one verification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TierTally {
    pub tier1: u32,
    pub tier2: u32,
    pub tier3: u32,
}

impl TierTally {
    /// Record one matching source at `tier`.
    pub fn record(&mut self, tier: TrustTier) {
        match tier {
            TrustTier::Official => self.tier1 += 1,
            TrustTier::Authority => self.tier2 += 1,
            TrustTier::Reference => self.tier3 += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.tier1 + self.tier2 + self.tier3
    }
}

/// Aggregate match confidence: the searched-at-all base plus per-tier
/// weights, capped. One official source outweighs two community ones —
/// authority counts for more than volume.
pub fn match_score(tally: &TierTally) -> u32 {
    let score = BASE_CONFIDENCE
        + tally.tier1 * TrustTier::Official.weight()
        + tally.tier2 * TrustTier::Authority.weight()
        + tally.tier3 * TrustTier::Reference.weight();
    score.min(MAX_CONFIDENCE)
}
