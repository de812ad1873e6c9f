use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{TIER1_WEIGHT, TIER2_WEIGHT, TIER3_WEIGHT};

/// Trust level of a source domain. Ordering runs from most trusted
/// (`Official`) to least (`Reference`), so `min` picks the stronger tier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TrustTier {
    /// Official government or operator site.
    Official,
    /// Recognized travel authority.
    Authority,
    /// General reference or community site.
    Reference,
}

impl TrustTier {
    /// Numeric tier, 1 (most trusted) through 3.
    pub fn level(self) -> u8 {
        match self {
            TrustTier::Official => 1,
            TrustTier::Authority => 2,
            TrustTier::Reference => 3,
        }
    }

    /// Confidence contributed by one matching source at this tier.
    pub fn weight(self) -> u32 {
        match self {
            TrustTier::Official => TIER1_WEIGHT,
            TrustTier::Authority => TIER2_WEIGHT,
            TrustTier::Reference => TIER3_WEIGHT,
        }
    }
}

impl fmt::Display for TrustTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tier {}", self.level())
    }
}
