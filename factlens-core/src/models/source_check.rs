use serde::{Deserialize, Serialize};

use super::tier::TrustTier;

/// Outcome of inspecting one candidate source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceCheck {
    pub url: String,
    pub domain: String,
    pub tier: TrustTier,
    pub matched: bool,
    /// Supporting text for a match, or the failure reason otherwise.
    pub snippet: String,
}
