use serde::{Deserialize, Serialize};

/// Closed taxonomy of verifiable fact categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactCategory {
    Price,
    Schedule,
    Address,
    Contact,
    Transport,
    Regulation,
    Statistic,
    /// A fact the pipeline couldn't categorize. Serialized as "none".
    #[serde(rename = "none")]
    Uncategorized,
}

impl FactCategory {
    /// Every category that carries domain-registry entries.
    pub const REGISTERED: [FactCategory; 7] = [
        FactCategory::Price,
        FactCategory::Schedule,
        FactCategory::Address,
        FactCategory::Contact,
        FactCategory::Transport,
        FactCategory::Regulation,
        FactCategory::Statistic,
    ];

    /// Categories whose real-world values change often enough to warrant
    /// faster confidence decay.
    pub fn is_volatile(self) -> bool {
        matches!(self, FactCategory::Price | FactCategory::Schedule)
    }

    /// Categories served by a small set of authoritative sites, worth a
    /// `site:` restriction in the search query.
    pub fn has_site_hints(self) -> bool {
        matches!(
            self,
            FactCategory::Transport | FactCategory::Regulation | FactCategory::Statistic
        )
    }
}
