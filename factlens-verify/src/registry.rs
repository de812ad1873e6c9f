//! Domain trust registry: which sites are worth believing, per category.
//!
//! Static tables keyed by the closed `FactCategory` enum — no string
//! dispatch, no configuration file, no failure mode. Lookups are total:
//! an unknown host resolves to the lowest trust tier, never an error.

use factlens_core::{FactCategory, TrustTier};

/// A trusted source domain. `domain` matches hostnames by label suffix, so
/// `tfl.gov.uk` covers `www.tfl.gov.uk` but not `nottfl.gov.uk`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrustedDomain {
    pub domain: &'static str,
    pub tier: TrustTier,
}

const fn entry(domain: &'static str, tier: TrustTier) -> TrustedDomain {
    TrustedDomain { domain, tier }
}

const PRICE: &[TrustedDomain] = &[
    entry("tfl.gov.uk", TrustTier::Official),
    entry("nationalrail.co.uk", TrustTier::Official),
    entry("visitlondon.com", TrustTier::Authority),
    entry("timeout.com", TrustTier::Reference),
    entry("tripadvisor.com", TrustTier::Reference),
];

const SCHEDULE: &[TrustedDomain] = &[
    entry("tfl.gov.uk", TrustTier::Official),
    entry("nationalrail.co.uk", TrustTier::Official),
    entry("thetrainline.com", TrustTier::Authority),
    entry("visitlondon.com", TrustTier::Authority),
    entry("timeout.com", TrustTier::Reference),
];

const ADDRESS: &[TrustedDomain] = &[
    entry("royalmail.com", TrustTier::Official),
    entry("gov.uk", TrustTier::Official),
    entry("visitlondon.com", TrustTier::Authority),
    entry("openstreetmap.org", TrustTier::Reference),
    entry("yell.com", TrustTier::Reference),
];

const CONTACT: &[TrustedDomain] = &[
    entry("gov.uk", TrustTier::Official),
    entry("visitlondon.com", TrustTier::Authority),
    entry("yell.com", TrustTier::Reference),
    entry("tripadvisor.com", TrustTier::Reference),
];

const TRANSPORT: &[TrustedDomain] = &[
    entry("tfl.gov.uk", TrustTier::Official),
    entry("nationalrail.co.uk", TrustTier::Official),
    entry("gov.uk", TrustTier::Official),
    entry("citymapper.com", TrustTier::Reference),
];

const REGULATION: &[TrustedDomain] = &[
    entry("gov.uk", TrustTier::Official),
    entry("legislation.gov.uk", TrustTier::Official),
    entry("london.gov.uk", TrustTier::Official),
    entry("citizensadvice.org.uk", TrustTier::Authority),
];

const STATISTIC: &[TrustedDomain] = &[
    entry("ons.gov.uk", TrustTier::Official),
    entry("london.gov.uk", TrustTier::Official),
    entry("statista.com", TrustTier::Authority),
    entry("wikipedia.org", TrustTier::Reference),
];

/// Category-keyed trust tables plus a flattened any-category view. A page
/// may corroborate a fact even when its host is trusted for a different
/// category, so the flattened view matters to prioritization and tiering.
#[derive(Debug, Default, Clone, Copy)]
pub struct DomainRegistry;

impl DomainRegistry {
    /// Trusted domains for one category. Uncategorized facts have none.
    pub fn entries(&self, category: FactCategory) -> &'static [TrustedDomain] {
        match category {
            FactCategory::Price => PRICE,
            FactCategory::Schedule => SCHEDULE,
            FactCategory::Address => ADDRESS,
            FactCategory::Contact => CONTACT,
            FactCategory::Transport => TRANSPORT,
            FactCategory::Regulation => REGULATION,
            FactCategory::Statistic => STATISTIC,
            FactCategory::Uncategorized => &[],
        }
    }

    /// Whether `host` is trusted for `category`.
    pub fn is_trusted_for(&self, category: FactCategory, host: &str) -> bool {
        tier_in(self.entries(category), host).is_some()
    }

    /// Whether `host` is trusted for any category.
    pub fn is_trusted_any(&self, host: &str) -> bool {
        FactCategory::REGISTERED
            .iter()
            .any(|c| self.is_trusted_for(*c, host))
    }

    /// Tier for `host` seen from `category`. Total: falls back to the
    /// host's best tier under any other category, then to `Reference`.
    pub fn tier_for(&self, category: FactCategory, host: &str) -> TrustTier {
        if let Some(tier) = tier_in(self.entries(category), host) {
            return tier;
        }
        FactCategory::REGISTERED
            .iter()
            .filter_map(|c| tier_in(self.entries(*c), host))
            .min()
            .unwrap_or(TrustTier::Reference)
    }

    /// Up to `limit` tier-1 domains for a category's `site:` hint clause.
    pub fn site_hints(&self, category: FactCategory, limit: usize) -> Vec<&'static str> {
        self.entries(category)
            .iter()
            .filter(|e| e.tier == TrustTier::Official)
            .take(limit)
            .map(|e| e.domain)
            .collect()
    }
}

fn tier_in(entries: &[TrustedDomain], host: &str) -> Option<TrustTier> {
    entries
        .iter()
        .find(|e| host_matches(host, e.domain))
        .map(|e| e.tier)
}

/// Label-boundary suffix match.
fn host_matches(host: &str, domain: &str) -> bool {
    host.strip_suffix(domain)
        .is_some_and(|rest| rest.is_empty() || rest.ends_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_match_respects_label_boundaries() {
        assert!(host_matches("tfl.gov.uk", "tfl.gov.uk"));
        assert!(host_matches("www.tfl.gov.uk", "tfl.gov.uk"));
        assert!(!host_matches("nottfl.gov.uk", "tfl.gov.uk"));
        assert!(!host_matches("tfl.gov.uk.evil.com", "tfl.gov.uk"));
    }
}
