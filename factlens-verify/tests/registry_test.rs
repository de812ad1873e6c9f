use factlens_core::{FactCategory, TrustTier};
use factlens_verify::DomainRegistry;

// ── Coverage ─────────────────────────────────────────────────────────────

#[test]
fn every_registered_category_has_entries() {
    let registry = DomainRegistry;
    for category in FactCategory::REGISTERED {
        assert!(
            !registry.entries(category).is_empty(),
            "no entries for {category:?}"
        );
    }
    assert!(registry.entries(FactCategory::Uncategorized).is_empty());
}

#[test]
fn every_category_has_at_least_one_official_source() {
    let registry = DomainRegistry;
    for category in FactCategory::REGISTERED {
        assert!(
            registry
                .entries(category)
                .iter()
                .any(|e| e.tier == TrustTier::Official),
            "no official source for {category:?}"
        );
    }
}

// ── Total lookup ─────────────────────────────────────────────────────────

#[test]
fn unknown_domains_resolve_to_reference_never_error() {
    let registry = DomainRegistry;
    assert_eq!(
        registry.tier_for(FactCategory::Price, "random-blog.example.com"),
        TrustTier::Reference
    );
    assert_eq!(
        registry.tier_for(FactCategory::Uncategorized, ""),
        TrustTier::Reference
    );
}

#[test]
fn category_lookup_matches_subdomains() {
    let registry = DomainRegistry;
    assert_eq!(
        registry.tier_for(FactCategory::Transport, "www.tfl.gov.uk"),
        TrustTier::Official
    );
    // Label boundary: a lookalike host gains nothing.
    assert!(!registry.is_trusted_any("nottfl.gov.uk"));
}

#[test]
fn cross_category_fallback_uses_the_best_tier() {
    let registry = DomainRegistry;
    // ons.gov.uk is registered under statistic only; a price fact checking
    // an ONS page still sees its official tier.
    assert_eq!(
        registry.tier_for(FactCategory::Price, "ons.gov.uk"),
        TrustTier::Official
    );
    assert!(registry.is_trusted_any("ons.gov.uk"));
    assert!(!registry.is_trusted_for(FactCategory::Price, "ons.gov.uk"));
}

// ── Site hints ───────────────────────────────────────────────────────────

#[test]
fn site_hints_are_official_and_capped() {
    let registry = DomainRegistry;
    let hints = registry.site_hints(FactCategory::Transport, 2);
    assert_eq!(hints, vec!["tfl.gov.uk", "nationalrail.co.uk"]);

    let one = registry.site_hints(FactCategory::Regulation, 1);
    assert_eq!(one, vec!["gov.uk"]);
}
