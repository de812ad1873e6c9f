use factlens_core::models::{SourceCheck, TrustTier, VerificationVerdict};
use factlens_core::FactCategory;
use factlens_verify::classify::{classify, Assessment};
use factlens_verify::scoring::TierTally;

fn check(domain: &str, tier: TrustTier, matched: bool) -> SourceCheck {
    SourceCheck {
        url: format!("https://{domain}/page"),
        domain: domain.to_string(),
        tier,
        matched,
        snippet: if matched {
            "supporting text".to_string()
        } else {
            "matched 0/6 keywords (0%)".to_string()
        },
    }
}

struct Setup {
    tally: TierTally,
    checks: Vec<SourceCheck>,
    sources_ok: usize,
}

fn run(setup: &Setup, confidence: u32, category: FactCategory, age_days: i64) -> (VerificationVerdict, u32, String) {
    let c = classify(&Assessment {
        tally: &setup.tally,
        sources_ok: setup.sources_ok,
        checks: &setup.checks,
        confidence,
        category,
        age_days,
    });
    (c.verdict, c.confidence, c.notes)
}

// ── Rung 1: nothing reachable ────────────────────────────────────────────

#[test]
fn no_matches_and_no_reachable_sources_is_unverifiable() {
    let setup = Setup {
        tally: TierTally::default(),
        checks: vec![
            check("a.example.org", TrustTier::Reference, false),
            check("b.example.org", TrustTier::Reference, false),
        ],
        sources_ok: 0,
    };
    let (verdict, confidence, notes) = run(&setup, 20, FactCategory::Price, 5);
    assert_eq!(verdict, VerificationVerdict::Unverifiable);
    assert_eq!(confidence, 20);
    assert!(notes.contains("fetchable"));
}

// ── Rung 2: reachable but uncorroborated ─────────────────────────────────

#[test]
fn zero_matches_with_checked_sources_is_flagged_and_capped() {
    let setup = Setup {
        tally: TierTally::default(),
        checks: vec![
            check("a.example.org", TrustTier::Reference, false),
            check("b.example.org", TrustTier::Reference, false),
            check("c.example.org", TrustTier::Reference, false),
        ],
        sources_ok: 3,
    };
    let (verdict, confidence, notes) = run(&setup, 40, FactCategory::Price, 5);
    assert_eq!(verdict, VerificationVerdict::FlaggedForReview);
    assert_eq!(confidence, 35);
    assert!(notes.contains("3 source(s)"));
}

// ── Rung 3: decay outranks matches ───────────────────────────────────────

#[test]
fn low_confidence_with_matches_is_outdated() {
    let setup = Setup {
        tally: TierTally {
            tier1: 1,
            tier2: 0,
            tier3: 0,
        },
        checks: vec![check("tfl.gov.uk", TrustTier::Official, true)],
        sources_ok: 1,
    };
    let (verdict, confidence, notes) = run(&setup, 25, FactCategory::Price, 120);
    assert_eq!(verdict, VerificationVerdict::Outdated);
    assert_eq!(confidence, 25);
    assert!(notes.contains("120 days"));
    assert!(notes.contains("volatile"));
}

#[test]
fn outdated_notes_omit_volatility_for_stable_categories() {
    let setup = Setup {
        tally: TierTally {
            tier1: 0,
            tier2: 0,
            tier3: 1,
        },
        checks: vec![check("wikipedia.org", TrustTier::Reference, true)],
        sources_ok: 1,
    };
    let (verdict, _, notes) = run(&setup, 25, FactCategory::Statistic, 200);
    assert_eq!(verdict, VerificationVerdict::Outdated);
    assert!(!notes.contains("volatile"));
}

// ── Rungs 4–5: verified ──────────────────────────────────────────────────

#[test]
fn two_matches_at_sixty_verify_with_tier_breakdown() {
    let setup = Setup {
        tally: TierTally {
            tier1: 1,
            tier2: 1,
            tier3: 0,
        },
        checks: vec![
            check("tfl.gov.uk", TrustTier::Official, true),
            check("visitlondon.com", TrustTier::Authority, true),
            check("forum.example.org", TrustTier::Reference, false),
        ],
        sources_ok: 3,
    };
    let (verdict, confidence, notes) = run(&setup, 60, FactCategory::Price, 5);
    assert_eq!(verdict, VerificationVerdict::Verified);
    assert_eq!(confidence, 60);
    assert!(notes.contains("tier1: 1"));
    assert!(notes.contains("tfl.gov.uk"));
    assert!(notes.contains("visitlondon.com"));
    assert!(!notes.contains("forum.example.org"));
}

#[test]
fn single_match_at_forty_five_verifies_partially() {
    let setup = Setup {
        tally: TierTally {
            tier1: 1,
            tier2: 0,
            tier3: 0,
        },
        checks: vec![check("tfl.gov.uk", TrustTier::Official, true)],
        sources_ok: 1,
    };
    let (verdict, confidence, notes) = run(&setup, 45, FactCategory::Price, 5);
    assert_eq!(verdict, VerificationVerdict::Verified);
    assert_eq!(confidence, 45);
    assert!(notes.contains("partially"));
}

// ── Rung 6: weak corroboration ───────────────────────────────────────────

#[test]
fn one_reference_match_at_forty_is_flagged_not_verified() {
    let setup = Setup {
        tally: TierTally {
            tier1: 0,
            tier2: 0,
            tier3: 2,
        },
        checks: vec![
            check("forum.example.org", TrustTier::Reference, true),
            check("blog.example.org", TrustTier::Reference, true),
        ],
        sources_ok: 2,
    };
    let (verdict, confidence, notes) = run(&setup, 40, FactCategory::Address, 5);
    assert_eq!(verdict, VerificationVerdict::FlaggedForReview);
    assert_eq!(confidence, 40);
    assert!(notes.contains("weak"));
}
