//! Verdict classification: the precedence ladder over matches, confidence,
//! and staleness.

use factlens_core::constants::{
    OUTDATED_BELOW, PARTIAL_CONFIDENCE, REVIEW_CONFIDENCE_CAP, STRONG_CONFIDENCE,
    STRONG_MATCH_COUNT,
};
use factlens_core::models::{SourceCheck, VerificationVerdict};
use factlens_core::FactCategory;

use crate::scoring::TierTally;

/// Everything the ladder needs about one verification run.
pub struct Assessment<'a> {
    pub tally: &'a TierTally,
    /// Sources actually evaluated: snippet matches plus completed fetches.
    pub sources_ok: usize,
    pub checks: &'a [SourceCheck],
    /// Post-decay confidence.
    pub confidence: u32,
    pub category: FactCategory,
    pub age_days: i64,
}

/// Final verdict, adjusted confidence, and rationale.
#[derive(Debug)]
pub struct Classification {
    pub verdict: VerificationVerdict,
    pub confidence: u32,
    pub notes: String,
}

/// Evaluate the ladder in precedence order. The ordering privileges source
/// diversity and authority over raw match count, and treats staleness as a
/// risk dimension independent of corroboration strength.
pub fn classify(a: &Assessment<'_>) -> Classification {
    let matches = a.tally.total();

    // Nothing was reachable: no evidence either way.
    if matches == 0 && a.sources_ok == 0 {
        return Classification {
            verdict: VerificationVerdict::Unverifiable,
            confidence: a.confidence,
            notes: format!(
                "none of the {} candidate pages were fetchable",
                a.checks.len()
            ),
        };
    }

    // Pages were read and none agreed.
    if matches == 0 {
        return Classification {
            verdict: VerificationVerdict::FlaggedForReview,
            confidence: a.confidence.min(REVIEW_CONFIDENCE_CAP),
            notes: format!(
                "checked {} source(s); none corroborated the claim",
                a.sources_ok
            ),
        };
    }

    // Matched, but decay dragged the score down.
    if a.confidence < OUTDATED_BELOW {
        let volatility = if a.category.is_volatile() {
            " in a volatile category"
        } else {
            ""
        };
        return Classification {
            verdict: VerificationVerdict::Outdated,
            confidence: a.confidence,
            notes: format!(
                "confidence {} after decay; fact is {} days old{volatility}",
                a.confidence, a.age_days
            ),
        };
    }

    let matched_domains = a
        .checks
        .iter()
        .filter(|c| c.matched)
        .map(|c| c.domain.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    if matches >= STRONG_MATCH_COUNT && a.confidence >= STRONG_CONFIDENCE {
        return Classification {
            verdict: VerificationVerdict::Verified,
            confidence: a.confidence,
            notes: format!(
                "corroborated by {matches} source(s) (tier1: {}, tier2: {}, tier3: {}): {matched_domains}",
                a.tally.tier1, a.tally.tier2, a.tally.tier3
            ),
        };
    }

    if a.confidence >= PARTIAL_CONFIDENCE {
        return Classification {
            verdict: VerificationVerdict::Verified,
            confidence: a.confidence,
            notes: format!("partially verified by {matched_domains} ({matches} match(es))"),
        };
    }

    Classification {
        verdict: VerificationVerdict::FlaggedForReview,
        confidence: a.confidence,
        notes: format!(
            "weak corroboration: {matches} match(es) at confidence {}",
            a.confidence
        ),
    }
}
