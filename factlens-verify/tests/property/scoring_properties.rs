use factlens_core::config::DecayConfig;
use factlens_core::FactCategory;
use factlens_verify::scoring::{decay, match_score, TierTally};
use proptest::prelude::*;

fn arb_category() -> impl Strategy<Value = FactCategory> {
    prop_oneof![
        Just(FactCategory::Price),
        Just(FactCategory::Schedule),
        Just(FactCategory::Address),
        Just(FactCategory::Contact),
        Just(FactCategory::Transport),
        Just(FactCategory::Regulation),
        Just(FactCategory::Statistic),
        Just(FactCategory::Uncategorized),
    ]
}

// ── Match-score properties ───────────────────────────────────────────────

proptest! {
    #[test]
    fn score_is_bounded(tier1 in 0u32..10, tier2 in 0u32..10, tier3 in 0u32..10) {
        let score = match_score(&TierTally { tier1, tier2, tier3 });
        prop_assert!((20..=95).contains(&score), "score {score} out of bounds");
    }

    #[test]
    fn extra_tier1_match_never_lowers_the_score(
        tier1 in 0u32..10,
        tier2 in 0u32..10,
        tier3 in 0u32..10,
    ) {
        let base = match_score(&TierTally { tier1, tier2, tier3 });
        let bumped = match_score(&TierTally { tier1: tier1 + 1, tier2, tier3 });
        prop_assert!(bumped >= base, "{bumped} < {base} after adding a tier-1 match");
    }
}

// ── Decay properties ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn decay_never_increases_with_age(
        score in 20u32..=95,
        category in arb_category(),
        age_a in 0i64..400,
        age_b in 0i64..400,
    ) {
        let config = DecayConfig::default();
        let (younger, older) = if age_a <= age_b { (age_a, age_b) } else { (age_b, age_a) };
        let fresh = decay::apply(score, category, younger, &config);
        let aged = decay::apply(score, category, older, &config);
        prop_assert!(aged <= fresh, "confidence rose from {fresh} to {aged} as age went {younger} -> {older}");
    }

    #[test]
    fn decay_never_raises_a_score(
        score in 20u32..=95,
        category in arb_category(),
        age in 0i64..1000,
    ) {
        let decayed = decay::apply(score, category, age, &DecayConfig::default());
        prop_assert!(decayed <= score);
    }

    #[test]
    fn decayed_scores_stay_in_bounds(
        score in 20u32..=95,
        category in arb_category(),
        age in 0i64..1000,
    ) {
        let decayed = decay::apply(score, category, age, &DecayConfig::default());
        prop_assert!((20..=95).contains(&decayed));
    }
}
