//! Age-driven confidence decay.

use factlens_core::config::DecayConfig;
use factlens_core::FactCategory;

/// Apply temporal decay to a match score. Volatile categories (prices,
/// schedules) decay on their own schedule; every category decays past the
/// global staleness horizon, applied after the volatile step. Decay only
/// ever lowers a score: a score already at or under a step's floor passes
/// through unchanged.
pub fn apply(score: u32, category: FactCategory, age_days: i64, config: &DecayConfig) -> u32 {
    let mut score = score;

    if category.is_volatile() {
        if age_days > config.volatile_stale_days {
            score = step(score, config.volatile_stale_penalty, config.volatile_stale_floor);
        } else if age_days > config.volatile_aging_days {
            score = step(score, config.volatile_aging_penalty, config.volatile_aging_floor);
        }
    }

    if age_days > config.global_stale_days {
        score = step(score, config.global_stale_penalty, config.global_stale_floor);
    }

    score
}

fn step(score: u32, penalty: u32, floor: u32) -> u32 {
    if score <= floor {
        score
    } else {
        score.saturating_sub(penalty).max(floor)
    }
}
