use serde::{Deserialize, Serialize};

use super::defaults;

/// Temporal decay configuration. Age thresholds in days; penalties and
/// floors in confidence points. Each decay step is
/// `max(floor, score - penalty)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayConfig {
    /// Volatile categories: age beyond this loses `volatile_stale_penalty`.
    pub volatile_stale_days: i64,
    pub volatile_stale_penalty: u32,
    pub volatile_stale_floor: u32,

    /// Volatile categories: age beyond this (but within the stale window)
    /// loses `volatile_aging_penalty`.
    pub volatile_aging_days: i64,
    pub volatile_aging_penalty: u32,
    pub volatile_aging_floor: u32,

    /// Any category: age beyond this loses `global_stale_penalty`, applied
    /// after the volatile step.
    pub global_stale_days: i64,
    pub global_stale_penalty: u32,
    pub global_stale_floor: u32,
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            volatile_stale_days: defaults::DEFAULT_VOLATILE_STALE_DAYS,
            volatile_stale_penalty: defaults::DEFAULT_VOLATILE_STALE_PENALTY,
            volatile_stale_floor: defaults::DEFAULT_VOLATILE_STALE_FLOOR,
            volatile_aging_days: defaults::DEFAULT_VOLATILE_AGING_DAYS,
            volatile_aging_penalty: defaults::DEFAULT_VOLATILE_AGING_PENALTY,
            volatile_aging_floor: defaults::DEFAULT_VOLATILE_AGING_FLOOR,
            global_stale_days: defaults::DEFAULT_GLOBAL_STALE_DAYS,
            global_stale_penalty: defaults::DEFAULT_GLOBAL_STALE_PENALTY,
            global_stale_floor: defaults::DEFAULT_GLOBAL_STALE_FLOOR,
        }
    }
}
