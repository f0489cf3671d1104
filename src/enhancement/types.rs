use crate::core::error::EngineError;
use serde::{Deserialize, Serialize};

pub const MAX_ITEM_LEVEL: u8 = 20;
pub const UPGRADE_COST_PER_LEVEL: u64 = 100;
pub const PITY_BONUS_PER_FAILURE: f64 = 0.15;
pub const PITY_CHANCE_CAP: f64 = 0.95;
/// Stat lines grow by 10% per successful upgrade (rounded half up).
pub const UPGRADE_STAT_GROWTH_PERCENT: u64 = 110;

/// Base success chance by current level band.
pub fn base_success_chance(level: u8) -> f64 {
    match level {
        15.. => 0.30,
        10..=14 => 0.50,
        5..=9 => 0.80,
        _ => 1.0,
    }
}

/// Shards needed to attempt an upgrade from `level`.
pub fn upgrade_cost(level: u8) -> u64 {
    UPGRADE_COST_PER_LEVEL * (level as u64 + 1)
}

pub fn pity_bonus(consecutive_failures: u32) -> f64 {
    consecutive_failures as f64 * PITY_BONUS_PER_FAILURE
}

/// Final success chance: base plus pity, capped at 95%.
///
/// The cap only limits what pity can add; a band whose base chance is
/// already above the cap (levels 0-4) keeps it.
pub fn success_chance(level: u8, consecutive_failures: u32) -> f64 {
    let base = base_success_chance(level);
    (base + pity_bonus(consecutive_failures)).min(PITY_CHANCE_CAP).max(base)
}

pub fn grow_stat(magnitude: u32) -> u32 {
    ((magnitude as u64 * UPGRADE_STAT_GROWTH_PERCENT + 50) / 100).min(u32::MAX as u64) as u32
}

/// Result of an upgrade request.
#[derive(Debug, Clone, PartialEq)]
pub enum UpgradeOutcome {
    Success {
        item_id: String,
        new_level: u8,
        shards_spent: u64,
        chance: f64,
    },
    Failure {
        item_id: String,
        level: u8,
        consecutive_failures: u32,
        shards_spent: u64,
        chance: f64,
    },
    /// Nothing was spent or changed.
    Rejected(EngineError),
}

impl UpgradeOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, UpgradeOutcome::Success { .. })
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, UpgradeOutcome::Rejected(_))
    }

    pub fn shards_spent(&self) -> u64 {
        match self {
            UpgradeOutcome::Success { shards_spent, .. }
            | UpgradeOutcome::Failure { shards_spent, .. } => *shards_spent,
            UpgradeOutcome::Rejected(_) => 0,
        }
    }
}

/// Account-wide upgrade statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeStats {
    pub total_attempts: u32,
    pub total_successes: u32,
    pub total_failures: u32,
    pub shards_spent: u64,
    pub highest_level_reached: u8,
}

impl UpgradeStats {
    pub fn record(&mut self, outcome: &UpgradeOutcome) {
        match outcome {
            UpgradeOutcome::Success {
                new_level,
                shards_spent,
                ..
            } => {
                self.total_attempts += 1;
                self.total_successes += 1;
                self.shards_spent += shards_spent;
                self.highest_level_reached = self.highest_level_reached.max(*new_level);
            }
            UpgradeOutcome::Failure { shards_spent, .. } => {
                self.total_attempts += 1;
                self.total_failures += 1;
                self.shards_spent += shards_spent;
            }
            UpgradeOutcome::Rejected(_) => {}
        }
    }
}
