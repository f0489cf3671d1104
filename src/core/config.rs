//! Runtime-tunable balance values.
//!
//! The literals in [`constants`](super::constants) are the shipped defaults.
//! A host can override any subset of them from JSON; missing fields keep
//! their default.

use super::constants::*;
use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Weights used to reduce effective stats into a single power value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerWeights {
    pub per_stat_point: u64,
    pub per_equipment_level: u64,
    pub per_shadow_bonus: u64,
    /// Scale used when the regular reduction yields 0 for a non-zero character.
    pub fallback_scale: u64,
    pub fallback_multiplier: f64,
}

impl Default for PowerWeights {
    fn default() -> Self {
        Self {
            per_stat_point: POWER_PER_STAT_POINT,
            per_equipment_level: POWER_PER_EQUIPMENT_LEVEL,
            per_shadow_bonus: POWER_PER_SHADOW_BONUS,
            fallback_scale: FALLBACK_POWER_SCALE,
            fallback_multiplier: FALLBACK_POWER_MULTIPLIER,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceConfig {
    pub power: PowerWeights,

    /// Flat increase applied to every base attribute per level gained
    pub stat_points_per_level: u32,

    /// Shards = floor(base * (1 + rank_multiplier * difficulty_factor))
    pub shard_reward_base: f64,
    pub shard_difficulty_factor: f64,

    /// Share of dungeon XP passed to the equipped shadow, in percent
    pub shadow_xp_share_percent: u64,

    /// Recommended power added per procedural floor
    pub floor_power_step: u64,

    /// Base XP added per procedural floor
    pub floor_xp_step: u64,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            power: PowerWeights::default(),
            stat_points_per_level: STAT_POINTS_PER_LEVEL,
            shard_reward_base: SHARD_REWARD_BASE,
            shard_difficulty_factor: SHARD_DIFFICULTY_FACTOR,
            shadow_xp_share_percent: SHADOW_XP_SHARE_PERCENT,
            floor_power_step: FLOOR_POWER_STEP,
            floor_xp_step: FLOOR_XP_STEP,
        }
    }
}

impl BalanceConfig {
    /// Parse a (possibly partial) JSON override.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.shard_reward_base < 0.0 || self.shard_difficulty_factor < 0.0 {
            return Err(ConfigError::Invalid(
                "shard reward values must be non-negative".to_string(),
            ));
        }
        if self.power.fallback_multiplier < 0.0 {
            return Err(ConfigError::Invalid(
                "fallback_multiplier must be non-negative".to_string(),
            ));
        }
        if self.shadow_xp_share_percent > 100 {
            return Err(ConfigError::Invalid(format!(
                "shadow_xp_share_percent must be at most 100, got {}",
                self.shadow_xp_share_percent
            )));
        }
        Ok(())
    }
}
