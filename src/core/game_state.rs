use super::config::PowerWeights;
use super::constants::SAVE_VERSION;
use super::log::ActivityLog;
use crate::character::buffs::{active_buffs, StatBuff};
use crate::character::derived_stats::{effective_stats, power, power_with_fallback, EffectiveStats, PowerReading};
use crate::character::stats::CharacterStats;
use crate::dungeon::types::{DungeonRunResult, RunStats};
use crate::enhancement::types::UpgradeStats;
use crate::items::equipment::equipment_levels;
use crate::items::types::EquipmentItem;
use crate::rewards::queue::RewardQueue;
use crate::shadows::logic::equipped_shadow;
use crate::shadows::types::ShadowCompanion;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    pub shards: u64,
}

/// Everything the engine persists for one player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    #[serde(default)]
    pub version: u32,
    pub character: CharacterStats,
    #[serde(default)]
    pub equipment: Vec<EquipmentItem>,
    #[serde(default)]
    pub shadows: Vec<ShadowCompanion>,
    #[serde(default)]
    pub run_history: Vec<DungeonRunResult>,
    /// Rewards not yet shown to the player
    #[serde(default)]
    pub reward_queue: RewardQueue,
    #[serde(default)]
    pub wallet: Wallet,
    #[serde(default)]
    pub activity_log: ActivityLog,
    #[serde(default)]
    pub buffs: Vec<StatBuff>,
    #[serde(default)]
    pub upgrade_stats: UpgradeStats,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            version: SAVE_VERSION,
            character: CharacterStats::new(),
            equipment: Vec::new(),
            shadows: Vec::new(),
            run_history: Vec::new(),
            reward_queue: RewardQueue::new(),
            wallet: Wallet::default(),
            activity_log: ActivityLog::new(),
            buffs: Vec::new(),
            upgrade_stats: UpgradeStats::default(),
        }
    }

    pub fn equipped_shadow(&self) -> Option<&ShadowCompanion> {
        equipped_shadow(&self.shadows)
    }

    /// Effective stats with only the buffs active at `now`.
    pub fn effective_stats(&self, now: i64) -> EffectiveStats {
        effective_stats(
            &self.character.attributes,
            &self.equipment,
            self.equipped_shadow(),
            &active_buffs(&self.buffs, now),
        )
    }

    /// Current power, guarded by the zero-power fallback.
    pub fn power(&self, weights: &PowerWeights, now: i64) -> PowerReading {
        let computed = power(
            &self.effective_stats(now),
            &equipment_levels(&self.equipment),
            self.equipped_shadow().map(|s| s.bonus.magnitude),
            weights,
        );
        power_with_fallback(&self.character.attributes, computed, weights)
    }

    /// Drops buffs that have run out by `now`.
    pub fn expire_buffs(&mut self, now: i64) {
        self.buffs.retain(|b| b.is_active(now));
    }

    pub fn run_stats(&self) -> RunStats {
        RunStats::from_history(&self.run_history)
    }
}
