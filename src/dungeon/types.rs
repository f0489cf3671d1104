//! Dungeon definitions and run records.

use crate::character::derived_stats::PowerReading;
use crate::character::progression::LevelResult;
use crate::core::rank::Rank;
use crate::items::drops::RarityWeight;
use crate::shadows::logic::ShadowProgress;
use crate::shadows::types::{ShadowCompanion, ShadowDescriptor};
use serde::{Deserialize, Serialize};

/// A title or frame a dungeon can unlock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CosmeticUnlock {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardTable {
    pub base_xp: u64,
    /// Independent drop attempts per clear
    pub drop_rolls: u32,
    pub drop_chance: f64,
    pub rarity_weights: Vec<RarityWeight>,
    pub title_unlock: Option<CosmeticUnlock>,
    pub frame_unlock: Option<CosmeticUnlock>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BossDescriptor {
    pub name: String,
    pub power: u64,
    pub can_extract: bool,
    pub shadow: ShadowDescriptor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DungeonDefinition {
    pub id: String,
    pub name: String,
    pub recommended_power: u64,
    pub rank: Rank,
    pub rewards: RewardTable,
    pub boss: Option<BossDescriptor>,
    /// Set for procedural floors
    pub floor: Option<u32>,
}

/// Immutable record of one resolution, kept in run history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DungeonRunResult {
    pub id: String,
    pub dungeon_id: String,
    pub victory: bool,
    pub timestamp: i64,
    pub xp_earned: u64,
    /// Ids of the items awarded
    #[serde(default)]
    pub equipment_awarded: Vec<String>,
    #[serde(default)]
    pub unlocked_title: Option<String>,
    #[serde(default)]
    pub unlocked_frame: Option<String>,
    #[serde(default)]
    pub shards_earned: Option<u64>,
    #[serde(default)]
    pub extracted_shadow: Option<String>,
    #[serde(default)]
    pub floor: Option<u32>,
}

/// Everything a dungeon run produced, returned to the host.
#[derive(Debug, Clone, PartialEq)]
pub struct DungeonRun {
    pub result: DungeonRunResult,
    pub boss: Option<BossDescriptor>,
    pub power: PowerReading,
    pub recommended_power: u64,
    pub level: Option<LevelResult>,
    pub shadow_progress: Option<ShadowProgress>,
    pub extracted_shadow: Option<ShadowCompanion>,
}

impl DungeonRun {
    pub fn victory(&self) -> bool {
        self.result.victory
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    pub clears: u32,
    pub defeats: u32,
    pub highest_floor_cleared: Option<u32>,
}

impl RunStats {
    pub fn from_history(history: &[DungeonRunResult]) -> Self {
        let mut stats = RunStats::default();
        for run in history {
            if run.victory {
                stats.clears += 1;
                if let Some(floor) = run.floor {
                    stats.highest_floor_cleared =
                        Some(stats.highest_floor_cleared.map_or(floor, |h| h.max(floor)));
                }
            } else {
                stats.defeats += 1;
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(victory: bool, floor: Option<u32>) -> DungeonRunResult {
        DungeonRunResult {
            id: "r".to_string(),
            dungeon_id: "d".to_string(),
            victory,
            timestamp: 0,
            xp_earned: 0,
            equipment_awarded: Vec::new(),
            unlocked_title: None,
            unlocked_frame: None,
            shards_earned: None,
            extracted_shadow: None,
            floor,
        }
    }

    #[test]
    fn test_run_stats_from_history() {
        let history = vec![
            run(true, Some(3)),
            run(false, Some(9)),
            run(true, Some(7)),
            run(true, None),
        ];
        let stats = RunStats::from_history(&history);
        assert_eq!(stats.clears, 3);
        assert_eq!(stats.defeats, 1);
        assert_eq!(stats.highest_floor_cleared, Some(7));
    }

    #[test]
    fn test_run_stats_empty() {
        assert_eq!(RunStats::from_history(&[]), RunStats::default());
    }
}
