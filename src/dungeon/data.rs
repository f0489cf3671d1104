//! Dungeon catalog: hand-authored gates plus procedural floors.

use super::types::{BossDescriptor, CosmeticUnlock, DungeonDefinition, RewardTable};
use crate::character::attributes::StatType;
use crate::core::config::BalanceConfig;
use crate::core::constants::{
    FLOOR_BOSS_INTERVAL, FLOOR_DROP_CHANCE, FLOOR_DROP_ROLLS, FLOOR_DUNGEON_PREFIX,
};
use crate::core::error::{EngineError, EntityKind};
use crate::core::rank::Rank;
use crate::items::drops::RarityWeight;
use crate::items::types::{Rarity, StatBonus};
use crate::shadows::types::ShadowDescriptor;

/// Shadows guarding every tenth floor, in order.
const FLOOR_SHADOW_ROSTER: [(&str, StatType); 6] = [
    ("Vhalor", StatType::Strength),
    ("Ironhide", StatType::Vitality),
    ("Sable", StatType::Agility),
    ("Morrow", StatType::Intelligence),
    ("Lucan", StatType::Fortune),
    ("Grist", StatType::Metabolism),
];

const DROP_WINDOW_WEIGHTS: [u32; 4] = [50, 30, 15, 5];

/// Four consecutive rarity tiers, shifted up with rank.
pub fn rarity_weights_for_rank(rank: Rank) -> Vec<RarityWeight> {
    let start = (rank as usize).min(Rarity::ALL.len() - DROP_WINDOW_WEIGHTS.len());
    DROP_WINDOW_WEIGHTS
        .iter()
        .enumerate()
        .map(|(offset, &weight)| RarityWeight {
            rarity: Rarity::ALL[start + offset],
            weight,
        })
        .collect()
}

fn cosmetic(id: &str, name: &str) -> Option<CosmeticUnlock> {
    Some(CosmeticUnlock {
        id: id.to_string(),
        name: name.to_string(),
    })
}

fn extractable_boss(name: &str, power: u64, shadow: &str, rank: Rank, stat: StatType, magnitude: u32) -> BossDescriptor {
    BossDescriptor {
        name: name.to_string(),
        power,
        can_extract: true,
        shadow: ShadowDescriptor {
            name: shadow.to_string(),
            rank,
            bonus: StatBonus { stat, magnitude },
        },
    }
}

/// Returns the hand-authored dungeons.
pub fn get_all_dungeons() -> Vec<DungeonDefinition> {
    vec![
        DungeonDefinition {
            id: "goblin_den".to_string(),
            name: "Goblin Den".to_string(),
            recommended_power: 300,
            rank: Rank::E,
            rewards: RewardTable {
                base_xp: 100,
                drop_rolls: 1,
                drop_chance: 0.5,
                rarity_weights: rarity_weights_for_rank(Rank::E),
                title_unlock: None,
                frame_unlock: None,
            },
            boss: None,
            floor: None,
        },
        DungeonDefinition {
            id: "cursed_crypt".to_string(),
            name: "Cursed Crypt".to_string(),
            recommended_power: 1_500,
            rank: Rank::D,
            rewards: RewardTable {
                base_xp: 250,
                drop_rolls: 2,
                drop_chance: 0.4,
                rarity_weights: rarity_weights_for_rank(Rank::D),
                title_unlock: cosmetic("crypt_walker", "Crypt Walker"),
                frame_unlock: None,
            },
            boss: Some(extractable_boss("Bone Warden", 1_800, "Grimbone", Rank::D, StatType::Vitality, 8)),
            floor: None,
        },
        DungeonDefinition {
            id: "red_gate".to_string(),
            name: "Red Gate".to_string(),
            recommended_power: 5_000,
            rank: Rank::C,
            rewards: RewardTable {
                base_xp: 600,
                drop_rolls: 2,
                drop_chance: 0.5,
                rarity_weights: rarity_weights_for_rank(Rank::C),
                title_unlock: cosmetic("gate_breaker", "Gate Breaker"),
                frame_unlock: cosmetic("crimson_frame", "Crimson Frame"),
            },
            boss: Some(extractable_boss("Frost Elf Chieftain", 5_500, "Kestrel", Rank::C, StatType::Agility, 14)),
            floor: None,
        },
        DungeonDefinition {
            id: "demon_castle".to_string(),
            name: "Demon Castle".to_string(),
            recommended_power: 20_000,
            rank: Rank::A,
            rewards: RewardTable {
                base_xp: 2_500,
                drop_rolls: 3,
                drop_chance: 0.5,
                rarity_weights: rarity_weights_for_rank(Rank::A),
                title_unlock: None,
                frame_unlock: cosmetic("infernal_frame", "Infernal Frame"),
            },
            boss: Some(extractable_boss("Demon Lord", 24_000, "Baranth", Rank::A, StatType::Strength, 25)),
            floor: None,
        },
        DungeonDefinition {
            id: "monarch_nest".to_string(),
            name: "Monarch's Nest".to_string(),
            recommended_power: 60_000,
            rank: Rank::S,
            rewards: RewardTable {
                base_xp: 8_000,
                drop_rolls: 3,
                drop_chance: 0.6,
                rarity_weights: rarity_weights_for_rank(Rank::S),
                title_unlock: cosmetic("monarch_slayer", "Monarch Slayer"),
                frame_unlock: cosmetic("monarch_frame", "Monarch Frame"),
            },
            boss: Some(extractable_boss("Nest Queen", 70_000, "Nyx", Rank::S, StatType::Agility, 40)),
            floor: None,
        },
    ]
}

/// Parses `dungeon_<floor>`. Floor numbers start at 1.
pub fn parse_floor_id(dungeon_id: &str) -> Option<u32> {
    let floor: u32 = dungeon_id.strip_prefix(FLOOR_DUNGEON_PREFIX)?.parse().ok()?;
    (floor >= 1).then_some(floor)
}

pub fn floor_dungeon_id(floor: u32) -> String {
    format!("{}{}", FLOOR_DUNGEON_PREFIX, floor)
}

/// Builds procedural floor `floor`. Power, XP and rank scale with depth; every
/// tenth floor has a boss whose shadow can be extracted.
pub fn floor_dungeon(floor: u32, config: &BalanceConfig) -> DungeonDefinition {
    let rank = Rank::for_floor(floor);
    let recommended_power = config.floor_power_step.saturating_mul(floor as u64);

    let is_boss_floor = floor % FLOOR_BOSS_INTERVAL == 0;
    let boss = is_boss_floor.then(|| {
        let index = ((floor / FLOOR_BOSS_INTERVAL - 1) as usize) % FLOOR_SHADOW_ROSTER.len();
        let (shadow, stat) = FLOOR_SHADOW_ROSTER[index];
        extractable_boss(
            &format!("Keeper of Floor {}", floor),
            recommended_power,
            shadow,
            rank,
            stat,
            4 + rank.difficulty_multiplier() * 2,
        )
    });
    let title_unlock = is_boss_floor.then(|| CosmeticUnlock {
        id: format!("floor_{}_conqueror", floor),
        name: format!("Conqueror of Floor {}", floor),
    });

    DungeonDefinition {
        id: floor_dungeon_id(floor),
        name: format!("Floor {}", floor),
        recommended_power,
        rank,
        rewards: RewardTable {
            base_xp: config.floor_xp_step.saturating_mul(floor as u64),
            drop_rolls: FLOOR_DROP_ROLLS,
            drop_chance: FLOOR_DROP_CHANCE,
            rarity_weights: rarity_weights_for_rank(rank),
            title_unlock,
            frame_unlock: None,
        },
        boss,
        floor: Some(floor),
    }
}

/// Looks a dungeon id up in the catalog, then as a procedural floor.
pub fn resolve_dungeon(dungeon_id: &str, config: &BalanceConfig) -> Result<DungeonDefinition, EngineError> {
    if let Some(dungeon) = get_all_dungeons().into_iter().find(|d| d.id == dungeon_id) {
        return Ok(dungeon);
    }
    parse_floor_id(dungeon_id)
        .map(|floor| floor_dungeon(floor, config))
        .ok_or_else(|| EngineError::not_found(EntityKind::Dungeon, dungeon_id))
}
