use super::names::generate_display_name;
use super::types::{EquipmentItem, EquipmentSlot, Rarity, StatBonus};
use crate::character::attributes::StatType;
use crate::core::ids::fresh_id;
use rand::Rng;

/// Generate a level-0 item with a fresh id and rarity-scaled stat lines.
pub fn generate_item<R: Rng>(slot: EquipmentSlot, rarity: Rarity, rng: &mut R) -> EquipmentItem {
    let base_stats = generate_stat_lines(rarity, rng);
    let primary = base_stats
        .iter()
        .max_by_key(|b| b.magnitude)
        .map(|b| b.stat)
        .unwrap_or(StatType::Strength);

    EquipmentItem {
        id: fresh_id(rng),
        name: generate_display_name(slot, rarity, primary, rng),
        slot,
        rarity,
        level: 0,
        base_stats,
        consecutive_failures: 0,
        is_equipped: false,
    }
}

fn generate_stat_lines<R: Rng>(rarity: Rarity, rng: &mut R) -> Vec<StatBonus> {
    let (min, max) = rarity.stat_range();
    let all_stats = StatType::all();

    (0..rarity.stat_lines())
        .map(|_| StatBonus {
            stat: all_stats[rng.gen_range(0..all_stats.len())],
            magnitude: rng.gen_range(min..=max),
        })
        .collect()
}
