//! Stat aggregation and power calculation.
//!
//! Both functions are pure: the same inputs always produce the same power,
//! which is what lets a dungeon outcome be reproduced from state alone.

use super::attributes::{Attributes, StatType};
use super::buffs::StatBuff;
use crate::core::config::PowerWeights;
use crate::core::constants::NUM_ATTRIBUTES;
use crate::items::types::EquipmentItem;
use crate::shadows::types::ShadowCompanion;
use serde::{Deserialize, Serialize};

/// Base attributes after equipment, shadow and buff bonuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectiveStats {
    values: [u32; NUM_ATTRIBUTES],
}

impl EffectiveStats {
    pub fn get(&self, stat: StatType) -> u32 {
        self.values[stat.index()]
    }

    pub fn total(&self) -> u64 {
        self.values.iter().map(|&v| v as u64).sum()
    }
}

/// Combines base attributes with every equipped item, the equipped shadow
/// (if its bonus stat matches) and the given buffs.
///
/// Unequipped items in `equipment` are ignored. Callers filter `buffs` to
/// the ones active at the time of evaluation.
pub fn effective_stats(
    base: &Attributes,
    equipment: &[EquipmentItem],
    shadow: Option<&ShadowCompanion>,
    buffs: &[StatBuff],
) -> EffectiveStats {
    let mut values = [0u32; NUM_ATTRIBUTES];

    for stat in StatType::all() {
        let equipment_bonus: u32 = equipment
            .iter()
            .filter(|item| item.is_equipped)
            .map(|item| item.bonus_for(stat))
            .sum();

        let shadow_bonus = shadow
            .filter(|s| s.bonus.stat == stat)
            .map(|s| s.bonus.magnitude)
            .unwrap_or(0);

        let buff_bonus: u32 = buffs
            .iter()
            .filter(|b| b.stat == stat)
            .map(|b| b.magnitude)
            .sum();

        values[stat.index()] = base
            .get(stat)
            .saturating_add(equipment_bonus)
            .saturating_add(shadow_bonus)
            .saturating_add(buff_bonus);
    }

    EffectiveStats { values }
}

/// Linear reduction of effective stats, equipment levels and the shadow bonus.
pub fn power(
    stats: &EffectiveStats,
    equipment_levels: &[u8],
    shadow_bonus: Option<u32>,
    weights: &PowerWeights,
) -> u64 {
    let stat_power = stats.total().saturating_mul(weights.per_stat_point);
    let level_power = equipment_levels
        .iter()
        .map(|&l| l as u64)
        .sum::<u64>()
        .saturating_mul(weights.per_equipment_level);
    let shadow_power = (shadow_bonus.unwrap_or(0) as u64).saturating_mul(weights.per_shadow_bonus);

    stat_power.saturating_add(level_power).saturating_add(shadow_power)
}

/// Power value plus whether the fallback had to be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerReading {
    pub value: u64,
    pub used_fallback: bool,
}

/// Guards against a zero power reading for a character that has stats.
///
/// A zero here means the weights or inputs are broken; the player would be
/// locked into guaranteed defeats, so substitute
/// `sum(base) * fallback_scale * fallback_multiplier` and report it.
pub fn power_with_fallback(base: &Attributes, computed: u64, weights: &PowerWeights) -> PowerReading {
    if computed > 0 || base.is_zero() {
        return PowerReading {
            value: computed,
            used_fallback: false,
        };
    }

    let fallback = (base.total().saturating_mul(weights.fallback_scale) as f64
        * weights.fallback_multiplier)
        .floor() as u64;
    tracing::warn!(
        base_total = base.total(),
        fallback,
        "power computed as 0 for a character with stats; using fallback"
    );
    PowerReading {
        value: fallback,
        used_fallback: true,
    }
}
