//! Level progression: XP thresholds, multi-level resolution and stat grants.

use super::stats::CharacterStats;
use crate::core::constants::{MAX_CHARACTER_LEVEL, XP_CURVE_BASE, XP_CURVE_EXPONENT};
use serde::{Deserialize, Serialize};

/// XP required to advance from `level` to `level + 1`.
///
/// Strictly increasing in `level`.
pub fn xp_for_next_level(level: u32) -> u64 {
    let level = level.max(1);
    (XP_CURVE_BASE * f64::powf(level as f64, XP_CURVE_EXPONENT)) as u64
}

/// Outcome of applying XP (or a forced level jump) to a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelResult {
    pub level: u32,
    pub xp_current: u64,
    pub xp_for_next_level: u64,
    pub leveled_up: bool,
    pub levels_gained: u32,
    /// Points added to each of the six attributes
    pub stat_points_granted: u32,
}

impl LevelResult {
    fn snapshot(stats: &CharacterStats, levels_gained: u32, points_per_level: u32) -> Self {
        Self {
            level: stats.level,
            xp_current: stats.xp_current,
            xp_for_next_level: stats.xp_for_next_level,
            leveled_up: levels_gained > 0,
            levels_gained,
            stat_points_granted: levels_gained.saturating_mul(points_per_level),
        }
    }
}

/// Applies XP and resolves every level-up it pays for.
///
/// Leveling stops at `MAX_CHARACTER_LEVEL`; XP past the cap is kept.
pub fn apply_xp(stats: &mut CharacterStats, xp_gained: u64, points_per_level: u32) -> LevelResult {
    stats.xp_current = stats.xp_current.saturating_add(xp_gained);

    let mut levels_gained = 0;
    while stats.level < MAX_CHARACTER_LEVEL {
        let xp_needed = xp_for_next_level(stats.level);
        if stats.xp_current < xp_needed {
            break;
        }
        stats.xp_current -= xp_needed;
        stats.level += 1;
        stats.attributes.increase_all(points_per_level);
        levels_gained += 1;
    }
    stats.xp_for_next_level = xp_for_next_level(stats.level);

    LevelResult::snapshot(stats, levels_gained, points_per_level)
}

/// Forces the character up to `target_level` (debug "max out" path).
///
/// Grants the same per-level attributes as regular leveling and never lowers
/// the level. XP carried into the new level is reset. Targets above
/// `MAX_CHARACTER_LEVEL` are clamped to it.
pub fn jump_to_level(stats: &mut CharacterStats, target_level: u32, points_per_level: u32) -> LevelResult {
    let target_level = target_level.min(MAX_CHARACTER_LEVEL);
    if target_level <= stats.level {
        return LevelResult::snapshot(stats, 0, points_per_level);
    }

    let levels_gained = target_level - stats.level;
    stats.attributes.increase_all(levels_gained.saturating_mul(points_per_level));
    stats.level = target_level;
    stats.xp_current = 0;
    stats.xp_for_next_level = xp_for_next_level(target_level);

    LevelResult::snapshot(stats, levels_gained, points_per_level)
}
