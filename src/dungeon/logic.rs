//! Dungeon resolution: look up, compare power, hand out rewards.

use super::data::resolve_dungeon;
use super::rewards::generate_rewards;
use super::types::{DungeonRun, DungeonRunResult};
use crate::character::progression::apply_xp;
use crate::core::config::BalanceConfig;
use crate::core::error::EngineError;
use crate::core::game_state::GameState;
use crate::core::ids::fresh_id;
use crate::core::log::{LogCategory, LogEntry};
use crate::rewards::types::RewardQueueItem;
use crate::shadows::logic::grant_shadow_xp;
use rand::Rng;

/// Resolves one dungeon run against the current state.
///
/// An unknown id is rejected before anything is touched. Victory is decided
/// by `power >= recommended_power` alone; the RNG only drives loot and ids.
/// A defeat records the run and a log entry and changes nothing else.
pub fn run_dungeon<R: Rng>(
    state: &mut GameState,
    dungeon_id: &str,
    config: &BalanceConfig,
    rng: &mut R,
    now: i64,
) -> Result<DungeonRun, EngineError> {
    let dungeon = resolve_dungeon(dungeon_id, config)?;

    let power = state.power(&config.power, now);
    if power.used_fallback {
        state.activity_log.push(LogEntry::new(
            now,
            LogCategory::Diagnostic,
            format!("Power fell back to {} while entering {}", power.value, dungeon.name),
        ));
    }

    let victory = power.value >= dungeon.recommended_power;
    tracing::debug!(
        dungeon = %dungeon.id,
        power = power.value,
        required = dungeon.recommended_power,
        victory,
        "dungeon resolved"
    );

    let mut result = DungeonRunResult {
        id: fresh_id(rng),
        dungeon_id: dungeon.id.clone(),
        victory,
        timestamp: now,
        xp_earned: 0,
        equipment_awarded: Vec::new(),
        unlocked_title: None,
        unlocked_frame: None,
        shards_earned: None,
        extracted_shadow: None,
        floor: dungeon.floor,
    };

    if !victory {
        state.activity_log.push(LogEntry::new(
            now,
            LogCategory::Defeat,
            format!(
                "Defeated in {} ({} power vs {} required)",
                dungeon.name, power.value, dungeon.recommended_power
            ),
        ));
        state.run_history.push(result.clone());
        return Ok(DungeonRun {
            result,
            boss: dungeon.boss,
            power,
            recommended_power: dungeon.recommended_power,
            level: None,
            shadow_progress: None,
            extracted_shadow: None,
        });
    }

    let xp = dungeon.rewards.base_xp;
    state.activity_log.push(
        LogEntry::new(now, LogCategory::Dungeon, format!("Cleared {}", dungeon.name)).with_xp(xp),
    );

    let generated = generate_rewards(state, &dungeon, config, rng, now);

    let level = apply_xp(&mut state.character, xp, config.stat_points_per_level);
    if level.leveled_up {
        state.activity_log.push(
            LogEntry::new(now, LogCategory::LevelUp, format!("Reached level {}", level.level))
                .with_levels(level.levels_gained, level.stat_points_granted),
        );
        state.reward_queue.push(RewardQueueItem::LevelUp {
            level: level.level,
            levels_gained: level.levels_gained,
            stat_points: level.stat_points_granted,
        });
    }

    let shadow_progress = grant_shadow_xp(&mut state.shadows, xp, config.shadow_xp_share_percent);
    if let Some(progress) = shadow_progress.as_ref().filter(|p| p.evolved()) {
        state.activity_log.push(LogEntry::new(
            now,
            LogCategory::Shadow,
            format!("{} evolved", progress.name),
        ));
    }

    result.xp_earned = xp;
    result.equipment_awarded = generated.item_ids;
    result.unlocked_title = generated.unlocked_title;
    result.unlocked_frame = generated.unlocked_frame;
    result.shards_earned = Some(generated.shards);
    result.extracted_shadow = generated.extracted_shadow.as_ref().map(|s| s.name.clone());
    state.run_history.push(result.clone());

    tracing::info!(
        dungeon = %dungeon.id,
        xp,
        shards = generated.shards,
        items = result.equipment_awarded.len(),
        level = level.level,
        "dungeon cleared"
    );

    Ok(DungeonRun {
        result,
        boss: dungeon.boss,
        power,
        recommended_power: dungeon.recommended_power,
        level: Some(level),
        shadow_progress,
        extracted_shadow: generated.extracted_shadow,
    })
}
