//! Loot, unlocks, extraction and shards for a cleared dungeon.

use super::types::DungeonDefinition;
use crate::core::config::BalanceConfig;
use crate::core::game_state::GameState;
use crate::core::log::{LogCategory, LogEntry};
use crate::core::rank::Rank;
use crate::items::drops::roll_drops;
use crate::rewards::types::{Currency, RewardQueueItem};
use crate::shadows::logic::extract_shadow;
use crate::shadows::types::ShadowCompanion;
use rand::Rng;

/// Shards for clearing a dungeon of `rank`.
pub fn shard_reward(rank: Rank, config: &BalanceConfig) -> u64 {
    let multiplier = rank.difficulty_multiplier() as f64;
    (config.shard_reward_base * (1.0 + multiplier * config.shard_difficulty_factor))
        .floor()
        .max(0.0) as u64
}

/// What a victory handed out, for the run record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratedRewards {
    pub item_ids: Vec<String>,
    pub unlocked_title: Option<String>,
    pub unlocked_frame: Option<String>,
    pub shards: u64,
    pub extracted_shadow: Option<ShadowCompanion>,
}

/// Applies a victory's rewards to `state`.
///
/// Queue order is equipment, title, frame, shards. Titles and frames the
/// player already owns are skipped without a queue item. An extracted shadow
/// is logged but not queued.
pub fn generate_rewards<R: Rng>(
    state: &mut GameState,
    dungeon: &DungeonDefinition,
    config: &BalanceConfig,
    rng: &mut R,
    now: i64,
) -> GeneratedRewards {
    let mut generated = GeneratedRewards::default();
    let table = &dungeon.rewards;

    for item in roll_drops(table.drop_rolls, table.drop_chance, &table.rarity_weights, rng) {
        state.activity_log.push(LogEntry::new(
            now,
            LogCategory::Loot,
            format!("Found {} [{}]", item.display_name(), item.rarity.name()),
        ));
        generated.item_ids.push(item.id.clone());
        state.reward_queue.push(RewardQueueItem::Item { item: item.clone() });
        state.equipment.push(item);
    }

    if let Some(title) = &table.title_unlock {
        if state.character.unlock_title(&title.id) {
            state.activity_log.push(LogEntry::new(
                now,
                LogCategory::Unlock,
                format!("Title unlocked: {}", title.name),
            ));
            state.reward_queue.push(RewardQueueItem::Title {
                id: title.id.clone(),
                name: title.name.clone(),
            });
            generated.unlocked_title = Some(title.id.clone());
        }
    }

    if let Some(frame) = &table.frame_unlock {
        if state.character.unlock_frame(&frame.id) {
            state.activity_log.push(LogEntry::new(
                now,
                LogCategory::Unlock,
                format!("Frame unlocked: {}", frame.name),
            ));
            state.reward_queue.push(RewardQueueItem::Frame {
                id: frame.id.clone(),
                name: frame.name.clone(),
            });
            generated.unlocked_frame = Some(frame.id.clone());
        }
    }

    if let Some(boss) = dungeon.boss.as_ref().filter(|b| b.can_extract) {
        if let Some(shadow) = extract_shadow(&mut state.shadows, &boss.shadow, rng) {
            state.activity_log.push(LogEntry::new(
                now,
                LogCategory::Shadow,
                format!("Arise! {} joins your shadow army", shadow.name),
            ));
            generated.extracted_shadow = Some(shadow);
        } else {
            tracing::debug!(shadow = %boss.shadow.name, "shadow already owned; skipping extraction");
        }
    }

    let shards = shard_reward(dungeon.rank, config);
    state.wallet.shards = state.wallet.shards.saturating_add(shards);
    state.reward_queue.push(RewardQueueItem::Currency {
        currency: Currency::Shards,
        amount: shards,
    });
    generated.shards = shards;

    generated
}
