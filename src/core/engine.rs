//! State transitions.
//!
//! Every mutation goes through [`transition`]: it works on a copy of the
//! state and either returns the copy with the effects it produced, or, on
//! rejection, the original state and no effects. [`Engine`] is the host-side
//! owner that holds the one live state and commits transitions to it.

use super::config::BalanceConfig;
use super::error::{EngineError, EntityKind};
use super::game_state::GameState;
use super::log::{LogCategory, LogEntry};
use crate::character::buffs::StatBuff;
use crate::character::progression::{apply_xp, jump_to_level, LevelResult};
use crate::dungeon::logic::run_dungeon;
use crate::dungeon::types::DungeonRun;
use crate::enhancement::logic::attempt_upgrade;
use crate::enhancement::types::UpgradeOutcome;
use crate::items::equipment::{auto_equip_best, equip_item, find_item, unequip_item};
use crate::items::shop::{purchase, PurchaseOutcome};
use crate::rewards::types::RewardQueueItem;
use crate::shadows::logic::{equip_shadow, unequip_shadow};
use rand::Rng;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    RunDungeon { dungeon_id: String },
    UpgradeItem { item_id: String },
    ApplyXp { xp: u64 },
    /// Debug: jump straight to a level
    MaxOutLevel { target_level: u32 },
    EquipItem { item_id: String },
    /// Equip the highest-scoring item of every slot
    EquipBestGear,
    UnequipItem { item_id: String },
    EquipShadow { shadow_id: String },
    UnequipShadow { shadow_id: String },
    EquipTitle { title_id: String },
    EquipFrame { frame_id: String },
    Purchase { entry_id: String },
    ApplyBuff { buff: StatBuff },
}

#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    Dungeon(DungeonRun),
    Upgrade(UpgradeOutcome),
    Level(LevelResult),
    Purchase(PurchaseOutcome),
    /// Equip/unequip and buff commands
    Applied,
    Rejected(EngineError),
}

impl CommandOutcome {
    /// True when the command was refused and the state left untouched.
    pub fn is_rejected(&self) -> bool {
        match self {
            CommandOutcome::Rejected(_) => true,
            CommandOutcome::Upgrade(outcome) => outcome.is_rejected(),
            CommandOutcome::Purchase(outcome) => outcome.is_rejected(),
            _ => false,
        }
    }

    pub fn error(&self) -> Option<&EngineError> {
        match self {
            CommandOutcome::Rejected(err)
            | CommandOutcome::Upgrade(UpgradeOutcome::Rejected(err))
            | CommandOutcome::Purchase(PurchaseOutcome::Rejected(err)) => Some(err),
            _ => None,
        }
    }
}

/// Something a transition produced that the host may want to react to.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Reward(RewardQueueItem),
    Log(LogEntry),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: GameState,
    pub outcome: CommandOutcome,
    /// Rewards queued, then log entries appended, by this transition
    pub effects: Vec<Effect>,
}

/// Applies one command to a copy of `state`.
pub fn transition<R: Rng>(
    state: &GameState,
    command: Command,
    config: &BalanceConfig,
    rng: &mut R,
    now: i64,
) -> Transition {
    let mut next = state.clone();
    next.expire_buffs(now);
    let outcome = apply_command(&mut next, command, config, rng, now);

    if outcome.is_rejected() {
        if let Some(err) = outcome.error() {
            tracing::debug!(error = %err, "command rejected");
        }
        return Transition {
            state: state.clone(),
            outcome,
            effects: Vec::new(),
        };
    }

    let effects = new_effects(state, &next);
    Transition {
        state: next,
        outcome,
        effects,
    }
}

fn new_effects(before: &GameState, after: &GameState) -> Vec<Effect> {
    let rewards = after
        .reward_queue
        .snapshot()
        .iter()
        .skip(before.reward_queue.len())
        .cloned()
        .map(Effect::Reward);
    let logs = after
        .activity_log
        .entries()
        .iter()
        .skip(before.activity_log.len())
        .cloned()
        .map(Effect::Log);
    rewards.chain(logs).collect()
}

fn apply_command<R: Rng>(
    state: &mut GameState,
    command: Command,
    config: &BalanceConfig,
    rng: &mut R,
    now: i64,
) -> CommandOutcome {
    match command {
        Command::RunDungeon { dungeon_id } => {
            match run_dungeon(state, &dungeon_id, config, rng, now) {
                Ok(run) => CommandOutcome::Dungeon(run),
                Err(err) => CommandOutcome::Rejected(err),
            }
        }
        Command::UpgradeItem { item_id } => {
            CommandOutcome::Upgrade(upgrade_item(state, &item_id, rng, now))
        }
        Command::ApplyXp { xp } => CommandOutcome::Level(grant_xp(state, xp, config, now)),
        Command::MaxOutLevel { target_level } => {
            CommandOutcome::Level(max_out_level(state, target_level, config, now))
        }
        Command::Purchase { entry_id } => {
            let outcome = purchase(&entry_id, &mut state.equipment, &mut state.wallet.shards, rng);
            if let PurchaseOutcome::Purchased { item, price, .. } = &outcome {
                state.activity_log.push(LogEntry::new(
                    now,
                    LogCategory::Shop,
                    format!("Bought {} for {} shards", item.name, price),
                ));
            }
            CommandOutcome::Purchase(outcome)
        }
        Command::ApplyBuff { buff } => {
            state.activity_log.push(LogEntry::new(
                now,
                LogCategory::Buff,
                format!("{} (+{} {})", buff.name, buff.magnitude, buff.stat.abbrev()),
            ));
            state.buffs.push(buff);
            CommandOutcome::Applied
        }
        Command::EquipBestGear => {
            let changed = auto_equip_best(&mut state.equipment);
            if changed > 0 {
                state.activity_log.push(LogEntry::new(
                    now,
                    LogCategory::Equipment,
                    format!("Equipped {} better items", changed),
                ));
            }
            CommandOutcome::Applied
        }
        Command::EquipItem { item_id } => {
            let result = equip_item(&mut state.equipment, &item_id)
                .map(|_| format!("Equipped {}", item_label(state, &item_id)));
            log_loadout(state, result, now)
        }
        Command::UnequipItem { item_id } => {
            let result = unequip_item(&mut state.equipment, &item_id)
                .map(|_| format!("Unequipped {}", item_label(state, &item_id)));
            log_loadout(state, result, now)
        }
        Command::EquipShadow { shadow_id } => {
            let result = equip_shadow(&mut state.shadows, &shadow_id)
                .map(|_| format!("{} now fights at your side", shadow_label(state, &shadow_id)));
            log_loadout(state, result, now)
        }
        Command::UnequipShadow { shadow_id } => {
            let result = unequip_shadow(&mut state.shadows, &shadow_id)
                .map(|_| format!("{} returns to the shadows", shadow_label(state, &shadow_id)));
            log_loadout(state, result, now)
        }
        Command::EquipTitle { title_id } => {
            let result = state
                .character
                .equip_title(&title_id)
                .map(|_| format!("Title set to {}", title_id));
            log_loadout(state, result, now)
        }
        Command::EquipFrame { frame_id } => {
            let result = state
                .character
                .equip_frame(&frame_id)
                .map(|_| format!("Frame set to {}", frame_id));
            log_loadout(state, result, now)
        }
    }
}

fn log_loadout(state: &mut GameState, result: Result<String, EngineError>, now: i64) -> CommandOutcome {
    match result {
        Ok(message) => {
            state
                .activity_log
                .push(LogEntry::new(now, LogCategory::Equipment, message));
            CommandOutcome::Applied
        }
        Err(err) => CommandOutcome::Rejected(err),
    }
}

fn item_label(state: &GameState, item_id: &str) -> String {
    find_item(&state.equipment, item_id)
        .map(|i| i.display_name())
        .unwrap_or_else(|| item_id.to_string())
}

fn shadow_label(state: &GameState, shadow_id: &str) -> String {
    state
        .shadows
        .iter()
        .find(|s| s.id == shadow_id)
        .map(|s| s.display_name())
        .unwrap_or_else(|| shadow_id.to_string())
}

fn upgrade_item<R: Rng>(state: &mut GameState, item_id: &str, rng: &mut R, now: i64) -> UpgradeOutcome {
    let Some(index) = state.equipment.iter().position(|i| i.id == item_id) else {
        return UpgradeOutcome::Rejected(EngineError::not_found(EntityKind::Item, item_id));
    };

    let attempt = attempt_upgrade(&state.equipment[index], state.wallet.shards, rng);
    if attempt.outcome.is_rejected() {
        return attempt.outcome;
    }

    let message = match &attempt.outcome {
        UpgradeOutcome::Success { chance, .. } => format!(
            "Upgrade succeeded: {} ({:.0}% chance)",
            attempt.item.display_name(),
            chance * 100.0
        ),
        UpgradeOutcome::Failure {
            consecutive_failures,
            chance,
            ..
        } => format!(
            "Upgrade failed on {} ({:.0}% chance, pity x{})",
            attempt.item.display_name(),
            chance * 100.0,
            consecutive_failures
        ),
        UpgradeOutcome::Rejected(_) => String::new(),
    };
    tracing::debug!(item = %item_id, success = attempt.outcome.is_success(), "upgrade attempted");

    state.upgrade_stats.record(&attempt.outcome);
    state.equipment[index] = attempt.item;
    state.wallet.shards = attempt.wallet_shards;
    state
        .activity_log
        .push(LogEntry::new(now, LogCategory::Upgrade, message));
    attempt.outcome
}

fn record_levels(state: &mut GameState, result: &LevelResult, now: i64) {
    if !result.leveled_up {
        return;
    }
    state.activity_log.push(
        LogEntry::new(now, LogCategory::LevelUp, format!("Reached level {}", result.level))
            .with_levels(result.levels_gained, result.stat_points_granted),
    );
    state.reward_queue.push(RewardQueueItem::LevelUp {
        level: result.level,
        levels_gained: result.levels_gained,
        stat_points: result.stat_points_granted,
    });
}

fn grant_xp(state: &mut GameState, xp: u64, config: &BalanceConfig, now: i64) -> LevelResult {
    let result = apply_xp(&mut state.character, xp, config.stat_points_per_level);
    state.activity_log.push(
        LogEntry::new(now, LogCategory::Experience, format!("Gained {} XP", xp)).with_xp(xp),
    );
    record_levels(state, &result, now);
    result
}

fn max_out_level(state: &mut GameState, target_level: u32, config: &BalanceConfig, now: i64) -> LevelResult {
    let result = jump_to_level(&mut state.character, target_level, config.stat_points_per_level);
    if result.leveled_up {
        tracing::info!(target_level, "debug level jump");
        record_levels(state, &result, now);
    } else {
        state.activity_log.push(LogEntry::new(
            now,
            LogCategory::Diagnostic,
            format!("Already at level {}", result.level),
        ));
    }
    result
}

/// Host-side owner of the live state.
///
/// Each call is one atomic transition: `&mut self` makes it exclusive, and a
/// rejected call leaves the state exactly as it was.
pub struct Engine<R: Rng> {
    state: GameState,
    config: BalanceConfig,
    rng: R,
}

impl<R: Rng> Engine<R> {
    pub fn new(state: GameState, config: BalanceConfig, rng: R) -> Self {
        Self { state, config, rng }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &BalanceConfig {
        &self.config
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Runs `command` and commits the result.
    pub fn execute(&mut self, command: Command, now: i64) -> (CommandOutcome, Vec<Effect>) {
        let Transition {
            state,
            outcome,
            effects,
        } = transition(&self.state, command, &self.config, &mut self.rng, now);
        self.state = state;
        (outcome, effects)
    }

    /// Errors only when `dungeon_id` cannot be resolved.
    pub fn request_dungeon_run(&mut self, dungeon_id: &str, now: i64) -> Result<DungeonRun, EngineError> {
        let mut next = self.state.clone();
        next.expire_buffs(now);
        let run = run_dungeon(&mut next, dungeon_id, &self.config, &mut self.rng, now)?;
        self.state = next;
        Ok(run)
    }

    pub fn request_upgrade(&mut self, item_id: &str, now: i64) -> UpgradeOutcome {
        let mut next = self.state.clone();
        next.expire_buffs(now);
        let outcome = upgrade_item(&mut next, item_id, &mut self.rng, now);
        if !outcome.is_rejected() {
            self.state = next;
        }
        outcome
    }

    pub fn request_level_apply(&mut self, xp_delta: u64, now: i64) -> LevelResult {
        self.state.expire_buffs(now);
        grant_xp(&mut self.state, xp_delta, &self.config, now)
    }

    pub fn reward_queue(&self) -> &[RewardQueueItem] {
        self.state.reward_queue.snapshot()
    }

    pub fn drain_rewards(&mut self) -> Vec<RewardQueueItem> {
        self.state.reward_queue.drain()
    }
}
