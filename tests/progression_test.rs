use arise::character::{apply_xp, jump_to_level, xp_for_next_level, CharacterStats, StatType};
use arise::core::constants::MAX_CHARACTER_LEVEL;
use arise::core::{BalanceConfig, Command, CommandOutcome, Engine, GameState, LogCategory};
use arise::rewards::RewardQueueItem;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// =========================================================================
// XP curve
// =========================================================================

#[test]
fn test_exact_xp_for_three_levels() {
    let mut stats = CharacterStats::new();
    let xp = xp_for_next_level(1) + xp_for_next_level(2) + xp_for_next_level(3);
    assert_eq!(xp, 901);

    let result = apply_xp(&mut stats, xp, 1);
    assert_eq!(result.level, 4);
    assert_eq!(result.levels_gained, 3);
    assert_eq!(result.stat_points_granted, 3);
    assert_eq!(stats.xp_current, 0);
    for stat in StatType::all() {
        assert_eq!(stats.attributes.get(stat), 13);
    }
}

#[test]
fn test_xp_one_short_keeps_level() {
    let mut stats = CharacterStats::new();
    let result = apply_xp(&mut stats, 99, 1);
    assert!(!result.leveled_up);
    assert_eq!(stats.level, 1);
    assert_eq!(stats.xp_current, 99);
    assert_eq!(stats.xp_for_next_level, 100);
}

#[test]
fn test_xp_spread_over_calls_matches_single_grant() {
    let mut split = CharacterStats::new();
    for _ in 0..10 {
        apply_xp(&mut split, 250, 1);
    }
    let mut single = CharacterStats::new();
    apply_xp(&mut single, 2_500, 1);

    assert_eq!(split.level, single.level);
    assert_eq!(split.xp_current, single.xp_current);
    assert_eq!(split.attributes, single.attributes);
}

#[test]
fn test_jump_to_level_never_lowers() {
    let mut stats = CharacterStats::new();
    let up = jump_to_level(&mut stats, 50, 1);
    assert_eq!(up.levels_gained, 49);
    assert_eq!(stats.attributes.get(StatType::Fortune), 59);

    let down = jump_to_level(&mut stats, 10, 1);
    assert!(!down.leveled_up);
    assert_eq!(stats.level, 50);
}

// =========================================================================
// Through the engine
// =========================================================================

#[test]
fn test_apply_xp_queues_one_level_up() {
    let mut engine = Engine::new(
        GameState::new(),
        BalanceConfig::default(),
        ChaCha8Rng::seed_from_u64(1),
    );
    let result = engine.request_level_apply(901, 10);
    assert_eq!(result.levels_gained, 3);

    let rewards = engine.drain_rewards();
    assert_eq!(rewards.len(), 1);
    match &rewards[0] {
        RewardQueueItem::LevelUp {
            level,
            levels_gained,
            stat_points,
        } => {
            assert_eq!(*level, 4);
            assert_eq!(*levels_gained, 3);
            assert_eq!(*stat_points, 3);
        }
        other => panic!("expected a level-up, got {other:?}"),
    }

    let log = &engine.state().activity_log;
    assert_eq!(log.count(LogCategory::Experience), 1);
    assert_eq!(log.count(LogCategory::LevelUp), 1);
}

#[test]
fn test_zero_xp_changes_nothing_but_the_log() {
    let mut engine = Engine::new(
        GameState::new(),
        BalanceConfig::default(),
        ChaCha8Rng::seed_from_u64(2),
    );
    let before = engine.state().character.clone();
    let result = engine.request_level_apply(0, 0);

    assert!(!result.leveled_up);
    assert_eq!(engine.state().character, before);
    assert!(engine.reward_queue().is_empty());
}

#[test]
fn test_max_out_level_through_execute() {
    let mut engine = Engine::new(
        GameState::new(),
        BalanceConfig::default(),
        ChaCha8Rng::seed_from_u64(3),
    );
    let (outcome, effects) = engine.execute(Command::MaxOutLevel { target_level: 100 }, 0);

    match outcome {
        CommandOutcome::Level(result) => assert_eq!(result.level, 100),
        other => panic!("expected a level result, got {other:?}"),
    }
    assert!(!effects.is_empty());
    assert_eq!(engine.state().character.level, 100);
    assert_eq!(engine.state().character.attributes.get(StatType::Strength), 109);
}

#[test]
fn test_level_cap_holds_through_the_engine() {
    let mut engine = Engine::new(
        GameState::new(),
        BalanceConfig::default(),
        ChaCha8Rng::seed_from_u64(4),
    );
    let (outcome, _) = engine.execute(Command::MaxOutLevel { target_level: u32::MAX }, 0);
    match outcome {
        CommandOutcome::Level(result) => assert_eq!(result.level, MAX_CHARACTER_LEVEL),
        other => panic!("expected a level result, got {other:?}"),
    }

    let (outcome, _) = engine.execute(Command::ApplyXp { xp: 28_147_497_661_235_200 }, 1);
    assert!(!outcome.is_rejected());
    let result = engine.request_level_apply(u64::MAX, 2);
    assert_eq!(result.level, MAX_CHARACTER_LEVEL);
    assert_eq!(engine.state().character.level, MAX_CHARACTER_LEVEL);
    assert_eq!(engine.state().character.xp_current, u64::MAX);
}
