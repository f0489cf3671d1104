use arise::core::{BalanceConfig, Engine, GameState, SaveError};
use arise::rewards::RewardQueueItem;
use arise::save::{load_state, save_state};
use arise::shadows::EvolutionThreshold;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn played_state(seed: u64) -> GameState {
    let mut engine = Engine::new(
        GameState::new(),
        BalanceConfig::default(),
        ChaCha8Rng::seed_from_u64(seed),
    );
    for (now, dungeon) in ["goblin_den", "dungeon_1", "dungeon_2", "cursed_crypt"].iter().enumerate() {
        engine.request_dungeon_run(dungeon, now as i64).unwrap();
    }
    engine.into_state()
}

#[test]
fn test_round_trip_after_play() {
    let state = played_state(1);
    assert!(!state.run_history.is_empty());
    assert!(!state.activity_log.is_empty());

    let loaded = load_state(&save_state(&state).unwrap()).unwrap();
    assert_eq!(loaded, state);
}

#[test]
fn test_undrained_rewards_survive_reload() {
    let state = played_state(2);
    let pending = state.reward_queue.snapshot().to_vec();
    assert!(!pending.is_empty());

    let mut engine = Engine::new(
        load_state(&save_state(&state).unwrap()).unwrap(),
        BalanceConfig::default(),
        ChaCha8Rng::seed_from_u64(3),
    );
    assert_eq!(engine.reward_queue(), pending.as_slice());
    assert_eq!(engine.drain_rewards(), pending);
    assert!(engine.reward_queue().is_empty());
}

#[test]
fn test_partial_drain_resumes_after_reload() {
    let mut state = played_state(4);
    let first_batch = state.reward_queue.drain();
    assert!(!first_batch.is_empty());

    let mut engine = Engine::new(
        load_state(&save_state(&state).unwrap()).unwrap(),
        BalanceConfig::default(),
        ChaCha8Rng::seed_from_u64(5),
    );
    assert!(engine.reward_queue().is_empty());

    engine.request_dungeon_run("goblin_den", 10).unwrap();
    let second_batch = engine.drain_rewards();
    assert!(!second_batch.is_empty());
    // Items carry fresh ids, so nothing from the first batch can come back
    assert!(second_batch
        .iter()
        .filter(|r| matches!(r, RewardQueueItem::Item { .. }))
        .all(|r| !first_batch.contains(r)));
}

#[test]
fn test_v1_save_with_shadows_loads_current_schema() {
    let json = r#"{
        "version": 1,
        "character": {
            "level": 12,
            "xp_current": 40,
            "xp_for_next_level": 4156,
            "attributes": { "values": [21, 21, 21, 21, 21, 21] },
            "unlocked_titles": ["crypt_walker"]
        },
        "shadows": [
            {
                "id": "sh-1",
                "name": "Grimbone",
                "rank": "D",
                "bonus": { "stat": "Vitality", "magnitude": 8 },
                "is_equipped": true
            },
            {
                "id": "sh-2",
                "name": "Kestrel",
                "rank": "C",
                "bonus": { "stat": "Agility", "magnitude": 12 }
            }
        ],
        "wallet": { "shards": 320 }
    }"#;

    let state = load_state(json).unwrap();
    assert_eq!(state.version, 2);
    assert_eq!(state.wallet.shards, 320);
    assert_eq!(state.shadows.len(), 2);
    for shadow in &state.shadows {
        assert_eq!(shadow.evolution_level, 0);
        assert_eq!(shadow.experience_points, 0);
        assert_eq!(shadow.xp_to_next_evolution, EvolutionThreshold::Points(500));
    }
    assert_eq!(state.equipped_shadow().map(|s| s.name.as_str()), Some("Grimbone"));

    // Saving again writes the current schema, which loads unchanged
    let reloaded = load_state(&save_state(&state).unwrap()).unwrap();
    assert_eq!(reloaded, state);
}

#[test]
fn test_newer_save_is_refused() {
    let json = r#"{ "version": 99, "character": {} }"#;
    match load_state(json) {
        Err(SaveError::UnsupportedVersion { found, supported }) => {
            assert_eq!(found, 99);
            assert_eq!(supported, 2);
        }
        other => panic!("expected an unsupported version, got {other:?}"),
    }
}
