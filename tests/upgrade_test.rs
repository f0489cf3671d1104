use arise::character::StatType;
use arise::enhancement::{
    attempt_upgrade, success_chance, upgrade_cost, UpgradeOutcome, UpgradeStats, MAX_ITEM_LEVEL,
    PITY_CHANCE_CAP,
};
use arise::items::{EquipmentItem, EquipmentSlot, Rarity, StatBonus};
use rand::rngs::mock::StepRng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn test_item(level: u8, consecutive_failures: u32) -> EquipmentItem {
    EquipmentItem {
        id: "blade-1".to_string(),
        name: "Test Blade".to_string(),
        slot: EquipmentSlot::Weapon,
        rarity: Rarity::Rare,
        level,
        base_stats: vec![StatBonus {
            stat: StatType::Strength,
            magnitude: 10,
        }],
        consecutive_failures,
        is_equipped: false,
    }
}

/// Rolls that always land on the failing side of any chance below 1.0.
fn always_fail() -> StepRng {
    StepRng::new(u64::MAX, 0)
}

// =========================================================================
// Success chance
// =========================================================================

#[test]
fn test_low_levels_are_guaranteed() {
    for level in 0..5 {
        assert_eq!(success_chance(level, 0), 1.0);
    }
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    for _ in 0..50 {
        let attempt = attempt_upgrade(&test_item(4, 0), 10_000, &mut rng);
        assert!(attempt.outcome.is_success());
        assert_eq!(attempt.item.level, 5);
    }
}

#[test]
fn test_pity_at_level_fifteen() {
    assert!((success_chance(15, 3) - 0.75).abs() < 1e-9);
}

#[test]
fn test_chance_stays_within_bounds() {
    for level in 0..MAX_ITEM_LEVEL {
        let base = success_chance(level, 0);
        let mut previous = base;
        for failures in 0..30 {
            let chance = success_chance(level, failures);
            assert!(chance >= base);
            assert!(chance <= PITY_CHANCE_CAP.max(base));
            assert!(chance >= previous, "pity must not reduce the chance");
            previous = chance;
        }
    }
}

// =========================================================================
// Attempts
// =========================================================================

#[test]
fn test_five_guaranteed_upgrades() {
    let mut item = test_item(0, 0);
    let mut shards = 1_500;
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let mut stats = UpgradeStats::default();

    for _ in 0..5 {
        let attempt = attempt_upgrade(&item, shards, &mut rng);
        assert!(attempt.outcome.is_success());
        stats.record(&attempt.outcome);
        item = attempt.item;
        shards = attempt.wallet_shards;
    }

    assert_eq!(item.level, 5);
    assert_eq!(shards, 0);
    // 10 -> 11 -> 12 -> 13 -> 14 -> 15, each step rounded half up
    assert_eq!(item.base_stats[0].magnitude, 15);
    assert_eq!(stats.total_attempts, 5);
    assert_eq!(stats.shards_spent, 1_500);
    assert_eq!(stats.highest_level_reached, 5);
}

#[test]
fn test_failures_build_pity_until_success() {
    let mut item = test_item(15, 0);
    let mut shards = 100_000;
    let mut fail = always_fail();
    let expected = [0.30, 0.45, 0.60, 0.75, 0.90, 0.95, 0.95];

    for (i, &chance) in expected.iter().enumerate() {
        let attempt = attempt_upgrade(&item, shards, &mut fail);
        match &attempt.outcome {
            UpgradeOutcome::Failure {
                consecutive_failures,
                shards_spent,
                chance: rolled,
                ..
            } => {
                assert_eq!(*consecutive_failures, i as u32 + 1);
                assert_eq!(*shards_spent, upgrade_cost(15));
                assert!((rolled - chance).abs() < 1e-9);
            }
            other => panic!("expected failure, got {other:?}"),
        }
        item = attempt.item;
        shards = attempt.wallet_shards;
    }
    assert_eq!(item.level, 15);
    assert_eq!(shards, 100_000 - 7 * upgrade_cost(15));

    let attempt = attempt_upgrade(&item, shards, &mut StepRng::new(0, 0));
    assert!(attempt.outcome.is_success());
    assert_eq!(attempt.item.level, 16);
    assert_eq!(attempt.item.consecutive_failures, 0);
}

#[test]
fn test_rejections_change_nothing() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    let maxed = test_item(MAX_ITEM_LEVEL, 2);
    let attempt = attempt_upgrade(&maxed, 1_000_000, &mut rng);
    assert!(attempt.outcome.is_rejected());
    assert_eq!(attempt.item, maxed);
    assert_eq!(attempt.wallet_shards, 1_000_000);
    assert_eq!(attempt.outcome.shards_spent(), 0);

    let poor = test_item(9, 1);
    let attempt = attempt_upgrade(&poor, upgrade_cost(9) - 1, &mut rng);
    assert!(attempt.outcome.is_rejected());
    assert_eq!(attempt.item, poor);
    assert_eq!(attempt.wallet_shards, upgrade_cost(9) - 1);
}

#[test]
fn test_upgrade_to_max_terminates() {
    let mut item = test_item(0, 0);
    let mut shards = u64::MAX / 2;
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let mut attempts = 0;

    while item.level < MAX_ITEM_LEVEL {
        let attempt = attempt_upgrade(&item, shards, &mut rng);
        assert!(!attempt.outcome.is_rejected());
        item = attempt.item;
        shards = attempt.wallet_shards;
        attempts += 1;
        assert!(attempts < 1_000, "pity should bound the number of attempts");
    }

    let attempt = attempt_upgrade(&item, shards, &mut rng);
    assert!(attempt.outcome.is_rejected());
}
