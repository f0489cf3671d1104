use super::types::*;
use crate::core::error::EngineError;
use crate::items::types::EquipmentItem;
use rand::Rng;

/// The item and wallet after an upgrade attempt, plus what happened.
#[derive(Debug, Clone, PartialEq)]
pub struct UpgradeAttempt {
    pub item: EquipmentItem,
    pub wallet_shards: u64,
    pub outcome: UpgradeOutcome,
}

/// Check an upgrade can be attempted without changing anything.
pub fn validate_upgrade(item: &EquipmentItem, wallet_shards: u64) -> Result<u64, EngineError> {
    if item.level >= MAX_ITEM_LEVEL {
        return Err(EngineError::MaxLevel {
            item_id: item.id.clone(),
            max_level: MAX_ITEM_LEVEL,
        });
    }
    let cost = upgrade_cost(item.level);
    if wallet_shards < cost {
        return Err(EngineError::InsufficientResource {
            needed: cost,
            available: wallet_shards,
        });
    }
    Ok(cost)
}

/// Attempt a pity-adjusted upgrade.
///
/// The cost is consumed whether the roll succeeds or not. A rejected attempt
/// returns the item and wallet unchanged.
pub fn attempt_upgrade<R: Rng>(
    item: &EquipmentItem,
    wallet_shards: u64,
    rng: &mut R,
) -> UpgradeAttempt {
    let cost = match validate_upgrade(item, wallet_shards) {
        Ok(cost) => cost,
        Err(err) => {
            return UpgradeAttempt {
                item: item.clone(),
                wallet_shards,
                outcome: UpgradeOutcome::Rejected(err),
            }
        }
    };

    let chance = success_chance(item.level, item.consecutive_failures);
    let mut upgraded = item.clone();
    let wallet_shards = wallet_shards - cost;

    let outcome = if rng.gen::<f64>() < chance {
        upgraded.level += 1;
        upgraded.consecutive_failures = 0;
        for line in upgraded.base_stats.iter_mut() {
            line.magnitude = grow_stat(line.magnitude);
        }
        UpgradeOutcome::Success {
            item_id: upgraded.id.clone(),
            new_level: upgraded.level,
            shards_spent: cost,
            chance,
        }
    } else {
        upgraded.consecutive_failures += 1;
        UpgradeOutcome::Failure {
            item_id: upgraded.id.clone(),
            level: upgraded.level,
            consecutive_failures: upgraded.consecutive_failures,
            shards_spent: cost,
            chance,
        }
    };

    UpgradeAttempt {
        item: upgraded,
        wallet_shards,
        outcome,
    }
}
