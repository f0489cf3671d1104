use super::generation::generate_item;
use super::types::{EquipmentItem, EquipmentSlot, Rarity};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RarityWeight {
    pub rarity: Rarity,
    pub weight: u32,
}

/// Roll a rarity from a weight table. Returns `None` when the table is empty
/// or every weight is zero.
pub fn roll_rarity<R: Rng>(weights: &[RarityWeight], rng: &mut R) -> Option<Rarity> {
    let dist = WeightedIndex::new(weights.iter().map(|w| w.weight)).ok()?;
    Some(weights[dist.sample(rng)].rarity)
}

pub fn roll_random_slot<R: Rng>(rng: &mut R) -> EquipmentSlot {
    EquipmentSlot::ALL[rng.gen_range(0..EquipmentSlot::ALL.len())]
}

/// Zero or more drops: `rolls` independent attempts, each succeeding with
/// `chance` and then drawing a rarity from `weights`.
pub fn roll_drops<R: Rng>(
    rolls: u32,
    chance: f64,
    weights: &[RarityWeight],
    rng: &mut R,
) -> Vec<EquipmentItem> {
    let mut drops = Vec::new();
    for _ in 0..rolls {
        if rng.gen::<f64>() >= chance {
            continue;
        }
        let Some(rarity) = roll_rarity(weights, rng) else {
            break;
        };
        let slot = roll_random_slot(rng);
        drops.push(generate_item(slot, rarity, rng));
    }
    drops
}
