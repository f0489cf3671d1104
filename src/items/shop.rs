//! Fixed shard shop.

use super::types::{EquipmentItem, EquipmentSlot, Rarity, StatBonus};
use crate::character::attributes::StatType;
use crate::core::error::{EngineError, EntityKind};
use crate::core::ids::fresh_id;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShopEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub slot: EquipmentSlot,
    pub rarity: Rarity,
    pub price: u64,
    pub stats: &'static [(StatType, u32)],
}

pub const SHOP_CATALOG: &[ShopEntry] = &[
    ShopEntry {
        id: "training_dagger",
        name: "Training Dagger",
        slot: EquipmentSlot::Weapon,
        rarity: Rarity::Common,
        price: 150,
        stats: &[(StatType::Strength, 3)],
    },
    ShopEntry {
        id: "runner_treads",
        name: "Runner's Treads",
        slot: EquipmentSlot::Boots,
        rarity: Rarity::Uncommon,
        price: 300,
        stats: &[(StatType::Agility, 5)],
    },
    ShopEntry {
        id: "scholar_circlet",
        name: "Scholar's Circlet",
        slot: EquipmentSlot::Helmet,
        rarity: Rarity::Uncommon,
        price: 300,
        stats: &[(StatType::Intelligence, 5)],
    },
    ShopEntry {
        id: "iron_hauberk",
        name: "Iron Hauberk",
        slot: EquipmentSlot::Armor,
        rarity: Rarity::Rare,
        price: 800,
        stats: &[(StatType::Vitality, 7), (StatType::Strength, 4)],
    },
    ShopEntry {
        id: "gambler_charm",
        name: "Gambler's Charm",
        slot: EquipmentSlot::Accessory,
        rarity: Rarity::Rare,
        price: 900,
        stats: &[(StatType::Fortune, 8), (StatType::Metabolism, 3)],
    },
    ShopEntry {
        id: "knight_gauntlets",
        name: "Knight's Gauntlets",
        slot: EquipmentSlot::Gloves,
        rarity: Rarity::Epic,
        price: 2_000,
        stats: &[(StatType::Strength, 10), (StatType::Vitality, 8)],
    },
];

pub fn find_shop_entry(entry_id: &str) -> Option<&'static ShopEntry> {
    SHOP_CATALOG.iter().find(|e| e.id == entry_id)
}

/// Build the purchased item. Price checks are the caller's job.
pub fn create_shop_item<R: Rng>(entry: &ShopEntry, rng: &mut R) -> EquipmentItem {
    EquipmentItem {
        id: fresh_id(rng),
        name: entry.name.to_string(),
        slot: entry.slot,
        rarity: entry.rarity,
        level: 0,
        base_stats: entry
            .stats
            .iter()
            .map(|&(stat, magnitude)| StatBonus { stat, magnitude })
            .collect(),
        consecutive_failures: 0,
        is_equipped: false,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PurchaseOutcome {
    Purchased {
        item: EquipmentItem,
        price: u64,
        remaining_shards: u64,
    },
    Rejected(EngineError),
}

impl PurchaseOutcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, PurchaseOutcome::Rejected(_))
    }
}

/// Buys `entry_id` with shards from the wallet.
///
/// Unknown entries and short wallets are rejected; the caller's inventory
/// and wallet are only touched on success.
pub fn purchase<R: Rng>(
    entry_id: &str,
    inventory: &mut Vec<EquipmentItem>,
    wallet_shards: &mut u64,
    rng: &mut R,
) -> PurchaseOutcome {
    let Some(entry) = find_shop_entry(entry_id) else {
        return PurchaseOutcome::Rejected(EngineError::not_found(EntityKind::ShopEntry, entry_id));
    };
    if *wallet_shards < entry.price {
        return PurchaseOutcome::Rejected(EngineError::InsufficientResource {
            needed: entry.price,
            available: *wallet_shards,
        });
    }

    *wallet_shards -= entry.price;
    let item = create_shop_item(entry, rng);
    inventory.push(item.clone());
    PurchaseOutcome::Purchased {
        item,
        price: entry.price,
        remaining_shards: *wallet_shards,
    }
}
