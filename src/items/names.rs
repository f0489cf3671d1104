use super::types::{EquipmentSlot, Rarity};
use crate::character::attributes::StatType;
use rand::seq::SliceRandom;
use rand::Rng;

pub fn base_names(slot: EquipmentSlot) -> &'static [&'static str] {
    match slot {
        EquipmentSlot::Weapon => &["Dagger", "Longsword", "Spear", "Warhammer", "Kris"],
        EquipmentSlot::Armor => &["Jerkin", "Hauberk", "Plate", "Battle Coat"],
        EquipmentSlot::Helmet => &["Hood", "Helm", "Circlet", "Visor"],
        EquipmentSlot::Gloves => &["Wraps", "Gauntlets", "Grips"],
        EquipmentSlot::Boots => &["Sandals", "Greaves", "Treads"],
        EquipmentSlot::Accessory => &["Ring", "Pendant", "Earring", "Charm"],
    }
}

pub fn rarity_prefix(rarity: Rarity) -> &'static str {
    match rarity {
        Rarity::Common => "Worn",
        Rarity::Uncommon => "Sturdy",
        Rarity::Rare => "Hunter's",
        Rarity::Epic => "Knight's",
        Rarity::Legendary => "Demon King's",
        Rarity::Mythic => "Abyssal",
        Rarity::Godlike => "Sovereign's",
        Rarity::Celestial => "Starforged",
    }
}

pub fn stat_suffix(stat: StatType) -> &'static str {
    match stat {
        StatType::Strength => "of Might",
        StatType::Vitality => "of Endurance",
        StatType::Agility => "of the Wind",
        StatType::Intelligence => "of Insight",
        StatType::Fortune => "of Fortune",
        StatType::Metabolism => "of Renewal",
    }
}

/// "<prefix> <base> <suffix>", suffix from the item's primary stat.
pub fn generate_display_name<R: Rng>(
    slot: EquipmentSlot,
    rarity: Rarity,
    primary_stat: StatType,
    rng: &mut R,
) -> String {
    let base = base_names(slot).choose(rng).copied().unwrap_or("Relic");
    format!(
        "{} {} {}",
        rarity_prefix(rarity),
        base,
        stat_suffix(primary_stat)
    )
}
