use crate::character::attributes::StatType;
use crate::core::constants::EQUIPMENT_LEVEL_SCALING_TENTHS;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentSlot {
    Weapon,
    Armor,
    Helmet,
    Gloves,
    Boots,
    Accessory,
}

impl EquipmentSlot {
    pub const ALL: [EquipmentSlot; 6] = [
        EquipmentSlot::Weapon,
        EquipmentSlot::Armor,
        EquipmentSlot::Helmet,
        EquipmentSlot::Gloves,
        EquipmentSlot::Boots,
        EquipmentSlot::Accessory,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EquipmentSlot::Weapon => "Weapon",
            EquipmentSlot::Armor => "Armor",
            EquipmentSlot::Helmet => "Helmet",
            EquipmentSlot::Gloves => "Gloves",
            EquipmentSlot::Boots => "Boots",
            EquipmentSlot::Accessory => "Accessory",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common = 0,
    Uncommon = 1,
    Rare = 2,
    Epic = 3,
    Legendary = 4,
    Mythic = 5,
    Godlike = 6,
    Celestial = 7,
}

impl Rarity {
    pub const ALL: [Rarity; 8] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
        Rarity::Mythic,
        Rarity::Godlike,
        Rarity::Celestial,
    ];

    /// Returns the display name for this rarity tier.
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
            Rarity::Mythic => "Mythic",
            Rarity::Godlike => "Godlike",
            Rarity::Celestial => "Celestial",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Rarity::Common => "◇",
            Rarity::Uncommon => "◆",
            Rarity::Rare => "✦",
            Rarity::Epic => "✧",
            Rarity::Legendary => "★",
            Rarity::Mythic => "✪",
            Rarity::Godlike => "☀",
            Rarity::Celestial => "✺",
        }
    }

    /// Inclusive magnitude range for a freshly rolled stat line.
    pub fn stat_range(&self) -> (u32, u32) {
        match self {
            Rarity::Common => (1, 3),
            Rarity::Uncommon => (2, 5),
            Rarity::Rare => (4, 8),
            Rarity::Epic => (7, 12),
            Rarity::Legendary => (11, 18),
            Rarity::Mythic => (16, 26),
            Rarity::Godlike => (24, 36),
            Rarity::Celestial => (34, 50),
        }
    }

    /// Number of stat lines rolled on a new item.
    pub fn stat_lines(&self) -> usize {
        match self {
            Rarity::Common | Rarity::Uncommon => 1,
            Rarity::Rare | Rarity::Epic => 2,
            Rarity::Legendary | Rarity::Mythic => 3,
            Rarity::Godlike | Rarity::Celestial => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBonus {
    pub stat: StatType,
    pub magnitude: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentItem {
    pub id: String,
    pub name: String,
    pub slot: EquipmentSlot,
    pub rarity: Rarity,
    /// Upgrade level, 0..=20
    pub level: u8,
    pub base_stats: Vec<StatBonus>,
    /// Pity counter for the upgrade engine
    #[serde(default)]
    pub consecutive_failures: u32,
    #[serde(default)]
    pub is_equipped: bool,
}

impl EquipmentItem {
    /// Bonus this item contributes to `stat`, scaled by upgrade level:
    /// floor(base * (1 + level * 0.1)) per stat line.
    pub fn bonus_for(&self, stat: StatType) -> u32 {
        self.base_stats
            .iter()
            .filter(|b| b.stat == stat)
            .map(|b| scaled_bonus(b.magnitude, self.level))
            .sum()
    }

    /// Sum of all level-scaled stat lines, used to compare items.
    pub fn score(&self) -> u32 {
        self.base_stats
            .iter()
            .map(|b| scaled_bonus(b.magnitude, self.level))
            .sum()
    }

    pub fn display_name(&self) -> String {
        if self.level == 0 {
            self.name.clone()
        } else {
            format!("+{} {}", self.level, self.name)
        }
    }
}

/// floor(base * (1 + level * 0.1)), computed in integer tenths.
pub fn scaled_bonus(base_value: u32, level: u8) -> u32 {
    let tenths = 10 + level as u64 * EQUIPMENT_LEVEL_SCALING_TENTHS as u64;
    ((base_value as u64 * tenths) / 10).min(u32::MAX as u64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sword(level: u8) -> EquipmentItem {
        EquipmentItem {
            id: "sword-1".to_string(),
            name: "Rusted Blade".to_string(),
            slot: EquipmentSlot::Weapon,
            rarity: Rarity::Rare,
            level,
            base_stats: vec![
                StatBonus {
                    stat: StatType::Strength,
                    magnitude: 10,
                },
                StatBonus {
                    stat: StatType::Strength,
                    magnitude: 5,
                },
                StatBonus {
                    stat: StatType::Agility,
                    magnitude: 7,
                },
            ],
            consecutive_failures: 0,
            is_equipped: true,
        }
    }

    #[test]
    fn test_rarity_ordering() {
        for pair in Rarity::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert!(Rarity::Common < Rarity::Celestial);
    }

    #[test]
    fn test_stat_range_grows_with_rarity() {
        for pair in Rarity::ALL.windows(2) {
            assert!(pair[0].stat_range().1 < pair[1].stat_range().1);
        }
    }

    #[test]
    fn test_scaled_bonus() {
        assert_eq!(scaled_bonus(10, 0), 10);
        assert_eq!(scaled_bonus(10, 3), 13);
        assert_eq!(scaled_bonus(7, 5), 10); // floor(10.5)
        assert_eq!(scaled_bonus(10, 20), 30);
    }

    #[test]
    fn test_bonus_for_sums_matching_lines() {
        let item = sword(0);
        assert_eq!(item.bonus_for(StatType::Strength), 15);
        assert_eq!(item.bonus_for(StatType::Agility), 7);
        assert_eq!(item.bonus_for(StatType::Fortune), 0);
    }

    #[test]
    fn test_bonus_for_scales_each_line() {
        let item = sword(5);
        // floor(10 * 1.5) + floor(5 * 1.5) = 15 + 7
        assert_eq!(item.bonus_for(StatType::Strength), 22);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(sword(0).display_name(), "Rusted Blade");
        assert_eq!(sword(4).display_name(), "+4 Rusted Blade");
    }

    #[test]
    fn test_score() {
        assert_eq!(sword(0).score(), 22);
    }
}
