use crate::items::types::EquipmentItem;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Currency {
    Shards,
}

impl Currency {
    pub fn name(&self) -> &'static str {
        match self {
            Currency::Shards => "Shards",
        }
    }
}

/// One thing the player earned, waiting to be presented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RewardQueueItem {
    LevelUp {
        level: u32,
        levels_gained: u32,
        stat_points: u32,
    },
    Item {
        item: EquipmentItem,
    },
    Title {
        id: String,
        name: String,
    },
    Frame {
        id: String,
        name: String,
    },
    Currency {
        currency: Currency,
        amount: u64,
    },
}

impl RewardQueueItem {
    pub fn display_name(&self) -> String {
        match self {
            RewardQueueItem::LevelUp { level, .. } => format!("Level {}", level),
            RewardQueueItem::Item { item } => item.display_name(),
            RewardQueueItem::Title { name, .. } => format!("Title: {}", name),
            RewardQueueItem::Frame { name, .. } => format!("Frame: {}", name),
            RewardQueueItem::Currency { currency, amount } => {
                format!("{} {}", amount, currency.name())
            }
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            RewardQueueItem::LevelUp { .. } => "▲",
            RewardQueueItem::Item { item } => item.rarity.icon(),
            RewardQueueItem::Title { .. } => "♛",
            RewardQueueItem::Frame { .. } => "▣",
            RewardQueueItem::Currency { .. } => "◈",
        }
    }

    /// Headline number for the reward: the new level, the item level,
    /// the currency amount, or 1 for a cosmetic unlock.
    pub fn value(&self) -> u64 {
        match self {
            RewardQueueItem::LevelUp { level, .. } => *level as u64,
            RewardQueueItem::Item { item } => item.level as u64,
            RewardQueueItem::Title { .. } | RewardQueueItem::Frame { .. } => 1,
            RewardQueueItem::Currency { amount, .. } => *amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagged_serialization() {
        let reward = RewardQueueItem::Currency {
            currency: Currency::Shards,
            amount: 40,
        };
        let json = serde_json::to_string(&reward).unwrap();
        assert_eq!(json, r#"{"type":"currency","currency":"shards","amount":40}"#);
        let back: RewardQueueItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, reward);
    }

    #[test]
    fn test_display_and_value() {
        let level_up = RewardQueueItem::LevelUp {
            level: 7,
            levels_gained: 2,
            stat_points: 2,
        };
        assert_eq!(level_up.display_name(), "Level 7");
        assert_eq!(level_up.value(), 7);

        let title = RewardQueueItem::Title {
            id: "gate_breaker".to_string(),
            name: "Gate Breaker".to_string(),
        };
        assert_eq!(title.display_name(), "Title: Gate Breaker");
        assert_eq!(title.value(), 1);
    }
}
