use crate::core::constants::{BASE_ATTRIBUTE_VALUE, NUM_ATTRIBUTES};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum StatType {
    Strength,
    Vitality,
    Agility,
    Intelligence,
    Fortune,
    Metabolism,
}

impl StatType {
    pub fn all() -> [StatType; NUM_ATTRIBUTES] {
        [
            StatType::Strength,
            StatType::Vitality,
            StatType::Agility,
            StatType::Intelligence,
            StatType::Fortune,
            StatType::Metabolism,
        ]
    }

    pub fn abbrev(&self) -> &'static str {
        match self {
            StatType::Strength => "STR",
            StatType::Vitality => "VIT",
            StatType::Agility => "AGI",
            StatType::Intelligence => "INT",
            StatType::Fortune => "FOR",
            StatType::Metabolism => "MET",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            StatType::Strength => 0,
            StatType::Vitality => 1,
            StatType::Agility => 2,
            StatType::Intelligence => 3,
            StatType::Fortune => 4,
            StatType::Metabolism => 5,
        }
    }
}

/// The six base attributes of a character.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attributes {
    values: [u32; NUM_ATTRIBUTES],
}

impl Default for Attributes {
    fn default() -> Self {
        Self::new()
    }
}

impl Attributes {
    pub fn new() -> Self {
        Self {
            values: [BASE_ATTRIBUTE_VALUE; NUM_ATTRIBUTES],
        }
    }

    pub fn zero() -> Self {
        Self {
            values: [0; NUM_ATTRIBUTES],
        }
    }

    pub fn get(&self, stat: StatType) -> u32 {
        self.values[stat.index()]
    }

    pub fn set(&mut self, stat: StatType, value: u32) {
        self.values[stat.index()] = value;
    }

    /// Raises every attribute by `amount` (level-up grant).
    pub fn increase_all(&mut self, amount: u32) {
        for value in self.values.iter_mut() {
            *value = value.saturating_add(amount);
        }
    }

    pub fn total(&self) -> u64 {
        self.values.iter().map(|&v| v as u64).sum()
    }

    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|&v| v == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_attributes() {
        let attrs = Attributes::new();
        for stat in StatType::all() {
            assert_eq!(attrs.get(stat), 10);
        }
        assert_eq!(attrs.total(), 60);
    }

    #[test]
    fn test_get_set() {
        let mut attrs = Attributes::new();
        attrs.set(StatType::Fortune, 16);
        assert_eq!(attrs.get(StatType::Fortune), 16);
        assert_eq!(attrs.get(StatType::Metabolism), 10);
    }

    #[test]
    fn test_increase_all() {
        let mut attrs = Attributes::new();
        attrs.increase_all(3);
        for stat in StatType::all() {
            assert_eq!(attrs.get(stat), 13);
        }
    }

    #[test]
    fn test_increase_all_saturates() {
        let mut attrs = Attributes::new();
        attrs.set(StatType::Agility, u32::MAX);
        attrs.increase_all(1);
        assert_eq!(attrs.get(StatType::Agility), u32::MAX);
    }

    #[test]
    fn test_zero() {
        assert!(Attributes::zero().is_zero());
        assert!(!Attributes::new().is_zero());
    }

    #[test]
    fn test_index_returns_unique_values() {
        for (i, stat) in StatType::all().iter().enumerate() {
            assert_eq!(stat.index(), i);
        }
    }

    #[test]
    fn test_abbrev() {
        assert_eq!(StatType::Strength.abbrev(), "STR");
        assert_eq!(StatType::Vitality.abbrev(), "VIT");
        assert_eq!(StatType::Metabolism.abbrev(), "MET");
    }
}
