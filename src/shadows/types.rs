use crate::core::constants::{
    SHADOW_BASE_EVOLUTION_XP, SHADOW_MAX_EVOLUTION, SHADOW_SECOND_EVOLUTION_XP,
};
use crate::core::rank::Rank;
use crate::items::types::StatBonus;
use serde::{Deserialize, Serialize};

/// XP a shadow needs before its next evolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvolutionThreshold {
    Points(u64),
    /// Fully evolved; no further evolution possible.
    Unbounded,
}

impl EvolutionThreshold {
    /// Threshold that applies once a shadow sits at `evolution_level`.
    pub fn for_level(evolution_level: u8) -> Self {
        match evolution_level {
            0 => EvolutionThreshold::Points(SHADOW_BASE_EVOLUTION_XP),
            1 => EvolutionThreshold::Points(SHADOW_SECOND_EVOLUTION_XP),
            _ => EvolutionThreshold::Unbounded,
        }
    }

    pub fn is_reached(&self, experience_points: u64) -> bool {
        match self {
            EvolutionThreshold::Points(needed) => experience_points >= *needed,
            EvolutionThreshold::Unbounded => false,
        }
    }
}

/// What a boss turns into when its shadow is extracted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadowDescriptor {
    pub name: String,
    pub rank: Rank,
    pub bonus: StatBonus,
}

/// An extracted companion granting a passive stat bonus.
///
/// Deserialization goes through the save-format normalizer so records from
/// before evolution existed load with the current schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "crate::save::ShadowRecord")]
pub struct ShadowCompanion {
    pub id: String,
    pub name: String,
    pub rank: Rank,
    pub bonus: StatBonus,
    pub evolution_level: u8,
    pub experience_points: u64,
    pub xp_to_next_evolution: EvolutionThreshold,
    pub is_equipped: bool,
}

impl ShadowCompanion {
    pub fn from_descriptor(id: String, descriptor: &ShadowDescriptor) -> Self {
        Self {
            id,
            name: descriptor.name.clone(),
            rank: descriptor.rank,
            bonus: descriptor.bonus,
            evolution_level: 0,
            experience_points: 0,
            xp_to_next_evolution: EvolutionThreshold::for_level(0),
            is_equipped: false,
        }
    }

    pub fn can_evolve(&self) -> bool {
        self.evolution_level < SHADOW_MAX_EVOLUTION
            && self.xp_to_next_evolution.is_reached(self.experience_points)
    }

    pub fn evolution_title(&self) -> Option<&'static str> {
        match self.evolution_level {
            0 => None,
            1 => Some("Elite"),
            _ => Some("Marshal"),
        }
    }

    pub fn display_name(&self) -> String {
        match self.evolution_title() {
            Some(title) => format!("{} {}", title, self.name),
            None => self.name.clone(),
        }
    }
}
