use serde::{Deserialize, Serialize};

/// Hunter-style rank shared by dungeon difficulty and shadow tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    E,
    D,
    C,
    B,
    A,
    S,
    SS,
    SSS,
}

impl Rank {
    pub const ALL: [Rank; 8] = [
        Rank::E,
        Rank::D,
        Rank::C,
        Rank::B,
        Rank::A,
        Rank::S,
        Rank::SS,
        Rank::SSS,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Rank::E => "E",
            Rank::D => "D",
            Rank::C => "C",
            Rank::B => "B",
            Rank::A => "A",
            Rank::S => "S",
            Rank::SS => "SS",
            Rank::SSS => "SSS",
        }
    }

    /// Difficulty multiplier used by the shard reward formula.
    pub fn difficulty_multiplier(&self) -> u32 {
        match self {
            Rank::E => 1,
            Rank::D => 2,
            Rank::C => 3,
            Rank::B => 4,
            Rank::A => 5,
            Rank::S => 6,
            Rank::SS => 8,
            Rank::SSS => 10,
        }
    }

    /// Rank assigned to a procedural floor.
    pub fn for_floor(floor: u32) -> Rank {
        match floor {
            0..=9 => Rank::E,
            10..=19 => Rank::D,
            20..=29 => Rank::C,
            30..=39 => Rank::B,
            40..=49 => Rank::A,
            50..=59 => Rank::S,
            60..=79 => Rank::SS,
            _ => Rank::SSS,
        }
    }
}
