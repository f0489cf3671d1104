//! Character attributes, level progression, and power.

pub mod attributes;
pub mod buffs;
pub mod derived_stats;
pub mod progression;
pub mod stats;

pub use attributes::{Attributes, StatType};
pub use buffs::StatBuff;
pub use derived_stats::{effective_stats, power, power_with_fallback, EffectiveStats, PowerReading};
pub use progression::{apply_xp, jump_to_level, xp_for_next_level, LevelResult};
pub use stats::CharacterStats;
