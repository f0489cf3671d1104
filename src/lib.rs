//! Arise - progression and reward resolution engine.
//!
//! Computes player power, resolves dungeon runs, generates loot and unlocks,
//! advances levels and shadow evolution, and runs pity-adjusted gear upgrades.
//! Hosts drive it through [`core::Engine`] and drain [`rewards::RewardQueue`]
//! for presentation.

pub mod character;
pub mod core;
pub mod dungeon;
pub mod enhancement;
pub mod items;
pub mod rewards;
pub mod save;
pub mod shadows;
pub mod simulator;
