//! Dungeons: catalog, resolution, and rewards.

pub mod data;
pub mod logic;
pub mod rewards;
pub mod types;

pub use data::{floor_dungeon, floor_dungeon_id, get_all_dungeons, parse_floor_id, resolve_dungeon};
pub use logic::run_dungeon;
pub use rewards::{generate_rewards, shard_reward, GeneratedRewards};
pub use types::*;
