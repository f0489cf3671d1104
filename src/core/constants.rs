// Character attributes
pub const NUM_ATTRIBUTES: usize = 6;
pub const BASE_ATTRIBUTE_VALUE: u32 = 10;
pub const STAT_POINTS_PER_LEVEL: u32 = 1;

// XP and leveling
// XP for level N = XP_CURVE_BASE * N^XP_CURVE_EXPONENT
pub const XP_CURVE_BASE: f64 = 100.0;
pub const XP_CURVE_EXPONENT: f64 = 1.5;
pub const MAX_CHARACTER_LEVEL: u32 = 1_000;

// Power
pub const POWER_PER_STAT_POINT: u64 = 10;
pub const POWER_PER_EQUIPMENT_LEVEL: u64 = 25;
pub const POWER_PER_SHADOW_BONUS: u64 = 5;
pub const FALLBACK_POWER_SCALE: u64 = 10;
pub const FALLBACK_POWER_MULTIPLIER: f64 = 1.5;
/// Equipment bonus grows by a tenth of its base value per item level.
pub const EQUIPMENT_LEVEL_SCALING_TENTHS: u32 = 1;

// Dungeon rewards
pub const SHARD_REWARD_BASE: f64 = 10.0;
pub const SHARD_DIFFICULTY_FACTOR: f64 = 0.5;

// Shadows
pub const SHADOW_XP_SHARE_PERCENT: u64 = 20;
pub const SHADOW_BASE_EVOLUTION_XP: u64 = 500;
pub const SHADOW_SECOND_EVOLUTION_XP: u64 = 2_000;
pub const SHADOW_MAX_EVOLUTION: u8 = 2;
pub const SHADOW_EVOLUTION_BONUS_STEP: u32 = 5;

// Procedural floors ("dungeon_<floor>")
pub const FLOOR_DUNGEON_PREFIX: &str = "dungeon_";
pub const FLOOR_POWER_STEP: u64 = 500;
pub const FLOOR_XP_STEP: u64 = 120;
pub const FLOOR_BOSS_INTERVAL: u32 = 10;
pub const FLOOR_DROP_ROLLS: u32 = 2;
pub const FLOOR_DROP_CHANCE: f64 = 0.35;

// Persisted state
pub const SAVE_VERSION: u32 = 2;
