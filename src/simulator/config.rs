//! Simulation configuration.

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulated players
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Procedural floor each player is trying to clear
    pub target_floor: u32,

    /// Dungeon attempts per player before giving up
    pub max_attempts_per_run: u32,

    /// Spend shards on equipped-gear upgrades between attempts
    pub upgrade_gear: bool,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 200,
            seed: None,
            target_floor: 30,
            max_attempts_per_run: 2_000,
            upgrade_gear: true,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Small, fast run for smoke-testing balance changes
    pub fn quick() -> Self {
        Self {
            num_runs: 20,
            target_floor: 10,
            max_attempts_per_run: 500,
            ..Default::default()
        }
    }

    /// Long climb to the SSS floors
    pub fn deep_climb() -> Self {
        Self {
            num_runs: 50,
            target_floor: 80,
            max_attempts_per_run: 20_000,
            ..Default::default()
        }
    }
}
