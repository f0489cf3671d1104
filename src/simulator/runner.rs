//! Simulated players climbing the procedural floors through the real engine.

use super::config::SimConfig;
use super::report::{SimReport, SimRun};
use crate::core::config::BalanceConfig;
use crate::core::engine::{Command, Engine};
use crate::core::game_state::GameState;
use crate::dungeon::data::floor_dungeon_id;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seconds of simulated time between dungeon attempts.
const SECONDS_PER_ATTEMPT: i64 = 600;

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => StdRng::from_entropy(),
        };

        let (run, _) = simulate_player(config, rng);
        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - Floor {}, Level {}, Clears {}, Defeats {}, Shadows {}",
                run_idx + 1,
                config.num_runs,
                run.highest_floor,
                run.final_level,
                run.clears,
                run.defeats,
                run.shadows_owned
            );
        }
        runs.push(run);
    }

    SimReport::from_runs(runs, config.target_floor)
}

/// Plays one player from a fresh state. Returns the summary and the final state.
pub fn simulate_player<R: Rng>(config: &SimConfig, rng: R) -> (SimRun, GameState) {
    let mut engine = Engine::new(GameState::new(), BalanceConfig::default(), rng);
    let mut now: i64 = 0;
    let mut attempts = 0;

    loop {
        let highest = engine.state().run_stats().highest_floor_cleared.unwrap_or(0);
        if highest >= config.target_floor || attempts >= config.max_attempts_per_run {
            break;
        }
        attempts += 1;
        now += SECONDS_PER_ATTEMPT;

        let next_floor = highest + 1;
        let victory = match engine.request_dungeon_run(&floor_dungeon_id(next_floor), now) {
            Ok(run) => run.victory(),
            Err(err) => {
                tracing::warn!(error = %err, "simulated run could not resolve floor");
                break;
            }
        };

        // Farm the last cleared floor for XP and shards after a defeat
        if !victory && highest > 0 {
            if let Err(err) = engine.request_dungeon_run(&floor_dungeon_id(highest), now) {
                tracing::warn!(error = %err, "farm floor could not be resolved");
            }
        }

        equip_best_gear(&mut engine, now);
        if config.upgrade_gear {
            upgrade_equipped_gear(&mut engine, now);
        }
        engine.drain_rewards();
    }

    let state = engine.into_state();
    (SimRun::from_state(&state, attempts, config.target_floor), state)
}

/// Puts the highest-scoring item of each slot on, and the first shadow if none is.
fn equip_best_gear<R: Rng>(engine: &mut Engine<R>, now: i64) {
    engine.execute(Command::EquipBestGear, now);

    let state = engine.state();
    if state.equipped_shadow().is_none() {
        if let Some(shadow_id) = state.shadows.first().map(|s| s.id.clone()) {
            engine.execute(Command::EquipShadow { shadow_id }, now);
        }
    }
}

/// Upgrades equipped items, cheapest first, until the wallet runs dry.
fn upgrade_equipped_gear<R: Rng>(engine: &mut Engine<R>, now: i64) {
    let mut equipped: Vec<(u8, String)> = engine
        .state()
        .equipment
        .iter()
        .filter(|i| i.is_equipped)
        .map(|i| (i.level, i.id.clone()))
        .collect();
    equipped.sort();

    for (_, item_id) in equipped {
        while !engine.request_upgrade(&item_id, now).is_rejected() {}
    }
}
