//! Balance simulator.
//!
//! Plays many seeded players through the procedural floors using the real
//! engine, upgrading gear between attempts, and aggregates how far they get.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{SimReport, SimRun};
pub use runner::{run_simulation, simulate_player};
