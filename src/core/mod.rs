//! Core engine: state, transitions, configuration, and shared types.

pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod game_state;
pub mod ids;
pub mod log;
pub mod rank;

pub use config::{BalanceConfig, PowerWeights};
pub use engine::{transition, Command, CommandOutcome, Effect, Engine, Transition};
pub use error::{ConfigError, EngineError, EntityKind, SaveError};
pub use game_state::{GameState, Wallet};
pub use log::{ActivityLog, LogCategory, LogEntry};
pub use rank::Rank;
