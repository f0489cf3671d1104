//! Reward outbox consumed by presentation.

pub mod queue;
pub mod types;

pub use queue::RewardQueue;
pub use types::{Currency, RewardQueueItem};
