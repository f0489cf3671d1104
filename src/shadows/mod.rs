//! Shadow companions: extraction, equipping, and evolution.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
