//! Item system: types, inventory, generation, drops and the shard shop.

pub mod drops;
pub mod equipment;
pub mod generation;
pub mod names;
pub mod shop;
pub mod types;

pub use drops::*;
pub use equipment::*;
pub use generation::*;
pub use shop::*;
pub use types::*;
