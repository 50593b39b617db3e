pub mod math;
pub mod player;

pub use player::{FlagId, PlayerSlot, MAX_PLAYERS};
