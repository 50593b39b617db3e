pub mod active_flags;
pub mod adapter;
pub mod api;
pub mod budget;
pub mod matcher;
pub mod zone;

pub use active_flags::ActiveFlagSet;
pub use adapter::{shots_left_message, ShotLimitZones, SHOT_LIMIT_ZONE_OBJECT};
pub use api::*;
pub use budget::{PlayerShotBudgetTracker, ShotAction, ShotBudget};
pub use zone::{Zone, ZoneRegistry};
