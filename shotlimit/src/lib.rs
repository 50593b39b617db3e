pub mod map;
pub mod script;
pub mod server;

pub use map::{load_map, parse_map, MapError, MapObject};
pub use script::{parse_event, ReplayError};
pub use server::ReplayServer;
