use std::fmt;

/// Size of the host's player slot address space.
pub const MAX_PLAYERS: usize = 256;

/// A validated player slot. The host reuses slots as players come and go.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerSlot(u8);

impl PlayerSlot {
    /// Accepts `0..MAX_PLAYERS`. The host's negative sentinels (server, all users,
    /// no user) and anything past the last slot are rejected.
    pub fn from_raw(raw: i32) -> Option<Self> {
        u8::try_from(raw).ok().map(Self)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PlayerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Runtime id of a flag instance in the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FlagId(pub i32);

impl fmt::Display for FlagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
