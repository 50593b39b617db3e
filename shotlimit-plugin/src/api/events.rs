use std::fmt;

use shotlimit_core::{math::vector3::Vector3, FlagId, PlayerSlot};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    PlayerJoined,
    PlayerDied,
    FlagGrabbed,
    FlagDropped,
    ShotFired,
}

/// Callbacks delivered by the host, one at a time.
///
/// Player ids are raw host ids and may be sentinels; see [`PlayerSlot::from_raw`].
#[derive(Clone, Debug, PartialEq)]
pub enum ServerEvent {
    PlayerJoined {
        player: i32,
    },
    PlayerDied {
        player: i32,
    },
    FlagGrabbed {
        flag: FlagId,
        player: i32,
        position: Vector3<f32>,
        kind: String,
    },
    FlagDropped {
        flag: FlagId,
        player: i32,
    },
    ShotFired {
        player: i32,
    },
}

impl ServerEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::PlayerJoined { .. } => EventKind::PlayerJoined,
            Self::PlayerDied { .. } => EventKind::PlayerDied,
            Self::FlagGrabbed { .. } => EventKind::FlagGrabbed,
            Self::FlagDropped { .. } => EventKind::FlagDropped,
            Self::ShotFired { .. } => EventKind::ShotFired,
        }
    }

    pub fn player(&self) -> i32 {
        match self {
            Self::PlayerJoined { player }
            | Self::PlayerDied { player }
            | Self::FlagGrabbed { player, .. }
            | Self::FlagDropped { player, .. }
            | Self::ShotFired { player } => *player,
        }
    }
}

/// Side effects a plugin asks the host for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ServerCommand {
    ResetFlag(FlagId),
    RemovePlayerFlag(PlayerSlot),
    SendMessage(PlayerSlot, String),
}

impl fmt::Display for ServerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResetFlag(flag) => write!(f, "reset flag {flag}"),
            Self::RemovePlayerFlag(player) => write!(f, "remove flag of player {player}"),
            Self::SendMessage(player, message) => write!(f, "message to {player}: {message}"),
        }
    }
}
