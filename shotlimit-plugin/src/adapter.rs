use log::{debug, info};
use shotlimit_config::NotificationConfig;
use shotlimit_core::{math::vector3::Vector3, FlagId, PlayerSlot};

use crate::{
    active_flags::ActiveFlagSet,
    api::{CustomMapObjectHandler, EventKind, Plugin, PluginContext, PluginMetadata, ServerEvent},
    budget::{PlayerShotBudgetTracker, ShotAction},
    zone::ZoneRegistry,
};

pub const SHOT_LIMIT_ZONE_OBJECT: &str = "shotLimitZone";

const REGISTERED_EVENTS: &[EventKind] = &[
    EventKind::PlayerJoined,
    EventKind::PlayerDied,
    EventKind::FlagGrabbed,
    EventKind::FlagDropped,
    EventKind::ShotFired,
];

pub fn shots_left_message(remaining: u32) -> String {
    if remaining == 1 {
        "1 shot left".to_string()
    } else {
        format!("{remaining} shots left")
    }
}

/// Limits the shots of players who pick up a flag inside a `shotLimitZone`.
///
/// Owns all plugin state; the host feeds it map objects and events and it answers
/// through the [`PluginContext`].
#[derive(Default)]
pub struct ShotLimitZones {
    zones: ZoneRegistry,
    budgets: PlayerShotBudgetTracker,
    active_flags: ActiveFlagSet,
}

impl ShotLimitZones {
    pub fn new(notifications: NotificationConfig) -> Self {
        Self {
            zones: ZoneRegistry::new(),
            budgets: PlayerShotBudgetTracker::new(notifications),
            active_flags: ActiveFlagSet::new(),
        }
    }

    pub fn zones(&self) -> &ZoneRegistry {
        &self.zones
    }

    pub fn budgets(&self) -> &PlayerShotBudgetTracker {
        &self.budgets
    }

    pub fn active_flags(&self) -> &ActiveFlagSet {
        &self.active_flags
    }

    fn on_flag_grabbed(
        &mut self,
        flag: FlagId,
        player: PlayerSlot,
        position: &Vector3<f32>,
        kind: &str,
    ) {
        let Some(zone) = self.zones.match_zone(position, kind) else {
            return;
        };
        debug!(
            "Player {player} grabbed {kind} flag {flag} inside a zone, {} shots allowed",
            zone.shot_limit
        );
        self.budgets.arm(player, zone.shot_limit);
        self.active_flags.add(flag);
    }

    fn on_flag_dropped(
        &mut self,
        server: &mut dyn PluginContext,
        flag: FlagId,
        player: PlayerSlot,
    ) {
        self.budgets.reset(player);
        if self.active_flags.remove(flag) {
            debug!("Resetting limited flag {flag} dropped by player {player}");
            server.reset_flag(flag);
        }
    }

    fn on_shot_fired(&mut self, server: &mut dyn PluginContext, player: PlayerSlot) {
        match self.budgets.on_shot_fired(player) {
            Some(ShotAction::Notify(remaining)) => {
                server.send_message(player, &shots_left_message(remaining));
            }
            Some(ShotAction::RemoveFlag) => {
                debug!("Player {player} ran out of shots");
                server.remove_player_flag(player);
            }
            None => {}
        }
    }
}

impl Plugin for ShotLimitZones {
    fn metadata(&self) -> PluginMetadata<'static> {
        PluginMetadata {
            name: "Shot Limit Zones",
            version: env!("CARGO_PKG_VERSION"),
            description: "Limits the shots of flags picked up inside map zones",
        }
    }

    fn registered_events(&self) -> &'static [EventKind] {
        REGISTERED_EVENTS
    }

    fn on_load(&mut self, server: &mut dyn PluginContext) -> Result<(), String> {
        server.register_custom_map_object(SHOT_LIMIT_ZONE_OBJECT);
        info!("shotLimitZone plugin loaded");
        Ok(())
    }

    fn on_unload(&mut self, server: &mut dyn PluginContext) -> Result<(), String> {
        server.remove_custom_map_object(SHOT_LIMIT_ZONE_OBJECT);
        self.zones.clear();
        self.budgets.reset_all();
        self.active_flags.clear();
        Ok(())
    }

    fn on_event(&mut self, server: &mut dyn PluginContext, event: &ServerEvent) {
        let Some(player) = PlayerSlot::from_raw(event.player()) else {
            // forced flag resets come back as drops without a player
            debug!("Ignoring {:?} for player id {}", event.kind(), event.player());
            return;
        };

        match event {
            ServerEvent::PlayerJoined { .. } | ServerEvent::PlayerDied { .. } => {
                self.budgets.reset(player);
            }
            ServerEvent::FlagGrabbed {
                flag,
                position,
                kind,
                ..
            } => self.on_flag_grabbed(*flag, player, position, kind),
            ServerEvent::FlagDropped { flag, .. } => self.on_flag_dropped(server, *flag, player),
            ServerEvent::ShotFired { .. } => self.on_shot_fired(server, player),
        }
    }
}

impl CustomMapObjectHandler for ShotLimitZones {
    fn map_object(&mut self, object: &str, lines: &[String]) -> bool {
        if !object.eq_ignore_ascii_case(SHOT_LIMIT_ZONE_OBJECT) {
            return false;
        }

        let definitions = lines.iter().filter_map(|line| {
            let mut tokens = line.split_whitespace();
            let key = tokens.next()?;
            Some((key, tokens.collect::<Vec<_>>()))
        });
        self.zones.load(definitions);
        true
    }
}

#[cfg(test)]
mod test {
    use super::shots_left_message;

    #[test]
    fn test_message_pluralization() {
        assert_eq!(shots_left_message(1), "1 shot left");
        assert_eq!(shots_left_message(2), "2 shots left");
        assert_eq!(shots_left_message(10), "10 shots left");
    }
}
