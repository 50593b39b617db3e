use std::io::BufRead;

use log::{info, warn};
use shotlimit_core::{FlagId, PlayerSlot};
use shotlimit_plugin::{CommandQueue, Plugin, PluginContext, ServerCommand};

use crate::script::parse_event;

/// Offline host: applies nothing, but records and logs what the plugin asks for.
#[derive(Default)]
pub struct ReplayServer {
    queue: CommandQueue,
}

impl ReplayServer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[ServerCommand] {
        self.queue.commands()
    }

    pub fn is_map_object_registered(&self, object: &str) -> bool {
        self.queue.is_map_object_registered(object)
    }

    /// Feeds every event of `script` to `plugin`. Bad lines are logged and skipped.
    /// Returns the number of events delivered.
    pub fn replay<R: BufRead>(
        &mut self,
        plugin: &mut dyn Plugin,
        script: R,
    ) -> std::io::Result<usize> {
        let registered = plugin.registered_events();
        let mut delivered = 0;

        for (index, line) in script.lines().enumerate() {
            let line = line?;
            match parse_event(&line, index + 1) {
                Ok(Some(event)) if registered.contains(&event.kind()) => {
                    plugin.on_event(self, &event);
                    delivered += 1;
                }
                Ok(_) => {}
                Err(err) => warn!("{err}"),
            }
        }
        Ok(delivered)
    }

    fn record(&mut self, command: ServerCommand) {
        info!("{command}");
        match command {
            ServerCommand::ResetFlag(flag) => self.queue.reset_flag(flag),
            ServerCommand::RemovePlayerFlag(player) => self.queue.remove_player_flag(player),
            ServerCommand::SendMessage(player, message) => {
                self.queue.send_message(player, &message);
            }
        }
    }
}

impl PluginContext for ReplayServer {
    fn reset_flag(&mut self, flag: FlagId) {
        self.record(ServerCommand::ResetFlag(flag));
    }

    fn remove_player_flag(&mut self, player: PlayerSlot) {
        self.record(ServerCommand::RemovePlayerFlag(player));
    }

    fn send_message(&mut self, player: PlayerSlot, message: &str) {
        self.record(ServerCommand::SendMessage(player, message.to_string()));
    }

    fn register_custom_map_object(&mut self, object: &str) {
        info!("Registered custom map object {object}");
        self.queue.register_custom_map_object(object);
    }

    fn remove_custom_map_object(&mut self, object: &str) {
        info!("Removed custom map object {object}");
        self.queue.remove_custom_map_object(object);
    }
}
