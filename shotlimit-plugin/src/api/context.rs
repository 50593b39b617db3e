use shotlimit_core::{FlagId, PlayerSlot};

use super::events::ServerCommand;

/// Services the host offers to plugins.
pub trait PluginContext {
    /// Sends the flag back to where it spawns.
    fn reset_flag(&mut self, flag: FlagId);

    fn remove_player_flag(&mut self, player: PlayerSlot);

    fn send_message(&mut self, player: PlayerSlot, message: &str);

    fn register_custom_map_object(&mut self, object: &str);

    fn remove_custom_map_object(&mut self, object: &str);
}

/// A context that queues every command for the host to apply later.
#[derive(Debug, Default)]
pub struct CommandQueue {
    commands: Vec<ServerCommand>,
    map_objects: Vec<String>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[ServerCommand] {
        &self.commands
    }

    pub fn drain(&mut self) -> Vec<ServerCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn is_map_object_registered(&self, object: &str) -> bool {
        self.map_objects
            .iter()
            .any(|registered| registered.eq_ignore_ascii_case(object))
    }
}

impl PluginContext for CommandQueue {
    fn reset_flag(&mut self, flag: FlagId) {
        self.commands.push(ServerCommand::ResetFlag(flag));
    }

    fn remove_player_flag(&mut self, player: PlayerSlot) {
        self.commands.push(ServerCommand::RemovePlayerFlag(player));
    }

    fn send_message(&mut self, player: PlayerSlot, message: &str) {
        self.commands
            .push(ServerCommand::SendMessage(player, message.to_string()));
    }

    fn register_custom_map_object(&mut self, object: &str) {
        self.map_objects.push(object.to_string());
    }

    fn remove_custom_map_object(&mut self, object: &str) {
        self.map_objects
            .retain(|registered| !registered.eq_ignore_ascii_case(object));
    }
}

#[cfg(test)]
mod test {
    use shotlimit_core::{FlagId, PlayerSlot};

    use super::{CommandQueue, PluginContext};
    use crate::api::ServerCommand;

    #[test]
    fn test_map_object_registration() {
        let mut queue = CommandQueue::new();
        queue.register_custom_map_object("shotLimitZone");
        assert!(queue.is_map_object_registered("SHOTLIMITZONE"));

        queue.remove_custom_map_object("shotlimitzone");
        assert!(!queue.is_map_object_registered("shotLimitZone"));
        assert!(queue.commands().is_empty());
    }

    #[test]
    fn test_commands_drained_in_order() {
        let mut queue = CommandQueue::new();
        let player = PlayerSlot::from_raw(2).unwrap();
        queue.send_message(player, "3 shots left");
        queue.reset_flag(FlagId(1));

        assert_eq!(
            queue.drain(),
            vec![
                ServerCommand::SendMessage(player, "3 shots left".to_string()),
                ServerCommand::ResetFlag(FlagId(1)),
            ]
        );
        assert!(queue.commands().is_empty());
    }
}
