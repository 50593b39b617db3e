pub mod context;
pub mod events;

pub use context::*;
pub use events::*;

#[derive(Debug, Clone)]
pub struct PluginMetadata<'s> {
    /// The name of the plugin.
    pub name: &'s str,
    /// The version of the plugin.
    pub version: &'s str,
    /// A description of the plugin.
    pub description: &'s str,
}

pub trait Plugin {
    fn metadata(&self) -> PluginMetadata<'static>;

    /// Events the host has to deliver to [`Plugin::on_event`].
    fn registered_events(&self) -> &'static [EventKind];

    /// Called when the plugin is loaded.
    fn on_load(&mut self, _server: &mut dyn PluginContext) -> Result<(), String> {
        Ok(())
    }

    /// Called when the plugin is unloaded.
    fn on_unload(&mut self, _server: &mut dyn PluginContext) -> Result<(), String> {
        Ok(())
    }

    fn on_event(&mut self, server: &mut dyn PluginContext, event: &ServerEvent);
}

/// Receives the body of custom objects found in the map file.
pub trait CustomMapObjectHandler {
    /// Returns `false` when the object is not one this handler registered.
    fn map_object(&mut self, object: &str, lines: &[String]) -> bool;
}
