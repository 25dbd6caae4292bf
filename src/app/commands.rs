use crate::core::generator::AccessorGenerator;
use crate::core::{EditorPort, GenerationOutcome};
use crate::utils::error::{AccessorGenError, Result};
use std::collections::BTreeMap;

/// Identifier the accessor command is registered under.
pub const GEN_GETTERS_SETTERS: &str = "extension.genGettersSetters";

pub type CommandHandler = Box<dyn Fn(&mut dyn EditorPort) -> Result<GenerationOutcome>>;

/// Maps command identifiers to handlers that run against an editor.
#[derive(Default)]
pub struct CommandRegistry {
    commands: BTreeMap<String, CommandHandler>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` under `id`, replacing any previous handler.
    pub fn register<F>(&mut self, id: impl Into<String>, handler: F)
    where
        F: Fn(&mut dyn EditorPort) -> Result<GenerationOutcome> + 'static,
    {
        let id = id.into();
        if self.commands.insert(id.clone(), Box::new(handler)).is_some() {
            tracing::warn!("Command {} was registered twice, keeping the latest", id);
        }
    }

    pub fn unregister(&mut self, id: &str) -> bool {
        self.commands.remove(id).is_some()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.commands.contains_key(id)
    }

    pub fn command_ids(&self) -> Vec<&str> {
        self.commands.keys().map(String::as_str).collect()
    }

    pub fn execute(&self, id: &str, editor: &mut dyn EditorPort) -> Result<GenerationOutcome> {
        let handler = self
            .commands
            .get(id)
            .ok_or_else(|| AccessorGenError::UnknownCommand {
                command: id.to_string(),
            })?;

        tracing::debug!("Executing command {}", id);
        handler(editor)
    }
}

/// Registers the accessor command backed by `generator`.
pub fn activate(registry: &mut CommandRegistry, generator: AccessorGenerator) {
    registry.register(GEN_GETTERS_SETTERS, move |editor: &mut dyn EditorPort| {
        generator.run(editor)
    });
}

/// Removes everything [`activate`] registered.
pub fn deactivate(registry: &mut CommandRegistry) {
    registry.unregister(GEN_GETTERS_SETTERS);
}
