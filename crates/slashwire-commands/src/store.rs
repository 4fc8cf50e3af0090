//! Named, validated set of command definitions.

use std::collections::BTreeMap;

use slashwire_types::{CommandDefinition, Interaction, SlashwireError, WireChoice};
use tracing::debug;

use crate::autocomplete::handle_autocomplete;
use crate::resolve::{resolve_arguments, ArgumentMap};

/// Commands keyed by name.
///
/// Definitions are validated on insert; registration itself never checks.
#[derive(Debug, Clone, Default)]
pub struct CommandStore {
    commands: BTreeMap<String, CommandDefinition>,
}

impl CommandStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a command, rejecting invalid definitions and duplicate names.
    pub fn insert(&mut self, command: CommandDefinition) -> Result<(), SlashwireError> {
        command.validate()?;
        if self.commands.contains_key(&command.name) {
            return Err(SlashwireError::InvalidCommand(format!(
                "duplicate command name {:?}",
                command.name
            )));
        }
        self.commands.insert(command.name.clone(), command);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&CommandDefinition> {
        self.commands.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandDefinition> {
        self.commands.values()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Look up the invoked command and resolve its arguments.
    ///
    /// Returns `None` for interactions without command data or for commands
    /// this store does not know.
    pub fn resolve(&self, interaction: &Interaction) -> Option<(&CommandDefinition, ArgumentMap)> {
        let data = interaction.data.as_ref()?;
        let Some(command) = self.get(&data.name) else {
            debug!(command = %data.name, "interaction for unknown command");
            return None;
        };
        Some((command, resolve_arguments(&data.options, data.resolved.as_ref())))
    }

    /// Answer an autocomplete interaction.
    ///
    /// Unknown commands, missing data, and missing invoker all yield no
    /// suggestions.
    pub async fn autocomplete(&self, interaction: &Interaction) -> Vec<WireChoice> {
        let Some(data) = interaction.data.as_ref() else {
            return Vec::new();
        };
        let Some(command) = self.get(&data.name) else {
            debug!(command = %data.name, "autocomplete for unknown command");
            return Vec::new();
        };
        let Some(invoker) = interaction.invoker() else {
            debug!(command = %data.name, "autocomplete without an invoking user");
            return Vec::new();
        };
        handle_autocomplete(command, &data.options, &invoker).await
    }
}
