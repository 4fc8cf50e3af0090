//! Locally-defined chat-input commands.

use crate::error::SlashwireError;
use crate::ids::Snowflake;
use crate::option::CommandOption;

/// Platform limit on command names, in characters.
pub const MAX_NAME_LEN: usize = 32;
/// Platform limit on command descriptions, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 100;

/// A chat-input command and its option tree.
#[derive(Debug, Clone)]
pub struct CommandDefinition {
    pub name: String,
    pub description: String,
    pub options: Vec<CommandOption>,
    /// Guild the command is scoped to; `None` means global.
    pub guild_id: Option<Snowflake>,
}

impl CommandDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            options: Vec::new(),
            guild_id: None,
        }
    }

    pub fn with_option(mut self, option: impl Into<CommandOption>) -> Self {
        self.options.push(option.into());
        self
    }

    pub fn in_guild(mut self, guild_id: impl Into<Snowflake>) -> Self {
        self.guild_id = Some(guild_id.into());
        self
    }

    /// Find a top-level option by name.
    pub fn option(&self, name: &str) -> Option<&CommandOption> {
        self.options.iter().find(|o| o.name() == name)
    }

    /// Check name and description against the platform's length limits.
    pub fn validate(&self) -> Result<(), SlashwireError> {
        let name_len = self.name.chars().count();
        if name_len == 0 || name_len > MAX_NAME_LEN {
            return Err(SlashwireError::InvalidCommand(format!(
                "name {:?} must be 1-{MAX_NAME_LEN} characters",
                self.name
            )));
        }
        let desc_len = self.description.chars().count();
        if desc_len == 0 || desc_len > MAX_DESCRIPTION_LEN {
            return Err(SlashwireError::InvalidCommand(format!(
                "description of {:?} must be 1-{MAX_DESCRIPTION_LEN} characters",
                self.name
            )));
        }
        Ok(())
    }
}
