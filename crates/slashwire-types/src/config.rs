//! Configuration for the outbound (registration) side.
//!
//! Loaded from a TOML file, then overlaid with `SLASHWIRE_*` environment
//! variables:
//!
//! ```toml
//! application_id = "112233445566778899"
//! bot_token = "..."
//! guild_id = "998877665544332211"   # optional; omit for global commands
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ids::Snowflake;
use crate::SlashwireError;

/// Default REST API root.
pub const DEFAULT_API_BASE_URL: &str = "https://discord.com/api/v10";

/// Config files larger than this are rejected.
const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024; // 1 MB

const ENV_APPLICATION_ID: &str = "SLASHWIRE_APPLICATION_ID";
const ENV_BOT_TOKEN: &str = "SLASHWIRE_BOT_TOKEN";
const ENV_GUILD_ID: &str = "SLASHWIRE_GUILD_ID";
const ENV_API_BASE_URL: &str = "SLASHWIRE_API_BASE_URL";

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

/// Credentials and scope used when registering commands.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommandsConfig {
    /// Application that owns the commands.
    pub application_id: Snowflake,
    /// Bot token, sent as `Authorization: Bot <token>`.
    pub bot_token: String,
    /// REST API root (overridable for testing).
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Default registration scope; `None` registers globally.
    #[serde(default)]
    pub guild_id: Option<Snowflake>,
}

impl CommandsConfig {
    pub fn new(application_id: impl Into<Snowflake>, bot_token: impl Into<String>) -> Self {
        Self {
            application_id: application_id.into(),
            bot_token: bot_token.into(),
            api_base_url: default_api_base_url(),
            guild_id: None,
        }
    }

    /// Parse a configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, SlashwireError> {
        let config: Self =
            toml::from_str(content).map_err(|e| SlashwireError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml(&self) -> Result<String, SlashwireError> {
        toml::to_string_pretty(self).map_err(|e| SlashwireError::ConfigError(e.to_string()))
    }

    /// Load from a TOML file and apply environment overrides.
    pub fn load(path: &Path) -> Result<Self, SlashwireError> {
        let content = read_config_file(path)?;
        let mut config: Self =
            toml::from_str(&content).map_err(|e| SlashwireError::ConfigError(e.to_string()))?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Overlay values from `SLASHWIRE_*` variables.
    ///
    /// `lookup` is `std::env::var` in production; tests pass a map.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(id) = lookup(ENV_APPLICATION_ID) {
            self.application_id = Snowflake::from(id);
        }
        if let Some(token) = lookup(ENV_BOT_TOKEN) {
            self.bot_token = token;
        }
        if let Some(guild) = lookup(ENV_GUILD_ID) {
            // An empty value clears a file-configured guild scope.
            self.guild_id = if guild.is_empty() {
                None
            } else {
                Some(Snowflake::from(guild))
            };
        }
        if let Some(url) = lookup(ENV_API_BASE_URL) {
            self.api_base_url = url;
        }
    }

    fn validate(&self) -> Result<(), SlashwireError> {
        if self.application_id.as_str().is_empty() {
            return Err(SlashwireError::ConfigError("application_id is empty".into()));
        }
        if self.bot_token.is_empty() {
            return Err(SlashwireError::ConfigError("bot_token is empty".into()));
        }
        Ok(())
    }
}

impl fmt::Debug for CommandsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandsConfig")
            .field("application_id", &self.application_id)
            .field("bot_token", &"[REDACTED]")
            .field("api_base_url", &self.api_base_url)
            .field("guild_id", &self.guild_id)
            .finish()
    }
}

/// Read a config file with a size limit.
fn read_config_file(path: &Path) -> Result<String, SlashwireError> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        SlashwireError::ConfigError(format!("cannot read config file {}: {e}", path.display()))
    })?;

    if metadata.len() > MAX_CONFIG_FILE_SIZE {
        return Err(SlashwireError::ConfigError(format!(
            "config file {} exceeds maximum size of {} bytes (actual: {} bytes)",
            path.display(),
            MAX_CONFIG_FILE_SIZE,
            metadata.len()
        )));
    }

    std::fs::read_to_string(path).map_err(|e| {
        SlashwireError::ConfigError(format!("cannot read config file {}: {e}", path.display()))
    })
}
