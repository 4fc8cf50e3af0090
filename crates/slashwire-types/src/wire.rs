//! Serde types for the platform's command registration schema.
//!
//! These are the shapes submitted to the registration routes. They carry no
//! behaviour: autocomplete providers are reduced to a boolean flag by the
//! projector before anything here is built.

use serde::{Deserialize, Serialize};

use crate::option::OptionChoice;

/// `type` value for a chat-input (slash) command.
pub const CHAT_INPUT_COMMAND_TYPE: u8 = 1;

/// Wire-level option type discriminant.
///
/// Unknown discriminants are kept as [`OptionType::Unknown`] so payloads
/// carrying option types newer than this crate still deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum OptionType {
    Subcommand,
    SubcommandGroup,
    String,
    Integer,
    Boolean,
    User,
    Channel,
    Role,
    Mentionable,
    Number,
    Attachment,
    Unknown(u8),
}

impl OptionType {
    /// Whether this type groups other options (subcommand or group).
    pub fn is_container(self) -> bool {
        matches!(self, OptionType::Subcommand | OptionType::SubcommandGroup)
    }
}

impl From<u8> for OptionType {
    fn from(raw: u8) -> Self {
        match raw {
            1 => OptionType::Subcommand,
            2 => OptionType::SubcommandGroup,
            3 => OptionType::String,
            4 => OptionType::Integer,
            5 => OptionType::Boolean,
            6 => OptionType::User,
            7 => OptionType::Channel,
            8 => OptionType::Role,
            9 => OptionType::Mentionable,
            10 => OptionType::Number,
            11 => OptionType::Attachment,
            other => OptionType::Unknown(other),
        }
    }
}

impl From<OptionType> for u8 {
    fn from(kind: OptionType) -> Self {
        match kind {
            OptionType::Subcommand => 1,
            OptionType::SubcommandGroup => 2,
            OptionType::String => 3,
            OptionType::Integer => 4,
            OptionType::Boolean => 5,
            OptionType::User => 6,
            OptionType::Channel => 7,
            OptionType::Role => 8,
            OptionType::Mentionable => 9,
            OptionType::Number => 10,
            OptionType::Attachment => 11,
            OptionType::Unknown(raw) => raw,
        }
    }
}

/// One option node in the registration schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireOption {
    #[serde(rename = "type")]
    pub kind: OptionType,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<OptionChoice>,
    /// Present (possibly empty) on everything except autocompletable scalars.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<WireOption>>,
    /// Present only on String/Integer/Number options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autocomplete: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<serde_json::Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<serde_json::Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u16>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub channel_types: Vec<u8>,
}

/// A chat-input command as submitted to the registration routes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireCommand {
    #[serde(rename = "type")]
    pub kind: u8,
    pub name: String,
    pub description: String,
    /// Always serialized, even when empty.
    #[serde(default)]
    pub options: Vec<WireOption>,
}

/// One autocomplete suggestion as returned to the platform.
///
/// Values are always stringified, regardless of the option's type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireChoice {
    pub name: String,
    pub value: String,
}
