//! Serde types for inbound interaction payloads.
//!
//! Only the fields needed for resolution and autocomplete are deserialized.
//! Unknown fields are silently ignored via `#[serde(default)]` and `Option`.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ids::Snowflake;
use crate::provider::Invoker;
use crate::wire::OptionType;

/// A platform user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    #[serde(default)]
    pub global_name: Option<String>,
    #[serde(default)]
    pub bot: bool,
}

/// A user's membership in a guild.
///
/// Members inside resolved side-tables carry no `user`; the user lives in
/// the `users` table under the same ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub nick: Option<String>,
    #[serde(default)]
    pub roles: Vec<Snowflake>,
    #[serde(default)]
    pub joined_at: Option<String>,
}

/// A guild role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: Snowflake,
    pub name: String,
    #[serde(default)]
    pub color: u32,
    #[serde(default)]
    pub position: i64,
    #[serde(default)]
    pub permissions: Option<String>,
}

/// A channel, as resolved in an interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: Snowflake,
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub parent_id: Option<Snowflake>,
    #[serde(default)]
    pub permissions: Option<String>,
}

/// Entity side-tables referenced by ID from option values.
///
/// Each table is absent unless the invocation actually referenced an entity
/// of that kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolvedData {
    #[serde(default)]
    pub users: Option<HashMap<Snowflake, User>>,
    #[serde(default)]
    pub members: Option<HashMap<Snowflake, Member>>,
    #[serde(default)]
    pub roles: Option<HashMap<Snowflake, Role>>,
    #[serde(default)]
    pub channels: Option<HashMap<Snowflake, Channel>>,
}

/// One option in an invocation, as sent by the platform.
///
/// Containers carry `options`; leaves carry `value`. During autocomplete a
/// single leaf in the whole tree is marked `focused`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionOption {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: OptionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<InteractionOption>>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub focused: bool,
}

/// Interaction kind discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum InteractionType {
    Ping,
    ApplicationCommand,
    MessageComponent,
    ApplicationCommandAutocomplete,
    ModalSubmit,
    Unknown(u8),
}

impl From<u8> for InteractionType {
    fn from(raw: u8) -> Self {
        match raw {
            1 => InteractionType::Ping,
            2 => InteractionType::ApplicationCommand,
            3 => InteractionType::MessageComponent,
            4 => InteractionType::ApplicationCommandAutocomplete,
            5 => InteractionType::ModalSubmit,
            other => InteractionType::Unknown(other),
        }
    }
}

impl From<InteractionType> for u8 {
    fn from(kind: InteractionType) -> Self {
        match kind {
            InteractionType::Ping => 1,
            InteractionType::ApplicationCommand => 2,
            InteractionType::MessageComponent => 3,
            InteractionType::ApplicationCommandAutocomplete => 4,
            InteractionType::ModalSubmit => 5,
            InteractionType::Unknown(raw) => raw,
        }
    }
}

/// The command-specific part of an interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionData {
    pub id: Snowflake,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: u8,
    #[serde(default)]
    pub options: Vec<InteractionOption>,
    #[serde(default)]
    pub resolved: Option<ResolvedData>,
    #[serde(default)]
    pub guild_id: Option<Snowflake>,
}

/// A full interaction envelope.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    pub id: Snowflake,
    pub application_id: Snowflake,
    #[serde(rename = "type")]
    pub kind: InteractionType,
    #[serde(default)]
    pub data: Option<InteractionData>,
    #[serde(default)]
    pub guild_id: Option<Snowflake>,
    #[serde(default)]
    pub channel_id: Option<Snowflake>,
    /// Set when invoked inside a guild.
    #[serde(default)]
    pub member: Option<Member>,
    /// Set when invoked in a DM.
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub token: String,
}

impl Interaction {
    pub fn is_autocomplete(&self) -> bool {
        self.kind == InteractionType::ApplicationCommandAutocomplete
    }

    /// The invoking identity. The member's user takes priority over the
    /// top-level user; returns `None` if neither is present.
    pub fn invoker(&self) -> Option<Invoker> {
        if let Some(member) = &self.member {
            if let Some(user) = &member.user {
                return Some(Invoker {
                    user: user.clone(),
                    member: Some(member.clone()),
                });
            }
        }
        self.user.as_ref().map(|user| Invoker {
            user: user.clone(),
            member: None,
        })
    }
}

impl fmt::Debug for Interaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interaction")
            .field("id", &self.id)
            .field("application_id", &self.application_id)
            .field("kind", &self.kind)
            .field("data", &self.data)
            .field("guild_id", &self.guild_id)
            .field("channel_id", &self.channel_id)
            .field("member", &self.member)
            .field("user", &self.user)
            .field("token", &"[REDACTED]")
            .finish()
    }
}
