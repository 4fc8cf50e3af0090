//! Core types shared by the slashwire crates.
//!
//! Defines the command option tree, the wire schema submitted at
//! registration time, the interaction payloads received at invocation
//! time, configuration, and the shared error type.

pub mod command;
pub mod config;
pub mod error;
pub mod ids;
pub mod interaction;
pub mod option;
pub mod provider;
pub mod wire;

pub use command::CommandDefinition;
pub use config::{CommandsConfig, DEFAULT_API_BASE_URL};
pub use error::SlashwireError;
pub use ids::Snowflake;
pub use interaction::{
    Channel, Interaction, InteractionData, InteractionOption, InteractionType, Member,
    ResolvedData, Role, User,
};
pub use option::{
    ChoiceValue, CommandOption, LeafKind, LeafOption, OptionChoice, Subcommand, SubcommandGroup,
};
pub use provider::{provider_fn, AutocompleteProvider, Invoker, Suggestion};
pub use wire::{OptionType, WireChoice, WireCommand, WireOption, CHAT_INPUT_COMMAND_TYPE};
