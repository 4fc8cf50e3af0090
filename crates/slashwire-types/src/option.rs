//! The command option tree.
//!
//! A command's options form a tree at most three levels deep:
//! command -> [subcommand group ->] subcommand -> leaf options. The nesting
//! rules are carried by the types themselves: a [`SubcommandGroup`] can only
//! hold [`Subcommand`]s, and a [`Subcommand`] can only hold [`LeafOption`]s.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::provider::AutocompleteProvider;
use crate::wire::OptionType;

/// A choice value: the platform accepts strings, integers, and doubles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChoiceValue {
    String(String),
    Integer(i64),
    Number(f64),
}

impl fmt::Display for ChoiceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChoiceValue::String(s) => f.write_str(s),
            ChoiceValue::Integer(n) => write!(f, "{n}"),
            ChoiceValue::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for ChoiceValue {
    fn from(s: &str) -> Self {
        ChoiceValue::String(s.to_string())
    }
}

impl From<String> for ChoiceValue {
    fn from(s: String) -> Self {
        ChoiceValue::String(s)
    }
}

impl From<i64> for ChoiceValue {
    fn from(n: i64) -> Self {
        ChoiceValue::Integer(n)
    }
}

impl From<f64> for ChoiceValue {
    fn from(n: f64) -> Self {
        ChoiceValue::Number(n)
    }
}

/// A fixed choice declared on a leaf option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionChoice {
    pub name: String,
    pub value: ChoiceValue,
}

impl OptionChoice {
    pub fn new(name: impl Into<String>, value: impl Into<ChoiceValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// The value type of a leaf option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeafKind {
    String,
    Integer,
    Number,
    Boolean,
    User,
    Channel,
    Role,
    Mentionable,
    Attachment,
}

impl LeafKind {
    pub fn option_type(self) -> OptionType {
        match self {
            LeafKind::String => OptionType::String,
            LeafKind::Integer => OptionType::Integer,
            LeafKind::Number => OptionType::Number,
            LeafKind::Boolean => OptionType::Boolean,
            LeafKind::User => OptionType::User,
            LeafKind::Channel => OptionType::Channel,
            LeafKind::Role => OptionType::Role,
            LeafKind::Mentionable => OptionType::Mentionable,
            LeafKind::Attachment => OptionType::Attachment,
        }
    }

    /// Only free-form scalar inputs can be autocompleted by the platform.
    pub fn supports_autocomplete(self) -> bool {
        matches!(self, LeafKind::String | LeafKind::Integer | LeafKind::Number)
    }
}

/// A single parameter the user fills in.
#[derive(Clone)]
pub struct LeafOption {
    pub name: String,
    pub description: String,
    pub kind: LeafKind,
    pub required: bool,
    pub choices: Vec<OptionChoice>,
    pub min_value: Option<serde_json::Number>,
    pub max_value: Option<serde_json::Number>,
    pub min_length: Option<u16>,
    pub max_length: Option<u16>,
    pub channel_types: Vec<u8>,
    autocomplete: Option<Arc<dyn AutocompleteProvider>>,
}

impl LeafOption {
    pub fn new(kind: LeafKind, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind,
            required: false,
            choices: Vec::new(),
            min_value: None,
            max_value: None,
            min_length: None,
            max_length: None,
            channel_types: Vec::new(),
            autocomplete: None,
        }
    }

    pub fn string(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(LeafKind::String, name, description)
    }

    pub fn integer(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(LeafKind::Integer, name, description)
    }

    pub fn number(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(LeafKind::Number, name, description)
    }

    pub fn boolean(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(LeafKind::Boolean, name, description)
    }

    pub fn user(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(LeafKind::User, name, description)
    }

    pub fn channel(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(LeafKind::Channel, name, description)
    }

    pub fn role(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(LeafKind::Role, name, description)
    }

    pub fn mentionable(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(LeafKind::Mentionable, name, description)
    }

    pub fn attachment(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(LeafKind::Attachment, name, description)
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_choice(mut self, choice: OptionChoice) -> Self {
        self.choices.push(choice);
        self
    }

    /// Numeric bounds, used by Integer and Number options.
    pub fn with_value_range(
        mut self,
        min: Option<serde_json::Number>,
        max: Option<serde_json::Number>,
    ) -> Self {
        self.min_value = min;
        self.max_value = max;
        self
    }

    /// Length bounds, used by String options.
    pub fn with_length_range(mut self, min: Option<u16>, max: Option<u16>) -> Self {
        self.min_length = min;
        self.max_length = max;
        self
    }

    pub fn with_channel_types(mut self, channel_types: Vec<u8>) -> Self {
        self.channel_types = channel_types;
        self
    }

    /// Attach a suggestion provider.
    ///
    /// The provider is ignored for kinds that do not support autocomplete.
    pub fn with_autocomplete(mut self, provider: Arc<dyn AutocompleteProvider>) -> Self {
        if self.kind.supports_autocomplete() {
            self.autocomplete = Some(provider);
        }
        self
    }

    pub fn autocomplete_provider(&self) -> Option<&Arc<dyn AutocompleteProvider>> {
        self.autocomplete.as_ref()
    }

    pub fn has_autocomplete(&self) -> bool {
        self.autocomplete.is_some()
    }
}

impl fmt::Debug for LeafOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeafOption")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("required", &self.required)
            .field("choices", &self.choices)
            .field("autocomplete", &self.autocomplete.is_some())
            .finish_non_exhaustive()
    }
}

/// A subcommand: a named group of leaf options.
#[derive(Debug, Clone)]
pub struct Subcommand {
    pub name: String,
    pub description: String,
    pub options: Vec<LeafOption>,
}

impl Subcommand {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            options: Vec::new(),
        }
    }

    pub fn with_option(mut self, option: LeafOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn find(&self, name: &str) -> Option<&LeafOption> {
        self.options.iter().find(|o| o.name == name)
    }
}

/// A subcommand group: a named group of subcommands.
#[derive(Debug, Clone)]
pub struct SubcommandGroup {
    pub name: String,
    pub description: String,
    pub subcommands: Vec<Subcommand>,
}

impl SubcommandGroup {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            subcommands: Vec::new(),
        }
    }

    pub fn with_subcommand(mut self, subcommand: Subcommand) -> Self {
        self.subcommands.push(subcommand);
        self
    }

    pub fn find(&self, name: &str) -> Option<&Subcommand> {
        self.subcommands.iter().find(|s| s.name == name)
    }
}

/// A top-level option of a command.
#[derive(Debug, Clone)]
pub enum CommandOption {
    SubcommandGroup(SubcommandGroup),
    Subcommand(Subcommand),
    Leaf(LeafOption),
}

impl CommandOption {
    pub fn name(&self) -> &str {
        match self {
            CommandOption::SubcommandGroup(g) => &g.name,
            CommandOption::Subcommand(s) => &s.name,
            CommandOption::Leaf(l) => &l.name,
        }
    }

    pub fn option_type(&self) -> OptionType {
        match self {
            CommandOption::SubcommandGroup(_) => OptionType::SubcommandGroup,
            CommandOption::Subcommand(_) => OptionType::Subcommand,
            CommandOption::Leaf(l) => l.kind.option_type(),
        }
    }
}

impl From<SubcommandGroup> for CommandOption {
    fn from(group: SubcommandGroup) -> Self {
        CommandOption::SubcommandGroup(group)
    }
}

impl From<Subcommand> for CommandOption {
    fn from(subcommand: Subcommand) -> Self {
        CommandOption::Subcommand(subcommand)
    }
}

impl From<LeafOption> for CommandOption {
    fn from(leaf: LeafOption) -> Self {
        CommandOption::Leaf(leaf)
    }
}
