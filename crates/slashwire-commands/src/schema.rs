//! Projection of local option trees into the registration schema.
//!
//! Pure and total: any [`CommandDefinition`] projects without error.
//! Autocomplete providers are reduced to the `autocomplete` flag.

use slashwire_types::{
    CommandDefinition, CommandOption, LeafOption, OptionType, Subcommand, SubcommandGroup,
    WireCommand, WireOption, CHAT_INPUT_COMMAND_TYPE,
};

/// Project a command root into its wire form.
pub fn project_command(command: &CommandDefinition) -> WireCommand {
    WireCommand {
        kind: CHAT_INPUT_COMMAND_TYPE,
        name: command.name.clone(),
        description: command.description.clone(),
        options: command.options.iter().map(project_option).collect(),
    }
}

/// Project one option (and its children) into its wire form.
pub fn project_option(option: &CommandOption) -> WireOption {
    match option {
        CommandOption::SubcommandGroup(group) => project_group(group),
        CommandOption::Subcommand(subcommand) => project_subcommand(subcommand),
        CommandOption::Leaf(leaf) => project_leaf(leaf),
    }
}

fn project_group(group: &SubcommandGroup) -> WireOption {
    let mut wire = bare(OptionType::SubcommandGroup, &group.name, &group.description);
    wire.options = Some(group.subcommands.iter().map(project_subcommand).collect());
    wire
}

fn project_subcommand(subcommand: &Subcommand) -> WireOption {
    let mut wire = bare(OptionType::Subcommand, &subcommand.name, &subcommand.description);
    wire.options = Some(subcommand.options.iter().map(project_leaf).collect());
    wire
}

fn project_leaf(leaf: &LeafOption) -> WireOption {
    let mut wire = bare(leaf.kind.option_type(), &leaf.name, &leaf.description);
    wire.required = leaf.required;
    wire.choices = leaf.choices.clone();
    wire.min_value = leaf.min_value.clone();
    wire.max_value = leaf.max_value.clone();
    wire.min_length = leaf.min_length;
    wire.max_length = leaf.max_length;
    wire.channel_types = leaf.channel_types.clone();

    if leaf.kind.supports_autocomplete() {
        wire.autocomplete = Some(leaf.has_autocomplete());
    } else {
        // Non-autocompletable leaves still carry an (empty) options list.
        wire.options = Some(Vec::new());
    }
    wire
}

fn bare(kind: OptionType, name: &str, description: &str) -> WireOption {
    WireOption {
        kind,
        name: name.to_string(),
        description: description.to_string(),
        required: false,
        choices: Vec::new(),
        options: None,
        autocomplete: None,
        min_value: None,
        max_value: None,
        min_length: None,
        max_length: None,
        channel_types: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use slashwire_types::{provider_fn, LeafKind, OptionChoice, Suggestion};

    fn shop_command() -> CommandDefinition {
        let items = provider_fn(|_, _| async { vec![Suggestion::new("Sword", "sword")] });
        CommandDefinition::new("shop", "Buy and sell items")
            .with_option(
                Subcommand::new("buy", "Buy an item")
                    .with_option(
                        LeafOption::string("item", "Item to buy")
                            .required(true)
                            .with_autocomplete(items),
                    )
                    .with_option(
                        LeafOption::integer("quantity", "How many")
                            .with_value_range(Some(1u64.into()), Some(100u64.into())),
                    ),
            )
            .with_option(
                SubcommandGroup::new("admin", "Shop administration").with_subcommand(
                    Subcommand::new("restock", "Restock the shop")
                        .with_option(LeafOption::channel("log", "Where to log").with_channel_types(vec![0])),
                ),
            )
            .with_option(LeafOption::boolean("ephemeral", "Only show to me"))
    }

    #[test]
    fn projects_full_tree() {
        let wire = project_command(&shop_command());
        let value = serde_json::to_value(&wire).unwrap();

        assert_eq!(
            value,
            json!({
                "type": 1,
                "name": "shop",
                "description": "Buy and sell items",
                "options": [
                    {
                        "type": 1,
                        "name": "buy",
                        "description": "Buy an item",
                        "options": [
                            {
                                "type": 3,
                                "name": "item",
                                "description": "Item to buy",
                                "required": true,
                                "autocomplete": true
                            },
                            {
                                "type": 4,
                                "name": "quantity",
                                "description": "How many",
                                "autocomplete": false,
                                "min_value": 1,
                                "max_value": 100
                            }
                        ]
                    },
                    {
                        "type": 2,
                        "name": "admin",
                        "description": "Shop administration",
                        "options": [{
                            "type": 1,
                            "name": "restock",
                            "description": "Restock the shop",
                            "options": [{
                                "type": 7,
                                "name": "log",
                                "description": "Where to log",
                                "options": [],
                                "channel_types": [0]
                            }]
                        }]
                    },
                    {
                        "type": 5,
                        "name": "ephemeral",
                        "description": "Only show to me",
                        "options": []
                    }
                ]
            })
        );
    }

    #[test]
    fn empty_subcommand_keeps_options_key() {
        let opt = CommandOption::from(Subcommand::new("status", "Show status"));
        let value = serde_json::to_value(project_option(&opt)).unwrap();
        assert_eq!(value["options"], json!([]));
    }

    #[test]
    fn empty_command_keeps_options_key() {
        let value = serde_json::to_value(project_command(&CommandDefinition::new("ping", "Pong"))).unwrap();
        assert_eq!(value["options"], json!([]));
    }

    #[test]
    fn choices_are_copied() {
        let leaf = LeafOption::string("color", "Pick a color")
            .with_choice(OptionChoice::new("Red", "red"))
            .with_choice(OptionChoice::new("Blue", "blue"));
        let wire = project_option(&leaf.into());
        assert_eq!(wire.choices.len(), 2);
        assert_eq!(wire.choices[1].name, "Blue");
        assert_eq!(wire.autocomplete, Some(false));
    }

    fn autocomplete_flags(options: &[WireOption], out: &mut Vec<(String, Option<bool>)>) {
        for opt in options {
            out.push((opt.name.clone(), opt.autocomplete));
            if let Some(children) = &opt.options {
                autocomplete_flags(children, out);
            }
        }
    }

    #[test]
    fn autocomplete_flag_matches_provider_presence() {
        let command = shop_command();
        let wire = project_command(&command);
        let mut flags = Vec::new();
        autocomplete_flags(&wire.options, &mut flags);

        let mut leaves = Vec::new();
        for opt in &command.options {
            match opt {
                CommandOption::Leaf(l) => leaves.push(l),
                CommandOption::Subcommand(s) => leaves.extend(&s.options),
                CommandOption::SubcommandGroup(g) => {
                    for s in &g.subcommands {
                        leaves.extend(&s.options);
                    }
                }
            }
        }

        for leaf in leaves {
            let (_, flag) = flags.iter().find(|(name, _)| name == &leaf.name).unwrap();
            assert_eq!(flag.unwrap_or(false), leaf.has_autocomplete(), "leaf {}", leaf.name);
            if !leaf.kind.supports_autocomplete() {
                assert!(flag.is_none());
            }
        }
    }

    #[test]
    fn wire_output_parses_back() {
        let wire = project_command(&shop_command());
        let text = serde_json::to_string(&wire).unwrap();
        let back: WireCommand = serde_json::from_str(&text).unwrap();
        assert_eq!(back, wire);
        assert_eq!(LeafKind::Integer.option_type(), back.options[0].options.as_ref().unwrap()[1].kind);
    }
}
