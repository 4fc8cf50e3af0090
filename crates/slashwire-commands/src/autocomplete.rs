//! Routing of autocomplete requests to the focused option's provider.
//!
//! The platform sends the partially filled invocation tree with exactly one
//! leaf marked `focused`. Routing walks that tree alongside the command's
//! declared options:
//!
//! - group: match the group, then its subcommand, then the focused leaf
//! - subcommand: match the subcommand, then the focused leaf
//! - leaf: look up the declared top-level option
//!
//! At each level, if nothing is marked focused the first entry is used.
//! Any mismatch between the payload and the declared tree ends routing with
//! no suggestions. Autocomplete never returns an error.

use slashwire_types::{
    CommandDefinition, CommandOption, InteractionOption, Invoker, LeafOption, OptionType,
    Subcommand, WireChoice,
};
use tracing::debug;

/// The platform rejects autocomplete responses with more choices than this.
pub const MAX_SUGGESTIONS: usize = 25;

/// Produce suggestions for the focused option of an autocomplete request.
///
/// `options` is the interaction's top-level option list. Returns at most
/// [`MAX_SUGGESTIONS`] choices in provider order, values stringified.
pub async fn handle_autocomplete(
    command: &CommandDefinition,
    options: &[InteractionOption],
    invoker: &Invoker,
) -> Vec<WireChoice> {
    let Some((leaf, data)) = locate(command, options) else {
        return Vec::new();
    };
    complete(leaf, data, invoker).await
}

/// Entry marked focused, else the first entry.
fn focused(options: &[InteractionOption]) -> Option<&InteractionOption> {
    options.iter().find(|o| o.focused).or_else(|| options.first())
}

/// Walk the payload down to the focused leaf and its declared option.
fn locate<'a, 'b>(
    command: &'a CommandDefinition,
    options: &'b [InteractionOption],
) -> Option<(&'a LeafOption, &'b InteractionOption)> {
    let data = focused(options)?;

    match data.kind {
        OptionType::SubcommandGroup => {
            let Some(CommandOption::SubcommandGroup(group)) = command.option(&data.name) else {
                debug!(command = %command.name, group = %data.name, "no such subcommand group");
                return None;
            };
            let Some(nested) = data.options.as_deref().and_then(<[_]>::first) else {
                debug!(command = %command.name, group = %data.name, "group payload has no subcommand");
                return None;
            };
            let Some(subcommand) = group.find(&nested.name) else {
                debug!(
                    command = %command.name,
                    group = %group.name,
                    subcommand = %nested.name,
                    "no such subcommand in group"
                );
                return None;
            };
            locate_in_subcommand(command, subcommand, nested)
        }
        OptionType::Subcommand => {
            let Some(CommandOption::Subcommand(subcommand)) = command.option(&data.name) else {
                debug!(command = %command.name, subcommand = %data.name, "no such subcommand");
                return None;
            };
            locate_in_subcommand(command, subcommand, data)
        }
        _ => match command.option(&data.name) {
            Some(CommandOption::Leaf(leaf)) => Some((leaf, data)),
            _ => {
                debug!(command = %command.name, option = %data.name, "no such top-level option");
                None
            }
        },
    }
}

fn locate_in_subcommand<'a, 'b>(
    command: &CommandDefinition,
    subcommand: &'a Subcommand,
    data: &'b InteractionOption,
) -> Option<(&'a LeafOption, &'b InteractionOption)> {
    let nested = data.options.as_deref().unwrap_or_default();
    let Some(leaf_data) = focused(nested) else {
        debug!(command = %command.name, subcommand = %subcommand.name, "subcommand payload has no options");
        return None;
    };
    let Some(leaf) = subcommand.find(&leaf_data.name) else {
        debug!(
            command = %command.name,
            subcommand = %subcommand.name,
            option = %leaf_data.name,
            "no such option in subcommand"
        );
        return None;
    };
    Some((leaf, leaf_data))
}

async fn complete(leaf: &LeafOption, data: &InteractionOption, invoker: &Invoker) -> Vec<WireChoice> {
    let Some(provider) = leaf.autocomplete_provider() else {
        debug!(option = %leaf.name, "option has no autocomplete provider");
        return Vec::new();
    };

    provider
        .suggest(data.value.clone(), invoker.clone())
        .await
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|s| WireChoice {
            name: s.name,
            value: s.value.to_string(),
        })
        .collect()
}
