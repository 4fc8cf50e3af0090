//! Resolution of invocation options into a handler-facing argument map.
//!
//! The output mirrors the invocation path: a subcommand (or group) maps to a
//! nested [`ArgumentMap`] holding only the options the user actually sent.
//! Entity options are swapped for their resolved objects. Anything that
//! cannot be resolved is left out rather than reported.

use std::collections::BTreeMap;

use slashwire_types::{Channel, InteractionOption, Member, OptionType, ResolvedData, Role, User};
use tracing::debug;

/// A resolved argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgumentValue {
    /// Raw value of a String/Integer/Number/Boolean/Mentionable/Attachment option.
    Scalar(serde_json::Value),
    Channel(Channel),
    Role(Role),
    /// `member` is `None` when the user is not part of the invoking guild.
    User {
        user: Option<User>,
        member: Option<Member>,
    },
    /// Arguments of the selected subcommand or group.
    Nested(ArgumentMap),
}

/// Option name -> resolved value, for one level of the invocation path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArgumentMap {
    values: BTreeMap<String, ArgumentValue>,
}

impl ArgumentMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: ArgumentValue) {
        self.values.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&ArgumentValue> {
        self.values.get(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArgumentValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    fn scalar(&self, name: &str) -> Option<&serde_json::Value> {
        match self.values.get(name)? {
            ArgumentValue::Scalar(v) => Some(v),
            _ => None,
        }
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.scalar(name)?.as_str()
    }

    pub fn get_i64(&self, name: &str) -> Option<i64> {
        self.scalar(name)?.as_i64()
    }

    pub fn get_f64(&self, name: &str) -> Option<f64> {
        self.scalar(name)?.as_f64()
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.scalar(name)?.as_bool()
    }

    /// Arguments of the subcommand or group called `name`, if it was invoked.
    pub fn subcommand(&self, name: &str) -> Option<&ArgumentMap> {
        match self.values.get(name)? {
            ArgumentValue::Nested(map) => Some(map),
            _ => None,
        }
    }

    pub fn user(&self, name: &str) -> Option<(Option<&User>, Option<&Member>)> {
        match self.values.get(name)? {
            ArgumentValue::User { user, member } => Some((user.as_ref(), member.as_ref())),
            _ => None,
        }
    }

    pub fn channel(&self, name: &str) -> Option<&Channel> {
        match self.values.get(name)? {
            ArgumentValue::Channel(c) => Some(c),
            _ => None,
        }
    }

    pub fn role(&self, name: &str) -> Option<&Role> {
        match self.values.get(name)? {
            ArgumentValue::Role(r) => Some(r),
            _ => None,
        }
    }
}

/// Resolve an invocation's options against its entity side-tables.
///
/// Never fails: options whose side-table is missing, whose referenced entity
/// is absent, or whose type is unrecognized are omitted from the result.
pub fn resolve_arguments(
    options: &[InteractionOption],
    resolved: Option<&ResolvedData>,
) -> ArgumentMap {
    let mut args = ArgumentMap::new();

    for opt in options {
        match opt.kind {
            OptionType::Subcommand | OptionType::SubcommandGroup => {
                let nested = resolve_arguments(opt.options.as_deref().unwrap_or_default(), resolved);
                args.insert(&opt.name, ArgumentValue::Nested(nested));
            }
            OptionType::Channel => {
                let Some(channels) = resolved.and_then(|r| r.channels.as_ref()) else {
                    debug!(option = %opt.name, "no resolved channels; dropping option");
                    continue;
                };
                match entity_id(opt).and_then(|id| channels.get(id)) {
                    Some(channel) => args.insert(&opt.name, ArgumentValue::Channel(channel.clone())),
                    None => debug!(option = %opt.name, "channel not in resolved table"),
                }
            }
            OptionType::Role => {
                let Some(roles) = resolved.and_then(|r| r.roles.as_ref()) else {
                    debug!(option = %opt.name, "no resolved roles; dropping option");
                    continue;
                };
                match entity_id(opt).and_then(|id| roles.get(id)) {
                    Some(role) => args.insert(&opt.name, ArgumentValue::Role(role.clone())),
                    None => debug!(option = %opt.name, "role not in resolved table"),
                }
            }
            OptionType::User => {
                let tables = resolved.and_then(|r| r.users.as_ref().zip(r.members.as_ref()));
                let Some((users, members)) = tables else {
                    debug!(option = %opt.name, "users or members table missing; dropping option");
                    continue;
                };
                let Some(id) = entity_id(opt) else {
                    debug!(option = %opt.name, "user option without an ID value");
                    continue;
                };
                args.insert(
                    &opt.name,
                    ArgumentValue::User {
                        user: users.get(id).cloned(),
                        member: members.get(id).cloned(),
                    },
                );
            }
            OptionType::String
            | OptionType::Integer
            | OptionType::Number
            | OptionType::Boolean
            | OptionType::Mentionable
            | OptionType::Attachment => {
                if let Some(value) = &opt.value {
                    args.insert(&opt.name, ArgumentValue::Scalar(value.clone()));
                }
            }
            OptionType::Unknown(raw) => {
                debug!(option = %opt.name, kind = raw, "unrecognized option type; dropping option");
            }
        }
    }

    args
}

fn entity_id(opt: &InteractionOption) -> Option<&str> {
    opt.value.as_ref()?.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn options(value: serde_json::Value) -> Vec<InteractionOption> {
        serde_json::from_value(value).unwrap()
    }

    fn resolved(value: serde_json::Value) -> ResolvedData {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn scalars_at_top_level() {
        let opts = options(json!([
            {"name": "query", "type": 3, "value": "iron ore"},
            {"name": "count", "type": 4, "value": 12},
            {"name": "ratio", "type": 10, "value": 0.5},
            {"name": "silent", "type": 5, "value": true}
        ]));
        let args = resolve_arguments(&opts, None);
        assert_eq!(args.len(), 4);
        assert_eq!(args.get_str("query"), Some("iron ore"));
        assert_eq!(args.get_i64("count"), Some(12));
        assert_eq!(args.get_f64("ratio"), Some(0.5));
        assert_eq!(args.get_bool("silent"), Some(true));
    }

    #[test]
    fn subcommand_nests_its_arguments() {
        let opts = options(json!([{
            "name": "x",
            "type": 1,
            "options": [
                {"name": "a", "type": 4, "value": 1},
                {"name": "b", "type": 3, "value": "s"}
            ]
        }]));
        let args = resolve_arguments(&opts, None);

        assert_eq!(args.len(), 1);
        assert!(!args.contains_key("a"));
        let x = args.subcommand("x").unwrap();
        assert_eq!(x.get_i64("a"), Some(1));
        assert_eq!(x.get_str("b"), Some("s"));
    }

    #[test]
    fn group_nests_two_levels() {
        let opts = options(json!([{
            "name": "config",
            "type": 2,
            "options": [{
                "name": "set",
                "type": 1,
                "options": [{"name": "key", "type": 3, "value": "prefix"}]
            }]
        }]));
        let args = resolve_arguments(&opts, None);
        let set = args.subcommand("config").and_then(|g| g.subcommand("set")).unwrap();
        assert_eq!(set.get_str("key"), Some("prefix"));
    }

    #[test]
    fn subcommand_without_options_is_empty_map() {
        let opts = options(json!([{"name": "status", "type": 1}]));
        let args = resolve_arguments(&opts, None);
        assert!(args.subcommand("status").unwrap().is_empty());
    }

    #[test]
    fn channel_and_role_resolved() {
        let opts = options(json!([
            {"name": "where", "type": 7, "value": "55"},
            {"name": "who", "type": 8, "value": "66"}
        ]));
        let tables = resolved(json!({
            "channels": {"55": {"id": "55", "type": 0, "name": "general"}},
            "roles": {"66": {"id": "66", "name": "mods"}}
        }));
        let args = resolve_arguments(&opts, Some(&tables));
        assert_eq!(args.channel("where").unwrap().name.as_deref(), Some("general"));
        assert_eq!(args.role("who").unwrap().name, "mods");
    }

    #[test]
    fn entity_options_skipped_without_tables() {
        let opts = options(json!([
            {"name": "where", "type": 7, "value": "55"},
            {"name": "who", "type": 8, "value": "66"},
            {"name": "target", "type": 6, "value": "77"}
        ]));
        assert!(resolve_arguments(&opts, None).is_empty());
        assert!(resolve_arguments(&opts, Some(&ResolvedData::default())).is_empty());
    }

    #[test]
    fn channel_missing_from_table_is_skipped() {
        let opts = options(json!([{"name": "where", "type": 7, "value": "99"}]));
        let tables = resolved(json!({"channels": {"55": {"id": "55", "type": 0}}}));
        assert!(resolve_arguments(&opts, Some(&tables)).is_empty());
    }

    #[test]
    fn user_needs_both_tables() {
        let opts = options(json!([{"name": "target", "type": 6, "value": "77"}]));
        let only_users = resolved(json!({
            "users": {"77": {"id": "77", "username": "carol"}}
        }));
        let args = resolve_arguments(&opts, Some(&only_users));
        assert!(!args.contains_key("target"));
    }

    #[test]
    fn user_with_member() {
        let opts = options(json!([{"name": "target", "type": 6, "value": "77"}]));
        let tables = resolved(json!({
            "users": {"77": {"id": "77", "username": "carol"}},
            "members": {"77": {"nick": "Caz", "roles": []}}
        }));
        let args = resolve_arguments(&opts, Some(&tables));
        let (user, member) = args.user("target").unwrap();
        assert_eq!(user.unwrap().username, "carol");
        assert_eq!(member.unwrap().nick.as_deref(), Some("Caz"));
    }

    #[test]
    fn user_outside_guild_has_no_member() {
        let opts = options(json!([{"name": "target", "type": 6, "value": "77"}]));
        let tables = resolved(json!({
            "users": {"77": {"id": "77", "username": "carol"}},
            "members": {}
        }));
        let args = resolve_arguments(&opts, Some(&tables));
        let (user, member) = args.user("target").unwrap();
        assert!(user.is_some());
        assert!(member.is_none());
    }

    #[test]
    fn unknown_type_is_dropped() {
        let opts = options(json!([
            {"name": "future", "type": 99, "value": "?"},
            {"name": "known", "type": 3, "value": "ok"}
        ]));
        let args = resolve_arguments(&opts, None);
        assert_eq!(args.len(), 1);
        assert_eq!(args.get_str("known"), Some("ok"));
    }

    #[test]
    fn mentionable_keeps_raw_id() {
        let opts = options(json!([{"name": "ping", "type": 9, "value": "123"}]));
        let args = resolve_arguments(&opts, None);
        assert_eq!(args.get_str("ping"), Some("123"));
    }

    #[test]
    fn typed_accessors_reject_wrong_variant() {
        let opts = options(json!([{"name": "n", "type": 4, "value": 3}]));
        let args = resolve_arguments(&opts, None);
        assert!(args.get_str("n").is_none());
        assert!(args.subcommand("n").is_none());
        assert!(args.channel("n").is_none());
    }
}
