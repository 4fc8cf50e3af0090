//! Submission of projected commands to the platform.
//!
//! The registrar projects definitions through [`crate::schema`] and hands
//! the result to a [`CommandTransport`]. It performs no validation and no
//! retries; transport errors reach the caller unchanged.

use std::fmt;

use async_trait::async_trait;
use slashwire_types::{CommandDefinition, CommandsConfig, Snowflake, WireCommand};
use tracing::info;

use crate::error::TransportError;
use crate::rest::RestTransport;
use crate::schema::project_command;

/// Registration destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Commands visible everywhere the application is installed.
    Global { application_id: Snowflake },
    /// Commands visible in one guild only.
    Guild {
        application_id: Snowflake,
        guild_id: Snowflake,
    },
}

impl Route {
    /// Global when `guild_id` is `None`, guild-scoped otherwise.
    pub fn for_scope(application_id: &Snowflake, guild_id: Option<&Snowflake>) -> Self {
        match guild_id {
            None => Route::Global {
                application_id: application_id.clone(),
            },
            Some(guild_id) => Route::Guild {
                application_id: application_id.clone(),
                guild_id: guild_id.clone(),
            },
        }
    }

    /// Path relative to the API root.
    pub fn path(&self) -> String {
        match self {
            Route::Global { application_id } => format!("/applications/{application_id}/commands"),
            Route::Guild {
                application_id,
                guild_id,
            } => format!("/applications/{application_id}/guilds/{guild_id}/commands"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Network collaborator that performs registration requests.
#[async_trait]
pub trait CommandTransport: Send + Sync {
    /// Replace every command at `route` with `body`.
    async fn put_commands(
        &self,
        route: &Route,
        body: &[WireCommand],
    ) -> Result<serde_json::Value, TransportError>;

    /// Create or update the single command in `body` at `route`.
    async fn post_command(
        &self,
        route: &Route,
        body: &WireCommand,
    ) -> Result<serde_json::Value, TransportError>;
}

/// Projects command definitions and submits them through a transport.
pub struct CommandRegistrar<T> {
    transport: T,
    application_id: Snowflake,
    default_guild: Option<Snowflake>,
}

impl CommandRegistrar<RestTransport> {
    /// Build a REST-backed registrar whose default scope is the configured guild.
    pub fn from_config(config: &CommandsConfig) -> Self {
        Self {
            transport: RestTransport::from_config(config),
            application_id: config.application_id.clone(),
            default_guild: config.guild_id.clone(),
        }
    }
}

impl<T: CommandTransport> CommandRegistrar<T> {
    pub fn new(transport: T, application_id: impl Into<Snowflake>) -> Self {
        Self {
            transport,
            application_id: application_id.into(),
            default_guild: None,
        }
    }

    #[must_use]
    pub fn with_default_guild(mut self, guild_id: impl Into<Snowflake>) -> Self {
        self.default_guild = Some(guild_id.into());
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Replace all commands in a scope with `commands`, in one request.
    ///
    /// `guild_id = None` targets the global route.
    pub async fn bulk_update<'c>(
        &self,
        commands: impl IntoIterator<Item = &'c CommandDefinition>,
        guild_id: Option<&Snowflake>,
    ) -> Result<serde_json::Value, TransportError> {
        let body: Vec<WireCommand> = commands.into_iter().map(project_command).collect();
        let route = Route::for_scope(&self.application_id, guild_id);
        info!(%route, count = body.len(), "bulk registering commands");
        self.transport.put_commands(&route, &body).await
    }

    /// Upsert a single command.
    ///
    /// `guild_id = None` targets the global route, whatever scope the
    /// command itself declares.
    pub async fn update(
        &self,
        command: &CommandDefinition,
        guild_id: Option<&Snowflake>,
    ) -> Result<serde_json::Value, TransportError> {
        let body = project_command(command);
        let route = Route::for_scope(&self.application_id, guild_id);
        info!(%route, command = %command.name, "registering command");
        self.transport.post_command(&route, &body).await
    }

    /// Bulk-register into the default scope.
    pub async fn sync<'c>(
        &self,
        commands: impl IntoIterator<Item = &'c CommandDefinition>,
    ) -> Result<serde_json::Value, TransportError> {
        self.bulk_update(commands, self.default_guild.as_ref()).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use serde_json::json;
    use slashwire_types::LeafOption;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Put(Route, Vec<WireCommand>),
        Post(Route, WireCommand),
    }

    #[derive(Default)]
    struct RecordingTransport {
        calls: Mutex<Vec<Call>>,
        fail: bool,
    }

    impl RecordingTransport {
        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        fn result(&self) -> Result<serde_json::Value, TransportError> {
            if self.fail {
                Err(TransportError::Api {
                    status: 429,
                    message: "rate limited".into(),
                })
            } else {
                Ok(json!({"ok": true}))
            }
        }
    }

    #[async_trait]
    impl CommandTransport for RecordingTransport {
        async fn put_commands(
            &self,
            route: &Route,
            body: &[WireCommand],
        ) -> Result<serde_json::Value, TransportError> {
            self.calls
                .lock()
                .unwrap()
                .push(Call::Put(route.clone(), body.to_vec()));
            self.result()
        }

        async fn post_command(
            &self,
            route: &Route,
            body: &WireCommand,
        ) -> Result<serde_json::Value, TransportError> {
            self.calls
                .lock()
                .unwrap()
                .push(Call::Post(route.clone(), body.clone()));
            self.result()
        }
    }

    fn commands() -> Vec<CommandDefinition> {
        vec![
            CommandDefinition::new("ping", "Check latency"),
            CommandDefinition::new("echo", "Repeat text")
                .with_option(LeafOption::string("text", "What to say").required(true)),
        ]
    }

    #[test]
    fn route_paths() {
        let app = Snowflake::from("10");
        assert_eq!(Route::for_scope(&app, None).path(), "/applications/10/commands");
        let guild = Snowflake::from("20");
        assert_eq!(
            Route::for_scope(&app, Some(&guild)).to_string(),
            "/applications/10/guilds/20/commands"
        );
    }

    #[tokio::test]
    async fn bulk_update_without_scope_is_global() {
        let registrar = CommandRegistrar::new(RecordingTransport::default(), "10");
        registrar.bulk_update(&commands(), None).await.unwrap();

        let calls = registrar.transport().calls();
        assert_eq!(calls.len(), 1);
        match &calls[0] {
            Call::Put(route, body) => {
                assert_eq!(route, &Route::Global { application_id: "10".into() });
                assert_eq!(body.len(), 2);
                assert_eq!(body[0].name, "ping");
                assert!(body[0].options.is_empty());
                assert_eq!(body[1].options[0].name, "text");
            }
            other => panic!("expected Put, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn bulk_update_with_scope_is_guild() {
        let registrar = CommandRegistrar::new(RecordingTransport::default(), "10");
        let guild = Snowflake::from("20");
        registrar.bulk_update(&commands(), Some(&guild)).await.unwrap();

        match &registrar.transport().calls()[0] {
            Call::Put(route, _) => assert_eq!(route.path(), "/applications/10/guilds/20/commands"),
            other => panic!("expected Put, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn update_scope_selection() {
        let registrar = CommandRegistrar::new(RecordingTransport::default(), "10");
        let global = CommandDefinition::new("ping", "Check latency");
        let scoped = CommandDefinition::new("debug", "Debug tools").in_guild("30");
        let explicit = Snowflake::from("20");

        registrar.update(&global, None).await.unwrap();
        registrar.update(&scoped, None).await.unwrap();
        registrar.update(&scoped, Some(&explicit)).await.unwrap();

        let routes: Vec<String> = registrar
            .transport()
            .calls()
            .into_iter()
            .map(|c| match c {
                Call::Post(route, _) => route.path(),
                Call::Put(..) => panic!("update must POST"),
            })
            .collect();
        assert_eq!(
            routes,
            vec![
                "/applications/10/commands",
                "/applications/10/commands",
                "/applications/10/guilds/20/commands",
            ]
        );
    }

    #[tokio::test]
    async fn update_ignores_command_scope_without_explicit_guild() {
        let registrar = CommandRegistrar::new(RecordingTransport::default(), "10");
        let scoped = CommandDefinition::new("debug", "Debug tools").in_guild("30");
        registrar.update(&scoped, None).await.unwrap();

        match &registrar.transport().calls()[0] {
            Call::Post(route, body) => {
                assert_eq!(route, &Route::Global { application_id: "10".into() });
                assert_eq!(body.name, "debug");
            }
            other => panic!("expected Post, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn sync_uses_default_guild() {
        let registrar =
            CommandRegistrar::new(RecordingTransport::default(), "10").with_default_guild("40");
        registrar.sync(&commands()).await.unwrap();
        match &registrar.transport().calls()[0] {
            Call::Put(route, _) => assert_eq!(route.path(), "/applications/10/guilds/40/commands"),
            other => panic!("expected Put, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn transport_errors_propagate_without_retry() {
        let transport = RecordingTransport {
            fail: true,
            ..Default::default()
        };
        let registrar = CommandRegistrar::new(transport, "10");
        let err = registrar.bulk_update(&commands(), None).await.unwrap_err();
        assert!(matches!(err, TransportError::Api { status: 429, .. }));
        assert_eq!(registrar.transport().calls().len(), 1);
    }
}
