//! Bidirectional translation between local command definitions and the
//! platform's slash-command wire format.
//!
//! # Architecture
//!
//! - [`schema`]: option tree -> registration schema (outbound)
//! - [`registrar`]: submits projected commands through a [`CommandTransport`]
//! - [`rest`]: reqwest-backed [`CommandTransport`]
//! - [`resolve`]: invocation options + resolved entities -> [`ArgumentMap`]
//! - [`autocomplete`]: routes an autocomplete request to the focused leaf's provider
//! - [`store`]: validated set of command definitions, looked up by name

pub mod autocomplete;
pub mod error;
pub mod registrar;
pub mod resolve;
pub mod rest;
pub mod schema;
pub mod store;

pub use autocomplete::{handle_autocomplete, MAX_SUGGESTIONS};
pub use error::TransportError;
pub use registrar::{CommandRegistrar, CommandTransport, Route};
pub use resolve::{resolve_arguments, ArgumentMap, ArgumentValue};
pub use rest::RestTransport;
pub use schema::{project_command, project_option};
pub use store::CommandStore;
