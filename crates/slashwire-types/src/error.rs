//! Error types shared across the slashwire crates.

/// Errors raised while building or loading command definitions.
///
/// Structural mismatches during resolution and autocomplete are not errors;
/// those paths degrade to empty results instead.
#[derive(Debug, thiserror::Error)]
pub enum SlashwireError {
    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("invalid command: {0}")]
    InvalidCommand(String),
}
