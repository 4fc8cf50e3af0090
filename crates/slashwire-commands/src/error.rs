//! Errors from the registration transport.

use thiserror::Error;

/// Errors raised while submitting commands to the platform.
///
/// The registrar passes these through unchanged; it never retries.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}
