//! Raw HTTP calls to the command registration API.
//!
//! Wraps reqwest for the bulk-overwrite (`PUT`) and upsert (`POST`)
//! endpoints of the application commands routes.

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder};
use slashwire_types::{CommandsConfig, WireCommand, DEFAULT_API_BASE_URL};
use tracing::{debug, warn};

use crate::error::TransportError;
use crate::registrar::{CommandTransport, Route};

/// reqwest-backed [`CommandTransport`].
pub struct RestTransport {
    client: Client,
    base_url: String,
    bot_token: String,
}

impl RestTransport {
    /// Create a client for the public API.
    pub fn new(bot_token: &str) -> Self {
        Self::with_base_url(bot_token, DEFAULT_API_BASE_URL)
    }

    /// Create a client with a custom base URL (for testing).
    pub fn with_base_url(bot_token: &str, base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            bot_token: bot_token.to_string(),
        }
    }

    pub fn from_config(config: &CommandsConfig) -> Self {
        Self::with_base_url(&config.bot_token, &config.api_base_url)
    }

    fn url(&self, route: &Route) -> String {
        format!("{}{}", self.base_url, route.path())
    }

    async fn execute(
        &self,
        route: &Route,
        request: RequestBuilder,
    ) -> Result<serde_json::Value, TransportError> {
        let resp = request
            .header(AUTHORIZATION, format!("Bot {}", self.bot_token))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            warn!(%route, status = status.as_u16(), "command registration failed: {message}");
            return Err(TransportError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = resp.bytes().await?;
        if bytes.is_empty() {
            return Ok(serde_json::Value::Null);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl CommandTransport for RestTransport {
    async fn put_commands(
        &self,
        route: &Route,
        body: &[WireCommand],
    ) -> Result<serde_json::Value, TransportError> {
        debug!(%route, count = body.len(), "PUT commands");
        let request = self.client.put(self.url(route)).json(body);
        self.execute(route, request).await
    }

    async fn post_command(
        &self,
        route: &Route,
        body: &WireCommand,
    ) -> Result<serde_json::Value, TransportError> {
        debug!(%route, command = %body.name, "POST command");
        let request = self.client.post(self.url(route)).json(body);
        self.execute(route, request).await
    }
}
