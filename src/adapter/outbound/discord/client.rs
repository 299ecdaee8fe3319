//! Minimal Discord REST client.
//!
//! Covers only the calls the bot makes: channel lookup, message creation,
//! guild command registration and interaction callbacks.

use reqwest::{Client, Response};
use tracing::debug;

use crate::application::format::Embed;
use crate::error::{Error, Result};

use super::types::{ApplicationCommand, Channel, CreateMessage, InteractionResponse, MessageRef};

/// Default REST base URL (API v10).
pub const DEFAULT_API_URL: &str = "https://discord.com/api/v10";

/// Bot-authenticated Discord REST client.
#[derive(Debug, Clone)]
pub struct DiscordClient {
    http: Client,
    api_url: String,
    bot_token: String,
}

impl DiscordClient {
    pub fn new(api_url: impl Into<String>, bot_token: impl Into<String>) -> Self {
        let mut api_url = api_url.into();
        while api_url.ends_with('/') {
            api_url.pop();
        }
        Self {
            http: Client::new(),
            api_url,
            bot_token: bot_token.into(),
        }
    }

    fn auth(&self) -> String {
        format!("Bot {}", self.bot_token)
    }

    /// `GET /channels/{id}`
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status
    /// (unknown channel, missing access).
    pub async fn fetch_channel(&self, channel_id: &str) -> Result<Channel> {
        let url = format!("{}/channels/{channel_id}", self.api_url);
        debug!(channel_id, "Fetching Discord channel");

        let response = self
            .http
            .get(&url)
            .header("Authorization", self.auth())
            .send()
            .await?;
        Ok(check_status(response).await?.json().await?)
    }

    /// `POST /channels/{id}/messages` with the given embeds.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    pub async fn create_message(&self, channel_id: &str, embeds: &[Embed]) -> Result<MessageRef> {
        let url = format!("{}/channels/{channel_id}/messages", self.api_url);

        let response = self
            .http
            .post(&url)
            .header("Authorization", self.auth())
            .json(&CreateMessage { embeds })
            .send()
            .await?;
        Ok(check_status(response).await?.json().await?)
    }

    /// `PUT /applications/{app}/guilds/{guild}/commands`, replacing the
    /// guild's command set.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    pub async fn register_guild_commands(
        &self,
        application_id: &str,
        guild_id: &str,
        commands: &[ApplicationCommand],
    ) -> Result<()> {
        let url = format!(
            "{}/applications/{application_id}/guilds/{guild_id}/commands",
            self.api_url
        );

        let response = self
            .http
            .put(&url)
            .header("Authorization", self.auth())
            .json(commands)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    /// `POST /interactions/{id}/{token}/callback`. Uses the interaction
    /// token, not the bot token.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    pub async fn respond_to_interaction(
        &self,
        interaction_id: &str,
        interaction_token: &str,
        response: &InteractionResponse,
    ) -> Result<()> {
        let url = format!(
            "{}/interactions/{interaction_id}/{interaction_token}/callback",
            self.api_url
        );

        let response = self.http.post(&url).json(response).send().await?;
        check_status(response).await?;
        Ok(())
    }
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(Error::Connection(format!("discord returned {status}: {body}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = DiscordClient::new("http://127.0.0.1:9/api/", "token");
        assert_eq!(client.api_url, "http://127.0.0.1:9/api");
        assert_eq!(client.auth(), "Bot token");
    }
}
