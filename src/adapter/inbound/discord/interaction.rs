//! Discord slash command handling.

use std::sync::Arc;

use serde::Deserialize;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::adapter::outbound::discord::types::{ApplicationCommand, InteractionResponse};
use crate::adapter::outbound::discord::DiscordClient;
use crate::application::context::AppContext;
use crate::domain::Platform;
use crate::error::Result;

/// Name of the test slash command.
pub const TEST_STAKE_COMMAND: &str = "teststake";

/// Ephemeral acknowledgement sent after the test command.
pub const TEST_STAKE_REPLY: &str = "Test message has been sent!";

/// Interaction type for slash commands.
const APPLICATION_COMMAND: u8 = 2;

/// Subset of the Discord interaction object.
#[derive(Debug, Clone, Deserialize)]
pub struct Interaction {
    pub id: String,
    pub token: String,
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(default)]
    pub data: Option<InteractionData>,
    #[serde(default)]
    pub guild_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InteractionData {
    pub name: String,
}

impl Interaction {
    /// Slash command name, if this is a slash command.
    #[must_use]
    pub fn command_name(&self) -> Option<&str> {
        if self.kind != APPLICATION_COMMAND {
            return None;
        }
        self.data.as_ref().map(|d| d.name.as_str())
    }
}

/// Commands registered with the guild at startup.
#[must_use]
pub fn application_commands() -> Vec<ApplicationCommand> {
    vec![ApplicationCommand::chat_input(
        TEST_STAKE_COMMAND,
        "Test stake message",
    )]
}

/// Register the slash commands. Failure is logged and not fatal.
pub async fn register_commands(client: &DiscordClient, application_id: &str, guild_id: &str) {
    info!("Started refreshing application (/) commands");
    match client
        .register_guild_commands(application_id, guild_id, &application_commands())
        .await
    {
        Ok(()) => info!("Successfully reloaded application (/) commands"),
        Err(e) => error!(error = %e, "Error refreshing commands"),
    }
}

/// Answers slash command interactions.
#[derive(Clone)]
pub struct InteractionHandler {
    ctx: Arc<AppContext>,
    client: DiscordClient,
}

impl InteractionHandler {
    #[must_use]
    pub const fn new(ctx: Arc<AppContext>, client: DiscordClient) -> Self {
        Self { ctx, client }
    }

    /// Handle one interaction. Returns `false` for interactions this bot does
    /// not answer.
    ///
    /// The test command always acknowledges, whatever happened to the alert.
    ///
    /// # Errors
    ///
    /// Returns an error only if the acknowledgement itself fails.
    pub async fn handle(&self, interaction: &Interaction) -> Result<bool> {
        match interaction.command_name() {
            Some(TEST_STAKE_COMMAND) => {
                info!(interaction_id = %interaction.id, "Discord test command received");
                let _ = self.ctx.send_sample(Platform::Discord).await;

                self.client
                    .respond_to_interaction(
                        &interaction.id,
                        &interaction.token,
                        &InteractionResponse::ephemeral(TEST_STAKE_REPLY),
                    )
                    .await?;
                Ok(true)
            }
            other => {
                debug!(kind = interaction.kind, command = ?other, "Ignoring interaction");
                Ok(false)
            }
        }
    }

    /// Handle interactions until the channel closes, one task each.
    pub async fn run(self, mut interactions: mpsc::UnboundedReceiver<Interaction>) {
        while let Some(interaction) = interactions.recv().await {
            let handler = self.clone();
            tokio::spawn(async move {
                if let Err(e) = handler.handle(&interaction).await {
                    error!(error = %e, "Failed to acknowledge Discord interaction");
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interaction(kind: u8, name: Option<&str>) -> Interaction {
        Interaction {
            id: "1".into(),
            token: "tok".into(),
            kind,
            data: name.map(|n| InteractionData { name: n.into() }),
            guild_id: None,
        }
    }

    #[test]
    fn test_command_name() {
        assert_eq!(
            interaction(2, Some("teststake")).command_name(),
            Some("teststake")
        );
        // autocomplete / components carry no slash command
        assert_eq!(interaction(3, Some("teststake")).command_name(), None);
        assert_eq!(interaction(2, None).command_name(), None);
    }

    #[test]
    fn test_application_commands() {
        let commands = application_commands();
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].name, "teststake");
        assert_eq!(commands[0].description, "Test stake message");
        assert_eq!(commands[0].kind, 1);
    }
}
