//! Discord stake alert delivery.
//!
//! Resolves the configured channel on every dispatch, then posts the rendered
//! embed to it. Unresolvable or non-text channels are skipped without sending.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info};

use crate::adapter::outbound::discord::DiscordClient;
use crate::application::format::Formatter;
use crate::domain::{Platform, StakeEvent};
use crate::port::outbound::notifier::{Delivery, DispatchError, DispatchResult, StakeNotifier};

/// Discord notifier that posts stake embeds to one channel.
pub struct DiscordNotifier {
    client: DiscordClient,
    channel_id: String,
    formatter: Arc<Formatter>,
}

impl DiscordNotifier {
    #[must_use]
    pub fn new(client: DiscordClient, channel_id: impl Into<String>, formatter: Arc<Formatter>) -> Self {
        Self {
            client,
            channel_id: channel_id.into(),
            formatter,
        }
    }
}

#[async_trait]
impl StakeNotifier for DiscordNotifier {
    fn platform(&self) -> Platform {
        Platform::Discord
    }

    async fn dispatch(&self, event: &StakeEvent) -> DispatchResult {
        let channel = self
            .client
            .fetch_channel(&self.channel_id)
            .await
            .map_err(|e| {
                debug!(channel_id = %self.channel_id, error = %e, "Discord channel unavailable");
                DispatchError::ChannelUnavailable {
                    channel_id: self.channel_id.clone(),
                    reason: e.to_string(),
                }
            })?;

        if !channel.is_text_based() {
            debug!(channel_id = %self.channel_id, kind = channel.kind, "Discord channel is not text-based");
            return Err(DispatchError::NotTextChannel {
                channel_id: self.channel_id.clone(),
                kind: channel.kind,
            });
        }

        let embed = self.formatter.discord(event);
        match self
            .client
            .create_message(&self.channel_id, std::slice::from_ref(&embed))
            .await
        {
            Ok(message) => {
                info!(message_id = %message.id, staker = %event.staker(), "Discord message sent");
                Ok(Delivery {
                    platform: Platform::Discord,
                    message_id: Some(message.id),
                })
            }
            Err(e) => {
                error!(error = %e, "Failed to send Discord message");
                Err(DispatchError::Send {
                    platform: Platform::Discord,
                    reason: e.to_string(),
                })
            }
        }
    }
}
