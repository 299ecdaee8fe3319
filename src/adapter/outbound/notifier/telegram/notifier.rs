//! Telegram stake alert delivery.
//!
//! Provides the [`TelegramNotifier`], which posts the branded image with the
//! rendered HTML caption to a fixed group or channel.

use std::sync::Arc;

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{InputFile, ParseMode, Recipient};
use tracing::{error, info};
use url::Url;

use crate::application::format::Formatter;
use crate::domain::{Platform, StakeEvent};
use crate::error::{ConfigError, Result};
use crate::port::outbound::notifier::{Delivery, DispatchError, DispatchResult, StakeNotifier};

/// Configuration for the Telegram notifier.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// Bot API token obtained from BotFather.
    pub bot_token: String,
    /// Destination group or channel.
    pub chat: Recipient,
    /// Bot API base URL override (defaults to `https://api.telegram.org`).
    pub api_url: Option<Url>,
}

impl TelegramConfig {
    /// Build the teloxide bot for this configuration.
    #[must_use]
    pub fn bot(&self) -> Bot {
        let bot = Bot::new(&self.bot_token);
        match &self.api_url {
            Some(url) => bot.set_api_url(url.clone()),
            None => bot,
        }
    }
}

/// Parse a chat destination: a numeric chat id (`-100…`) or an `@channel`.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` for anything else.
pub fn parse_recipient(raw: &str) -> std::result::Result<Recipient, ConfigError> {
    let raw = raw.trim();
    if let Ok(id) = raw.parse::<i64>() {
        return Ok(Recipient::Id(ChatId(id)));
    }
    if raw.len() > 1 && raw.starts_with('@') {
        return Ok(Recipient::ChannelUsername(raw.to_string()));
    }
    Err(ConfigError::InvalidValue {
        field: "TELEGRAM_GROUP_ID",
        reason: format!("`{raw}` is neither a numeric chat id nor an @username"),
    })
}

/// Telegram notifier that posts stake alerts to one chat.
pub struct TelegramNotifier {
    bot: Bot,
    chat: Recipient,
    formatter: Arc<Formatter>,
}

impl TelegramNotifier {
    /// Create a notifier with its own bot client.
    #[must_use]
    pub fn new(config: &TelegramConfig, formatter: Arc<Formatter>) -> Self {
        Self::with_bot(config.bot(), config.chat.clone(), formatter)
    }

    /// Create a notifier sharing an existing bot client.
    #[must_use]
    pub const fn with_bot(bot: Bot, chat: Recipient, formatter: Arc<Formatter>) -> Self {
        Self {
            bot,
            chat,
            formatter,
        }
    }

    fn send_error(reason: impl ToString) -> DispatchError {
        DispatchError::Send {
            platform: Platform::Telegram,
            reason: reason.to_string(),
        }
    }
}

#[async_trait]
impl StakeNotifier for TelegramNotifier {
    fn platform(&self) -> Platform {
        Platform::Telegram
    }

    async fn dispatch(&self, event: &StakeEvent) -> DispatchResult {
        let message = self.formatter.telegram(event);

        let photo = Url::parse(&message.photo_url).map_err(|e| {
            error!(error = %e, url = %message.photo_url, "Invalid Telegram photo URL");
            Self::send_error(e)
        })?;

        match self
            .bot
            .send_photo(self.chat.clone(), InputFile::url(photo))
            .caption(message.caption)
            .parse_mode(ParseMode::Html)
            .await
        {
            Ok(sent) => {
                info!(
                    message_id = sent.id.0,
                    staker = %event.staker(),
                    "Telegram message sent"
                );
                Ok(Delivery {
                    platform: Platform::Telegram,
                    message_id: Some(sent.id.0.to_string()),
                })
            }
            Err(e) => {
                error!(error = %e, "Failed to send Telegram message");
                Err(Self::send_error(e))
            }
        }
    }
}

/// Check that the bot token is accepted by Telegram.
///
/// # Errors
///
/// Returns the Telegram request error when `getMe` fails.
pub async fn verify_bot(bot: &Bot) -> Result<String> {
    let me = bot.get_me().await?;
    Ok(me.username().to_string())
}
