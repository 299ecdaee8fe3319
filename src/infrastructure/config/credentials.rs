//! Secrets and destinations read from the environment.
//!
//! Every variable is required. A missing or blank value is a startup error
//! naming the variable.

use std::fmt;

use teloxide::types::Recipient;
use url::Url;

use crate::adapter::outbound::notifier::telegram::parse_recipient;
use crate::error::{ConfigError, Result};

/// Environment variables read by [`Credentials::from_env`].
pub const ENV_VARS: [&str; 7] = [
    "TELEGRAM_BOT_TOKEN",
    "TELEGRAM_GROUP_ID",
    "DISCORD_BOT_TOKEN",
    "DISCORD_CHANNEL_ID",
    "DISCORD_APP_ID",
    "DISCORD_SERVER_ID",
    "ZKSYNC_RPC",
];

/// Bot tokens, destinations and the RPC endpoint.
#[derive(Clone)]
pub struct Credentials {
    pub telegram_bot_token: String,
    pub telegram_chat: Recipient,
    pub discord_bot_token: String,
    pub discord_channel_id: String,
    pub discord_app_id: String,
    pub discord_server_id: String,
    /// Read and validated, but no code path uses it yet.
    pub rpc_url: Url,
}

impl Credentials {
    /// Read credentials from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingField` for the first missing variable and
    /// `ConfigError::InvalidValue` for a malformed chat id or RPC URL.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read credentials through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`Credentials::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |field: &'static str| -> Result<String> {
            lookup(field)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingField { field }.into())
        };

        let telegram_bot_token = require("TELEGRAM_BOT_TOKEN")?;
        let telegram_chat = parse_recipient(&require("TELEGRAM_GROUP_ID")?)?;
        let discord_bot_token = require("DISCORD_BOT_TOKEN")?;
        let discord_channel_id = require_snowflake("DISCORD_CHANNEL_ID", require("DISCORD_CHANNEL_ID")?)?;
        let discord_app_id = require_snowflake("DISCORD_APP_ID", require("DISCORD_APP_ID")?)?;
        let discord_server_id = require_snowflake("DISCORD_SERVER_ID", require("DISCORD_SERVER_ID")?)?;
        let rpc_url = Url::parse(&require("ZKSYNC_RPC")?).map_err(|e| ConfigError::InvalidValue {
            field: "ZKSYNC_RPC",
            reason: e.to_string(),
        })?;

        Ok(Self {
            telegram_bot_token,
            telegram_chat,
            discord_bot_token,
            discord_channel_id,
            discord_app_id,
            discord_server_id,
            rpc_url,
        })
    }
}

/// Discord ids are numeric snowflakes.
fn require_snowflake(field: &'static str, value: String) -> Result<String> {
    if value.parse::<u64>().is_ok() {
        Ok(value)
    } else {
        Err(ConfigError::InvalidValue {
            field,
            reason: format!("`{value}` is not a Discord snowflake id"),
        }
        .into())
    }
}

/// Mask a secret for display, keeping a short prefix and suffix.
#[must_use]
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() >= 15 {
        let head: String = chars[..10].iter().collect();
        let tail: String = chars[chars.len() - 5..].iter().collect();
        format!("{head}...{tail}")
    } else {
        let head: String = chars.iter().take(chars.len().min(4)).collect();
        format!("{head}...")
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("telegram_bot_token", &mask_token(&self.telegram_bot_token))
            .field("telegram_chat", &self.telegram_chat)
            .field("discord_bot_token", &mask_token(&self.discord_bot_token))
            .field("discord_channel_id", &self.discord_channel_id)
            .field("discord_app_id", &self.discord_app_id)
            .field("discord_server_id", &self.discord_server_id)
            .field("rpc_url", &self.rpc_url.as_str())
            .finish()
    }
}
