//! Telegram transport configuration.

use serde::Deserialize;

/// Non-secret Telegram settings.
///
/// The bot token and destination chat come from the environment; see
/// [`Credentials`](super::credentials::Credentials).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TelegramAppConfig {
    /// Bot API base URL override, e.g. a local Bot API server.
    pub api_url: Option<String>,
}
