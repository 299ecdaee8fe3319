//! Configuration and connection validation commands.

use std::path::Path;

use crate::adapter::outbound::notifier::telegram::verify_bot;
use crate::cli::output;
use crate::error::Result;
use crate::infrastructure::bootstrap::{discord_client, telegram_config};
use crate::infrastructure::config::credentials::mask_token;
use crate::infrastructure::config::{Config, Credentials};

/// Validate the config file and environment without starting the bots.
///
/// # Errors
///
/// Returns the first configuration error found.
pub fn execute_config<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let path = config_path.as_ref();
    output::section("Configuration");
    if path.exists() {
        output::field("File", path.display());
    } else {
        output::field("File", format!("{} (not found, using defaults)", path.display()));
    }

    let config = Config::load_or_default(path)?;
    output::ok("Configuration file is valid");
    output::field("Log level", &config.logging.level);
    output::field("Log format", &config.logging.format);
    output::field("Explorer", &config.explorer.base_url);
    output::field("Token", &config.branding.token_symbol);
    output::field("Price feed", format!("{} ({})", config.price.api_url, config.price.coin_id));
    output::field("Discord API", &config.discord.api_url);
    output::field(
        "Telegram API",
        config
            .telegram
            .api_url
            .as_deref()
            .unwrap_or("https://api.telegram.org"),
    );

    output::section("Environment");
    let credentials = Credentials::from_env()?;
    output::field("Telegram token", mask_token(&credentials.telegram_bot_token));
    output::field("Telegram chat", format!("{:?}", credentials.telegram_chat));
    output::field("Discord token", mask_token(&credentials.discord_bot_token));
    output::field("Discord channel", &credentials.discord_channel_id);
    output::field("Discord app", &credentials.discord_app_id);
    output::field("Discord server", &credentials.discord_server_id);
    output::field("RPC", credentials.rpc_url.as_str());
    output::ok("All required environment variables are set");

    Ok(())
}

/// Check both bot tokens and the Discord channel against the live APIs.
///
/// Nothing is posted.
///
/// # Errors
///
/// Returns configuration errors. API failures are reported and counted.
pub async fn execute_connection<P: AsRef<Path>>(config_path: P) -> Result<bool> {
    let config = Config::load_or_default(config_path)?;
    let credentials = Credentials::from_env()?;
    let mut healthy = true;

    output::section("Telegram");
    let bot = telegram_config(&config, &credentials).bot();
    match verify_bot(&bot).await {
        Ok(username) => output::ok(&format!("Bot authenticated as @{username}")),
        Err(e) => {
            output::error(&format!("getMe failed: {e}"));
            healthy = false;
        }
    }

    output::section("Discord");
    let client = discord_client(&config, &credentials);
    match client.fetch_channel(&credentials.discord_channel_id).await {
        Ok(channel) if channel.is_text_based() => output::ok(&format!(
            "Channel {} is text-based",
            channel.name.as_deref().unwrap_or(&channel.id)
        )),
        Ok(channel) => {
            output::warn(&format!(
                "Channel {} has type {}, alerts will be skipped",
                channel.id, channel.kind
            ));
            healthy = false;
        }
        Err(e) => {
            output::error(&format!("Channel lookup failed: {e}"));
            healthy = false;
        }
    }

    Ok(healthy)
}
