//! Inbound Telegram command handling.
//!
//! Long-polls the Bot API and answers `/start` and `/teststake` from any
//! chat the bot is in.

use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::BotCommand;
use tracing::{debug, error, info, warn};

use crate::application::context::AppContext;
use crate::domain::Platform;

use super::command::{bot_commands, parse_command, TelegramCommand, WELCOME};

/// Handle one parsed command and return the reply to send, if any.
///
/// `/teststake` posts the sample alert to the configured group and sends no
/// reply of its own; dispatch failures are logged by the context.
pub async fn handle_command(command: TelegramCommand, ctx: &AppContext) -> Option<String> {
    match command {
        TelegramCommand::Start => Some(WELCOME.to_string()),
        TelegramCommand::TestStake => {
            let _ = ctx.send_sample(Platform::Telegram).await;
            None
        }
    }
}

/// Run the command listener until the process stops.
pub async fn run(bot: Bot, ctx: Arc<AppContext>) {
    // Register commands with Telegram so they appear in the "/" menu
    if let Err(e) = register_bot_commands(&bot).await {
        warn!(error = %e, "Failed to register bot commands with Telegram");
    }

    info!("Telegram command listener started");

    teloxide::repl(bot, move |bot: Bot, msg: Message| {
        let ctx = ctx.clone();
        async move {
            let Some(text) = msg.text() else {
                return respond(());
            };

            let command = match parse_command(text) {
                Ok(command) => command,
                Err(e) => {
                    debug!(error = %e, chat_id = msg.chat.id.0, "Ignoring Telegram message");
                    return respond(());
                }
            };

            info!(?command, chat_id = msg.chat.id.0, "Telegram command received");
            if let Some(reply) = handle_command(command, &ctx).await {
                if let Err(e) = bot.send_message(msg.chat.id, reply).await {
                    error!(error = %e, "Failed to send Telegram command response");
                }
            }

            respond(())
        }
    })
    .await;
}

/// Register bot commands with Telegram for the "/" menu.
async fn register_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    let commands: Vec<BotCommand> = bot_commands()
        .into_iter()
        .map(|(cmd, desc)| BotCommand::new(cmd, desc))
        .collect();

    bot.set_my_commands(commands).await?;
    info!("Registered bot commands with Telegram");
    Ok(())
}
