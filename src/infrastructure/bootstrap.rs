//! Composition root for runtime wiring.
//!
//! Builds the formatter, both notifiers and the shared [`AppContext`], then
//! starts the long-lived listeners.

use std::sync::Arc;
use std::time::Duration;

use teloxide::Bot;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::adapter::inbound::discord::interaction::register_commands;
use crate::adapter::inbound::discord::{GatewayClient, InteractionHandler};
use crate::adapter::inbound::telegram::listener;
use crate::adapter::outbound::discord::DiscordClient;
use crate::adapter::outbound::notifier::telegram::verify_bot;
use crate::adapter::outbound::notifier::{DiscordNotifier, TelegramConfig, TelegramNotifier};
use crate::adapter::outbound::price::CoinGeckoPriceFeed;
use crate::application::context::AppContext;
use crate::application::format::Formatter;
use crate::application::relay::StakeRelay;
use crate::domain::StakeLog;
use crate::error::Result;
use crate::infrastructure::config::{Config, Credentials};
use crate::port::outbound::notifier::NotifierRegistry;

/// Capacity of the stake log channel feeding the relay.
const STAKE_CHANNEL_CAPACITY: usize = 256;

/// How long the relay may keep draining queued stakes at shutdown.
const RELAY_DRAIN_TIMEOUT: Duration = Duration::from_secs(5);

/// Telegram settings for the configured token and API override.
#[must_use]
pub fn telegram_config(config: &Config, credentials: &Credentials) -> TelegramConfig {
    TelegramConfig {
        bot_token: credentials.telegram_bot_token.clone(),
        chat: credentials.telegram_chat.clone(),
        api_url: config.telegram_api_url(),
    }
}

/// Discord REST client for the configured token and API base.
#[must_use]
pub fn discord_client(config: &Config, credentials: &Credentials) -> DiscordClient {
    DiscordClient::new(
        config.discord.api_url.clone(),
        credentials.discord_bot_token.clone(),
    )
}

/// Build the notifier registry with one notifier per platform.
#[must_use]
pub fn build_notifier_registry(
    bot: Bot,
    discord: DiscordClient,
    credentials: &Credentials,
    formatter: &Arc<Formatter>,
) -> NotifierRegistry {
    let mut registry = NotifierRegistry::new();
    registry.register(Arc::new(TelegramNotifier::with_bot(
        bot,
        credentials.telegram_chat.clone(),
        Arc::clone(formatter),
    )));
    registry.register(Arc::new(DiscordNotifier::new(
        discord,
        credentials.discord_channel_id.clone(),
        Arc::clone(formatter),
    )));
    registry
}

/// Fully wired application, ready to run.
pub struct App {
    config: Config,
    credentials: Credentials,
    bot: Bot,
    discord: DiscordClient,
    ctx: Arc<AppContext>,
    relay: StakeRelay,
    stake_tx: mpsc::Sender<StakeLog>,
    stake_rx: mpsc::Receiver<StakeLog>,
}

impl App {
    /// Wire every component. Nothing is contacted yet.
    #[must_use]
    pub fn build(config: Config, credentials: Credentials) -> Self {
        let formatter = Arc::new(config.formatter());
        let bot = telegram_config(&config, &credentials).bot();
        let discord = discord_client(&config, &credentials);

        let notifiers =
            build_notifier_registry(bot.clone(), discord.clone(), &credentials, &formatter);
        let ctx = Arc::new(AppContext::new(formatter, notifiers));

        let price_feed = Arc::new(CoinGeckoPriceFeed::new(
            config.price.api_url.clone(),
            config.price.coin_id.clone(),
        ));
        let relay = StakeRelay::new(Arc::clone(&ctx), price_feed);
        let (stake_tx, stake_rx) = mpsc::channel(STAKE_CHANNEL_CAPACITY);

        Self {
            config,
            credentials,
            bot,
            discord,
            ctx,
            relay,
            stake_tx,
            stake_rx,
        }
    }

    /// Shared context used by every trigger.
    #[must_use]
    pub fn context(&self) -> Arc<AppContext> {
        Arc::clone(&self.ctx)
    }

    /// Sender for stake logs observed by an event source.
    #[must_use]
    pub fn stake_sender(&self) -> mpsc::Sender<StakeLog> {
        self.stake_tx.clone()
    }

    /// Build and run until the listeners stop.
    ///
    /// # Errors
    ///
    /// See [`App::serve`].
    pub async fn run(config: Config, credentials: Credentials) -> Result<()> {
        Self::build(config, credentials).serve().await
    }

    /// Start the Telegram listener, the Discord gateway and the relay.
    ///
    /// Returns once either listener stops. Transport failures are logged,
    /// not returned.
    ///
    /// # Errors
    ///
    /// None at present.
    pub async fn serve(self) -> Result<()> {
        let Self {
            config,
            credentials,
            bot,
            discord,
            ctx,
            relay,
            stake_tx,
            stake_rx,
        } = self;

        match verify_bot(&bot).await {
            Ok(username) => info!(username = %username, "Telegram bot authenticated"),
            Err(e) => warn!(error = %e, "Telegram getMe failed"),
        }

        register_commands(
            &discord,
            &credentials.discord_app_id,
            &credentials.discord_server_id,
        )
        .await;

        let (interaction_tx, interaction_rx) = mpsc::unbounded_channel();
        let gateway = GatewayClient::new(
            config.discord.gateway_url.clone(),
            credentials.discord_bot_token.clone(),
            config.discord.reconnection.backoff(),
        );
        let handler = InteractionHandler::new(Arc::clone(&ctx), discord);

        let gateway_task = tokio::spawn(gateway.run(interaction_tx));
        let handler_task = tokio::spawn(handler.run(interaction_rx));
        let telegram_task = tokio::spawn(listener::run(bot, Arc::clone(&ctx)));
        let relay_task = tokio::spawn(async move { relay.run(stake_rx).await });

        info!(
            notifiers = ctx.notifiers().len(),
            rpc_url = %credentials.rpc_url,
            "Bots online"
        );

        tokio::select! {
            _ = telegram_task => warn!("Telegram listener stopped"),
            _ = gateway_task => warn!("Discord gateway stopped"),
        }

        // No producer remains once the listeners are gone.
        drop(stake_tx);
        handler_task.abort();
        stop_relay(relay_task, RELAY_DRAIN_TIMEOUT).await;
        Ok(())
    }
}

/// Let the relay drain for up to `grace`, then abort it.
///
/// Returns `true` if the relay finished on its own. Outstanding
/// [`App::stake_sender`] clones keep the channel open, which is what the
/// timeout is for.
async fn stop_relay(task: JoinHandle<usize>, grace: Duration) -> bool {
    let abort = task.abort_handle();
    match tokio::time::timeout(grace, task).await {
        Ok(_) => true,
        Err(_) => {
            abort.abort();
            warn!(grace_ms = grace.as_millis() as u64, "Stake relay did not drain, aborting");
            false
        }
    }
}
