//! Relay from on-chain stake observations to chat alerts.
//!
//! An event source pushes [`StakeLog`]s into a channel; the relay pairs each
//! one with the current token price and broadcasts the resulting alert. No
//! on-chain producer ships with the crate yet, so the relay is only driven by
//! whatever the caller feeds into the channel.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::application::context::AppContext;
use crate::domain::{DomainError, Platform, StakeEvent, StakeLog};
use crate::port::outbound::notifier::DispatchResult;
use crate::port::outbound::price::PriceFeed;

/// What happened to one relayed log.
#[derive(Debug)]
pub enum RelayOutcome {
    /// Alert built and handed to every notifier.
    Dispatched(Vec<(Platform, DispatchResult)>),
    /// Price lookup failed; the log was dropped.
    PriceUnavailable(String),
    /// The log and price did not form a valid event; the log was dropped.
    Rejected(DomainError),
}

impl RelayOutcome {
    /// Number of notifiers that delivered the alert.
    #[must_use]
    pub fn delivered(&self) -> usize {
        match self {
            Self::Dispatched(results) => results.iter().filter(|(_, r)| r.is_ok()).count(),
            _ => 0,
        }
    }
}

/// Turns stake logs into broadcast alerts.
pub struct StakeRelay {
    ctx: Arc<AppContext>,
    price_feed: Arc<dyn PriceFeed>,
}

impl StakeRelay {
    #[must_use]
    pub fn new(ctx: Arc<AppContext>, price_feed: Arc<dyn PriceFeed>) -> Self {
        Self { ctx, price_feed }
    }

    /// Price, build and broadcast one log.
    pub async fn relay(&self, log: StakeLog) -> RelayOutcome {
        info!(staker = %log.staker, tx_hash = %log.tx_hash, "New stake detected");

        let price = match self.price_feed.usd_price().await {
            Ok(price) => price,
            Err(e) => {
                warn!(error = %e, tx_hash = %log.tx_hash, "Price lookup failed, dropping stake");
                return RelayOutcome::PriceUnavailable(e.to_string());
            }
        };

        match StakeEvent::from_log(log, price) {
            Ok(event) => RelayOutcome::Dispatched(self.ctx.broadcast(&event).await),
            Err(e) => {
                warn!(error = %e, "Invalid stake event, dropping");
                RelayOutcome::Rejected(e)
            }
        }
    }

    /// Relay logs until the channel closes. Returns how many were received.
    pub async fn run(&self, mut logs: mpsc::Receiver<StakeLog>) -> usize {
        let mut received = 0;
        while let Some(log) = logs.recv().await {
            received += 1;
            let outcome = self.relay(log).await;
            debug!(delivered = outcome.delivered(), "Stake relayed");
        }
        info!(received, "Stake relay stopped");
        received
    }
}
