//! Application context shared by every trigger.
//!
//! Built once at startup and passed to trigger handlers behind an `Arc`.
//! Holds no mutable state, so concurrent triggers never contend.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::format::Formatter;
use crate::domain::{Platform, StakeEvent};
use crate::port::outbound::notifier::{DispatchError, DispatchResult, NotifierRegistry};

/// Formatter plus the per-platform notifiers.
pub struct AppContext {
    formatter: Arc<Formatter>,
    notifiers: NotifierRegistry,
}

impl AppContext {
    #[must_use]
    pub const fn new(formatter: Arc<Formatter>, notifiers: NotifierRegistry) -> Self {
        Self {
            formatter,
            notifiers,
        }
    }

    #[must_use]
    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    #[must_use]
    pub const fn notifiers(&self) -> &NotifierRegistry {
        &self.notifiers
    }

    /// Send an alert to one platform.
    pub async fn send(&self, platform: Platform, event: &StakeEvent) -> DispatchResult {
        let result = match self.notifiers.get(platform) {
            Some(notifier) => notifier.dispatch(event).await,
            None => Err(DispatchError::NotConfigured { platform }),
        };
        log_outcome(platform, &result);
        result
    }

    /// Send an alert to every platform concurrently.
    pub async fn broadcast(&self, event: &StakeEvent) -> Vec<(Platform, DispatchResult)> {
        let results = self.notifiers.dispatch_all(event).await;
        for (platform, result) in &results {
            log_outcome(*platform, result);
        }
        results
    }

    /// Send the fixed sample alert, as the chat test commands do.
    pub async fn send_sample(&self, platform: Platform) -> DispatchResult {
        self.send(platform, &StakeEvent::sample()).await
    }
}

/// Log a dispatch outcome; failures are reported, never raised.
pub fn log_outcome(platform: Platform, result: &DispatchResult) {
    match result {
        Ok(delivery) => info!(
            %platform,
            message_id = delivery.message_id.as_deref().unwrap_or("-"),
            "Stake alert delivered"
        ),
        Err(e) if e.attempted_send() => warn!(%platform, error = %e, "Stake alert failed"),
        Err(e) => warn!(%platform, error = %e, "Stake alert skipped"),
    }
}
