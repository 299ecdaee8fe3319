//! Notifier port for stake alerts.
//!
//! Each chat platform provides one [`StakeNotifier`]. Dispatch returns an
//! explicit outcome instead of swallowing failures, so trigger handlers can
//! decide to log and carry on while tests can observe what happened.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::future::join_all;
use thiserror::Error;

use crate::domain::{Platform, StakeEvent};

/// A successfully delivered alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    /// Platform the alert went to.
    pub platform: Platform,
    /// Identifier of the sent message, when the platform returns one.
    pub message_id: Option<String>,
}

/// Why an alert was not delivered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The destination channel could not be resolved. Nothing was sent.
    #[error("channel {channel_id} unavailable: {reason}")]
    ChannelUnavailable { channel_id: String, reason: String },

    /// The destination channel cannot hold messages. Nothing was sent.
    #[error("channel {channel_id} is not text-based (type {kind})")]
    NotTextChannel { channel_id: String, kind: u8 },

    /// No notifier is registered for the platform.
    #[error("no {platform} notifier configured")]
    NotConfigured { platform: Platform },

    /// The send call itself failed.
    #[error("{platform} send failed: {reason}")]
    Send { platform: Platform, reason: String },
}

impl DispatchError {
    /// True when the failure happened after a send was attempted.
    #[must_use]
    pub const fn attempted_send(&self) -> bool {
        matches!(self, Self::Send { .. })
    }
}

/// Outcome of a single dispatch.
pub type DispatchResult = Result<Delivery, DispatchError>;

/// Delivers stake alerts to one chat platform.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - Failures are returned, never panicked on, and never retried
#[async_trait]
pub trait StakeNotifier: Send + Sync {
    /// Platform this notifier delivers to.
    fn platform(&self) -> Platform;

    /// Render and send one alert.
    async fn dispatch(&self, event: &StakeEvent) -> DispatchResult;
}

/// Registry of notifiers (composite pattern).
///
/// Broadcasts each event to all registered notifiers concurrently.
#[derive(Clone, Default)]
pub struct NotifierRegistry {
    notifiers: Vec<Arc<dyn StakeNotifier>>,
}

impl NotifierRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a notifier.
    pub fn register(&mut self, notifier: Arc<dyn StakeNotifier>) {
        self.notifiers.push(notifier);
    }

    /// First registered notifier for `platform`.
    #[must_use]
    pub fn get(&self, platform: Platform) -> Option<&Arc<dyn StakeNotifier>> {
        self.notifiers.iter().find(|n| n.platform() == platform)
    }

    /// Dispatch to every notifier; results are in registration order.
    pub async fn dispatch_all(&self, event: &StakeEvent) -> Vec<(Platform, DispatchResult)> {
        let sends = self.notifiers.iter().map(|notifier| async move {
            (notifier.platform(), notifier.dispatch(event).await)
        });
        join_all(sends).await
    }

    /// Number of registered notifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.notifiers.len()
    }

    /// Check if registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifiers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingNotifier {
        platform: Platform,
        count: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl StakeNotifier for CountingNotifier {
        fn platform(&self) -> Platform {
            self.platform
        }

        async fn dispatch(&self, _event: &StakeEvent) -> DispatchResult {
            self.count.fetch_add(1, Ordering::SeqCst);
            Ok(Delivery {
                platform: self.platform,
                message_id: None,
            })
        }
    }

    struct FailingNotifier;

    #[async_trait]
    impl StakeNotifier for FailingNotifier {
        fn platform(&self) -> Platform {
            Platform::Discord
        }

        async fn dispatch(&self, _event: &StakeEvent) -> DispatchResult {
            Err(DispatchError::NotTextChannel {
                channel_id: "1".into(),
                kind: 4,
            })
        }
    }

    #[tokio::test]
    async fn test_registry_dispatch_all() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut registry = NotifierRegistry::new();
        registry.register(Arc::new(CountingNotifier {
            platform: Platform::Telegram,
            count: count.clone(),
        }));
        registry.register(Arc::new(FailingNotifier));

        let results = registry.dispatch_all(&StakeEvent::sample()).await;

        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].0, Platform::Telegram);
        assert!(results[0].1.is_ok());
        assert_eq!(results[1].0, Platform::Discord);
        assert!(results[1].1.is_err());
    }

    #[test]
    fn test_registry_len_and_get() {
        let mut registry = NotifierRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.get(Platform::Discord).is_none());

        registry.register(Arc::new(FailingNotifier));
        assert_eq!(registry.len(), 1);
        assert!(registry.get(Platform::Discord).is_some());
        assert!(registry.get(Platform::Telegram).is_none());
    }

    #[test]
    fn test_attempted_send() {
        let send = DispatchError::Send {
            platform: Platform::Telegram,
            reason: "chat not found".into(),
        };
        let skipped = DispatchError::ChannelUnavailable {
            channel_id: "1".into(),
            reason: "404".into(),
        };
        assert!(send.attempted_send());
        assert!(!skipped.attempted_send());
        assert_eq!(send.to_string(), "telegram send failed: chat not found");
    }
}
