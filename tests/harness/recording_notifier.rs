use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use stakewire::domain::{Platform, StakeEvent};
use stakewire::port::{Delivery, DispatchError, DispatchResult, StakeNotifier};

/// Thread-safe event collector for dispatch assertions in tests.
#[derive(Clone)]
pub struct RecordingNotifier {
    platform: Platform,
    fail: bool,
    events: Arc<Mutex<Vec<StakeEvent>>>,
}

impl RecordingNotifier {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            fail: false,
            events: Arc::default(),
        }
    }

    /// Records every event, then reports a send failure.
    pub fn failing(platform: Platform) -> Self {
        Self {
            fail: true,
            ..Self::new(platform)
        }
    }

    pub fn len(&self) -> usize {
        self.events.lock().expect("lock notifier events").len()
    }

    pub fn events(&self) -> Vec<StakeEvent> {
        self.events.lock().expect("lock notifier events").clone()
    }
}

#[async_trait]
impl StakeNotifier for RecordingNotifier {
    fn platform(&self) -> Platform {
        self.platform
    }

    async fn dispatch(&self, event: &StakeEvent) -> DispatchResult {
        let count = {
            let mut events = self.events.lock().expect("lock notifier events");
            events.push(event.clone());
            events.len()
        };
        if self.fail {
            return Err(DispatchError::Send {
                platform: self.platform,
                reason: "recording notifier told to fail".into(),
            });
        }
        Ok(Delivery {
            platform: self.platform,
            message_id: Some(count.to_string()),
        })
    }
}
