//! Broadcast-channel event bus.

use onboard_core::event::{AppEvent, EventBus};
use tokio::sync::broadcast;

/// Event bus backed by a tokio broadcast channel.
///
/// Each subscriber sees every event published after it subscribed. Slow
/// subscribers lag and lose the oldest events once `capacity` is exceeded.
#[derive(Clone)]
pub struct BroadcastEventBus {
    sender: broadcast::Sender<AppEvent>,
}

impl BroadcastEventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl EventBus for BroadcastEventBus {
    fn publish(&self, event: AppEvent) {
        let topic = event.topic();
        match self.sender.send(event) {
            Ok(receivers) => {
                tracing::debug!("[EventBus] Published {} to {} subscriber(s)", topic, receivers);
            }
            Err(_) => {
                tracing::trace!("[EventBus] No subscribers for {}, event dropped", topic);
            }
        }
    }
}
