use super::model::AppEvent;

/// Fire-and-forget publisher. No acknowledgement is returned and a bus
/// without subscribers silently drops events.
pub trait EventBus: Send + Sync {
    fn publish(&self, event: AppEvent);
}
