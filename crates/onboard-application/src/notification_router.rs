//! Normalises native push events onto the internal event bus.

use onboard_core::error::{OnboardError, Result};
use onboard_core::event::{AppEvent, EventBus};
use onboard_core::push::{NativeEventKind, NativePushEvent, Platform, PlatformCapability};
use serde_json::Value;
use std::sync::Arc;

use crate::push_identity::PushIdentityManager;

/// Adapts platform-specific push payloads into [`AppEvent`]s.
///
/// | event                | ios             | android / other |
/// |----------------------|-----------------|-----------------|
/// | open / receive       | `aps.alert`     | `alert`         |
/// | receive message      | `content`       | `message`       |
pub struct NotificationRouter {
    platform: Arc<dyn PlatformCapability>,
    push_identity: Arc<PushIdentityManager>,
    event_bus: Arc<dyn EventBus>,
}

impl NotificationRouter {
    pub fn new(
        platform: Arc<dyn PlatformCapability>,
        push_identity: Arc<PushIdentityManager>,
        event_bus: Arc<dyn EventBus>,
    ) -> Self {
        Self {
            platform,
            push_identity,
            event_bus,
        }
    }

    /// Normalises `event`, publishes it and returns what was published.
    ///
    /// Opening a notification clears the badge first, even when the payload
    /// turns out to be malformed.
    ///
    /// # Errors
    ///
    /// Returns `OnboardError::MalformedPayload` if the field expected on the
    /// current platform is missing. Nothing is published in that case.
    pub fn route(&self, event: &NativePushEvent) -> Result<AppEvent> {
        let platform = self.platform.platform();

        let normalized = match event.kind {
            NativeEventKind::OpenNotification => {
                self.push_identity.set_badge_count(0);
                let content = alert(platform, &event.payload)?;
                tracing::info!("[NotificationRouter] Notification opened: {}", content);
                AppEvent::NotificationOpened { content }
            }
            NativeEventKind::ReceiveNotification => {
                let content = alert(platform, &event.payload)?;
                tracing::info!("[NotificationRouter] Notification received: {}", content);
                AppEvent::NotificationReceived { content }
            }
            NativeEventKind::ReceiveMessage => {
                let field = match platform {
                    Platform::Ios => "content",
                    _ => "message",
                };
                let message = text_at(&event.payload, &[field], platform)?;
                tracing::info!("[NotificationRouter] Message received: {}", message);
                AppEvent::MessageReceived { message }
            }
        };

        self.event_bus.publish(normalized.clone());
        Ok(normalized)
    }
}

fn alert(platform: Platform, payload: &Value) -> Result<String> {
    match platform {
        Platform::Ios => text_at(payload, &["aps", "alert"], platform),
        _ => text_at(payload, &["alert"], platform),
    }
}

/// Follows `path` into `payload`. Strings are returned as-is, other
/// non-null values in their JSON form.
fn text_at(payload: &Value, path: &[&str], platform: Platform) -> Result<String> {
    let value = path
        .iter()
        .try_fold(payload, |value, key| value.get(*key))
        .filter(|value| !value.is_null())
        .ok_or_else(|| OnboardError::malformed_payload(path.join("."), platform.to_string()))?;

    Ok(match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    })
}
