//! Raw events from the native push plugin.

use serde::{Deserialize, Serialize};

/// The three inbound event kinds the native plugin emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NativeEventKind {
    /// The user tapped a notification.
    OpenNotification,
    /// A notification arrived while the app was running.
    ReceiveNotification,
    /// A custom (silent) message arrived.
    ReceiveMessage,
}

/// An event as delivered by the plugin. The payload shape differs by
/// platform: ios nests the alert under `aps`, android keeps it flat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NativePushEvent {
    pub kind: NativeEventKind,
    pub payload: serde_json::Value,
}

impl NativePushEvent {
    pub fn new(kind: NativeEventKind, payload: serde_json::Value) -> Self {
        Self { kind, payload }
    }
}
