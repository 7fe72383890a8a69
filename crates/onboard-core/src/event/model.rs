use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::identity::Identity;

/// Topics known to the internal bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topic {
    SessionActivated,
    NotificationOpened,
    NotificationReceived,
    MessageReceived,
}

impl Topic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::SessionActivated => "user:login",
            Topic::NotificationOpened => "push:notification-opened",
            Topic::NotificationReceived => "push:notification-received",
            Topic::MessageReceived => "push:message-received",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Published once per activation, after the avatar has been resolved.
///
/// A later activation can overtake a slow one, so events may arrive out of
/// order. Subscribers should drop events with `superseded` set, or keep the
/// one with the highest `generation`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionActivatedEvent {
    pub activation_id: Uuid,
    /// Increases with every activation started in this process.
    pub generation: u64,
    /// True when a newer activation started before this one completed.
    pub superseded: bool,
    pub identity: Identity,
    pub activated_at: DateTime<Utc>,
}

impl SessionActivatedEvent {
    /// Whether this event describes the session that is current.
    pub fn is_current(&self) -> bool {
        !self.superseded
    }
}

/// Events carried by the bus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppEvent {
    SessionActivated(SessionActivatedEvent),
    NotificationOpened { content: String },
    NotificationReceived { content: String },
    MessageReceived { message: String },
}

impl AppEvent {
    pub fn topic(&self) -> Topic {
        match self {
            AppEvent::SessionActivated(_) => Topic::SessionActivated,
            AppEvent::NotificationOpened { .. } => Topic::NotificationOpened,
            AppEvent::NotificationReceived { .. } => Topic::NotificationReceived,
            AppEvent::MessageReceived { .. } => Topic::MessageReceived,
        }
    }
}
