//! Push service collaborator trait.

use async_trait::async_trait;

use crate::error::Result;

/// Whether the user allowed notifications in the system settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPermission {
    Granted,
    Denied,
}

/// Remote push service (and its native SDK) as consumed by the coordination
/// layer. Every call may fail independently.
#[async_trait]
pub trait PushService: Send + Sync {
    /// Initialises the native SDK.
    async fn init(&self) -> Result<()>;

    async fn set_debug_mode(&self, enabled: bool) -> Result<()>;

    async fn notification_permission(&self) -> Result<NotificationPermission>;

    /// Device registration id assigned by the push service.
    async fn registration_id(&self) -> Result<String>;

    async fn set_alias(&self, sequence: u64, alias: &str) -> Result<()>;

    async fn delete_alias(&self, sequence: u64) -> Result<()>;

    async fn set_tags(&self, sequence: u64, tags: &[String]) -> Result<()>;

    async fn delete_tags(&self, sequence: u64, tags: &[String]) -> Result<()>;

    /// Syncs the badge value to the push server.
    async fn set_badge(&self, sequence: u64, count: u32) -> Result<()>;

    /// Updates the badge shown on the local application icon.
    async fn set_application_icon_badge(&self, count: u32) -> Result<()>;
}
