//! Push identity binding.
//!
//! Binds and unbinds the device alias and tag set with the remote push
//! service. Every operation is gated on the platform, best-effort and
//! fire-and-forget: failures are logged and dropped, never retried and never
//! returned to the caller.

use onboard_core::config::PushSettings;
use onboard_core::error::{OnboardError, Result};
use onboard_core::push::{
    NotificationPermission, PlatformCapability, PushCommand, PushCommandKind, PushPayload,
    PushService,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::task::JoinHandle;

/// Handle to a push operation that has been issued.
///
/// Dropping it does not cancel the operation. Awaiting [`Dispatch::settled`]
/// waits until the remote call(s) finished, which is mostly useful in tests
/// and during shutdown.
#[derive(Debug)]
pub struct Dispatch {
    sequence: Option<u64>,
    handle: Option<JoinHandle<()>>,
}

impl Dispatch {
    fn skipped() -> Self {
        Self {
            sequence: None,
            handle: None,
        }
    }

    /// Sequence number consumed by the command, `None` if it was skipped.
    pub fn sequence(&self) -> Option<u64> {
        self.sequence
    }

    /// True when the platform gate suppressed the operation.
    pub fn is_skipped(&self) -> bool {
        self.handle.is_none()
    }

    pub async fn settled(self) {
        if let Some(handle) = self.handle {
            if let Err(e) = handle.await {
                tracing::warn!("[PushIdentity] Push task aborted: {}", e);
            }
        }
    }
}

/// Issues sequenced alias/tag/badge commands to the push service.
///
/// A single instance owns the process-wide sequence counter; share it behind
/// an `Arc`. Command-issuing methods spawn onto the current Tokio runtime and
/// must be called from within one.
pub struct PushIdentityManager {
    push_service: Arc<dyn PushService>,
    platform: Arc<dyn PlatformCapability>,
    next_sequence: AtomicU64,
    debug: bool,
}

impl PushIdentityManager {
    pub fn new(
        push_service: Arc<dyn PushService>,
        platform: Arc<dyn PlatformCapability>,
        settings: &PushSettings,
    ) -> Self {
        Self {
            push_service,
            platform,
            next_sequence: AtomicU64::new(settings.initial_sequence),
            debug: settings.debug,
        }
    }

    /// Initialises the push SDK and logs the notification permission.
    pub async fn init(&self) {
        if !self.platform.is_mobile() {
            return;
        }

        if let Err(e) = self.push_service.init().await {
            tracing::warn!("[PushIdentity] Push SDK init failed: {}", e);
            return;
        }
        if let Err(e) = self.push_service.set_debug_mode(self.debug).await {
            tracing::warn!("[PushIdentity] Failed to set debug mode: {}", e);
        }

        match self.push_service.notification_permission().await {
            Ok(NotificationPermission::Granted) => {
                tracing::info!("[PushIdentity] Notifications enabled in system settings");
            }
            Ok(NotificationPermission::Denied) => {
                tracing::info!("[PushIdentity] Notifications disabled in system settings");
            }
            Err(e) => {
                tracing::warn!("[PushIdentity] Could not read notification settings: {}", e);
            }
        }
    }

    /// Registration id of this device, `None` off mobile or on failure.
    pub async fn registration_id(&self) -> Option<String> {
        if !self.platform.is_mobile() {
            return None;
        }
        match self.push_service.registration_id().await {
            Ok(id) => Some(id),
            Err(e) => {
                tracing::warn!("[PushIdentity] Failed to get registration id: {}", e);
                None
            }
        }
    }

    pub fn bind_alias(&self, alias: &str) -> Dispatch {
        if !self.platform.is_mobile() {
            return Dispatch::skipped();
        }
        let sequence = self.take_sequence();
        self.send(PushCommand::set_alias(sequence, alias))
    }

    pub fn unbind_alias(&self) -> Dispatch {
        if !self.platform.is_mobile() {
            return Dispatch::skipped();
        }
        let sequence = self.take_sequence();
        self.send(PushCommand::delete_alias(sequence))
    }

    /// Binds `extra_tags` plus the platform tag ("android" or "ios"). A
    /// mobile runtime that is neither gets the caller's tags only.
    pub fn bind_tags(&self, mut extra_tags: Vec<String>) -> Dispatch {
        if !self.platform.is_mobile() {
            return Dispatch::skipped();
        }
        let platform_tag = if self.platform.is_android() {
            Some("android")
        } else if self.platform.is_ios() {
            Some("ios")
        } else {
            None
        };
        if let Some(platform_tag) = platform_tag {
            if !extra_tags.iter().any(|tag| tag == platform_tag) {
                extra_tags.push(platform_tag.to_string());
            }
        }
        let sequence = self.take_sequence();
        self.send(PushCommand::set_tags(sequence, extra_tags))
    }

    pub fn unbind_tags(&self, tags: Vec<String>) -> Dispatch {
        if !self.platform.is_mobile() {
            return Dispatch::skipped();
        }
        let sequence = self.take_sequence();
        self.send(PushCommand::delete_tags(sequence, tags))
    }

    /// Sets the badge count on ios: syncs it to the push server and updates
    /// the local icon. The two effects fail independently.
    pub fn set_badge_count(&self, count: u32) -> Dispatch {
        if !self.platform.is_ios() {
            return Dispatch::skipped();
        }
        let command = PushCommand::set_badge(self.take_sequence(), count);
        let sequence = command.sequence;
        let service = Arc::clone(&self.push_service);

        let handle = tokio::spawn(async move {
            let (remote, local) = tokio::join!(
                execute(service.as_ref(), &command),
                service.set_application_icon_badge(count)
            );
            log_outcome(command.kind, sequence, &remote);
            match local {
                Ok(()) => tracing::debug!("[PushIdentity] Icon badge set to {}", count),
                Err(e) => tracing::warn!("[PushIdentity] Failed to set icon badge: {}", e),
            }
        });

        Dispatch {
            sequence: Some(sequence),
            handle: Some(handle),
        }
    }

    /// Next value of the shared counter. Consumed at call time so the order
    /// of sequence numbers matches call order, not completion order.
    fn take_sequence(&self) -> u64 {
        self.next_sequence.fetch_add(1, Ordering::SeqCst)
    }

    fn send(&self, command: PushCommand) -> Dispatch {
        let service = Arc::clone(&self.push_service);
        let sequence = command.sequence;
        tracing::debug!("[PushIdentity] Issuing {} (sequence {})", command.kind, sequence);

        let handle = tokio::spawn(async move {
            let result = execute(service.as_ref(), &command).await;
            log_outcome(command.kind, command.sequence, &result);
        });

        Dispatch {
            sequence: Some(sequence),
            handle: Some(handle),
        }
    }
}

async fn execute(service: &dyn PushService, command: &PushCommand) -> Result<()> {
    let sequence = command.sequence;
    match (command.kind, &command.payload) {
        (PushCommandKind::SetAlias, PushPayload::Alias(alias)) => {
            service.set_alias(sequence, alias).await
        }
        (PushCommandKind::DeleteAlias, _) => service.delete_alias(sequence).await,
        (PushCommandKind::SetTags, PushPayload::Tags(tags)) => {
            service.set_tags(sequence, tags).await
        }
        (PushCommandKind::DeleteTags, PushPayload::Tags(tags)) => {
            service.delete_tags(sequence, tags).await
        }
        (PushCommandKind::SetBadge, PushPayload::Badge(count)) => {
            service.set_badge(sequence, *count).await
        }
        (kind, payload) => Err(OnboardError::internal(format!(
            "payload {:?} does not fit {}",
            payload, kind
        ))),
    }
}

fn log_outcome(kind: PushCommandKind, sequence: u64, result: &Result<()>) {
    match result {
        Ok(()) => tracing::info!("[PushIdentity] {} succeeded (sequence {})", kind, sequence),
        Err(e) => tracing::warn!(
            "[PushIdentity] {} failed (sequence {}): {}",
            kind,
            sequence,
            e
        ),
    }
}
