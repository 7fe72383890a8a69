//! Mock collaborators shared by the unit tests of this crate.

use async_trait::async_trait;
use onboard_core::error::{OnboardError, Result};
use onboard_core::event::{AppEvent, EventBus};
use onboard_core::media::{LocalMedia, MediaObject, MediaStore, UploadedMedia};
use onboard_core::preference::PreferenceStore;
use onboard_core::push::{
    NotificationPermission, Platform, PlatformCapability, PushCommand, PushService,
};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

pub struct FixedPlatform(pub Platform);

impl PlatformCapability for FixedPlatform {
    fn platform(&self) -> Platform {
        self.0
    }
}

pub fn platform(platform: Platform) -> Arc<dyn PlatformCapability> {
    Arc::new(FixedPlatform(platform))
}

// ============================================================================
// Media store
// ============================================================================

#[derive(Default)]
pub struct MockMediaStore {
    objects: Mutex<HashMap<String, Result<MediaObject>>>,
    bulk_response: Mutex<Option<Result<Vec<UploadedMedia>>>>,
    /// When set, `get_by_id` waits for a notification before answering.
    lookup_gate: Option<Arc<Notify>>,
    pub get_calls: Mutex<Vec<String>>,
    pub bulk_calls: Mutex<Vec<Vec<LocalMedia>>>,
}

impl MockMediaStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gated(gate: Arc<Notify>) -> Self {
        Self {
            lookup_gate: Some(gate),
            ..Self::default()
        }
    }

    pub fn with_object(self, id: &str, path: Option<&str>) -> Self {
        self.objects.lock().unwrap().insert(
            id.to_string(),
            Ok(MediaObject {
                id: id.to_string(),
                path: path.map(str::to_string),
            }),
        );
        self
    }

    pub fn with_lookup_error(self, id: &str, error: OnboardError) -> Self {
        self.objects
            .lock()
            .unwrap()
            .insert(id.to_string(), Err(error));
        self
    }

    pub fn with_bulk_response(self, response: Result<Vec<UploadedMedia>>) -> Self {
        *self.bulk_response.lock().unwrap() = Some(response);
        self
    }

    pub fn get_call_count(&self) -> usize {
        self.get_calls.lock().unwrap().len()
    }

    pub fn bulk_call_count(&self) -> usize {
        self.bulk_calls.lock().unwrap().len()
    }
}

#[async_trait]
impl MediaStore for MockMediaStore {
    async fn get_by_id(&self, id: &str) -> Result<MediaObject> {
        self.get_calls.lock().unwrap().push(id.to_string());
        if let Some(gate) = &self.lookup_gate {
            gate.notified().await;
        }
        self.objects
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .unwrap_or_else(|| Err(OnboardError::not_found("MediaObject", id)))
    }

    async fn bulk_upload(&self, items: Vec<LocalMedia>) -> Result<Vec<UploadedMedia>> {
        self.bulk_calls.lock().unwrap().push(items.clone());
        self.bulk_response.lock().unwrap().take().unwrap_or_else(|| {
            Ok(items
                .iter()
                .enumerate()
                .map(|(i, _)| UploadedMedia {
                    id: format!("uploaded-{}", i),
                })
                .collect())
        })
    }
}

// ============================================================================
// Push service
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum PushCall {
    Init,
    DebugMode(bool),
    Permission,
    RegistrationId,
    Command(PushCommand),
    IconBadge(u32),
}

#[derive(Default)]
pub struct MockPushService {
    pub calls: Mutex<Vec<PushCall>>,
    /// Operation names that fail ("init", "set_alias", "icon_badge", ...).
    failing: HashSet<&'static str>,
    permission: Option<NotificationPermission>,
}

impl MockPushService {
    pub fn new() -> Self {
        Self {
            permission: Some(NotificationPermission::Granted),
            ..Self::default()
        }
    }

    pub fn failing(operations: &[&'static str]) -> Self {
        Self {
            failing: operations.iter().copied().collect(),
            ..Self::new()
        }
    }

    pub fn calls(&self) -> Vec<PushCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn commands(&self) -> Vec<PushCommand> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                PushCall::Command(command) => Some(command),
                _ => None,
            })
            .collect()
    }

    fn record(&self, operation: &'static str, call: PushCall) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        if self.failing.contains(operation) {
            Err(OnboardError::transport(format!("{} rejected", operation)))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl PushService for MockPushService {
    async fn init(&self) -> Result<()> {
        self.record("init", PushCall::Init)
    }

    async fn set_debug_mode(&self, enabled: bool) -> Result<()> {
        self.record("debug_mode", PushCall::DebugMode(enabled))
    }

    async fn notification_permission(&self) -> Result<NotificationPermission> {
        self.record("permission", PushCall::Permission)?;
        self.permission
            .ok_or_else(|| OnboardError::transport("permission unavailable"))
    }

    async fn registration_id(&self) -> Result<String> {
        self.record("registration_id", PushCall::RegistrationId)?;
        Ok("reg-123".to_string())
    }

    async fn set_alias(&self, sequence: u64, alias: &str) -> Result<()> {
        self.record(
            "set_alias",
            PushCall::Command(PushCommand::set_alias(sequence, alias)),
        )
    }

    async fn delete_alias(&self, sequence: u64) -> Result<()> {
        self.record(
            "delete_alias",
            PushCall::Command(PushCommand::delete_alias(sequence)),
        )
    }

    async fn set_tags(&self, sequence: u64, tags: &[String]) -> Result<()> {
        self.record(
            "set_tags",
            PushCall::Command(PushCommand::set_tags(sequence, tags.to_vec())),
        )
    }

    async fn delete_tags(&self, sequence: u64, tags: &[String]) -> Result<()> {
        self.record(
            "delete_tags",
            PushCall::Command(PushCommand::delete_tags(sequence, tags.to_vec())),
        )
    }

    async fn set_badge(&self, sequence: u64, count: u32) -> Result<()> {
        self.record(
            "set_badge",
            PushCall::Command(PushCommand::set_badge(sequence, count)),
        )
    }

    async fn set_application_icon_badge(&self, count: u32) -> Result<()> {
        self.record("icon_badge", PushCall::IconBadge(count))
    }
}

// ============================================================================
// Preferences and event bus
// ============================================================================

#[derive(Default)]
pub struct MockPreferenceStore {
    values: Mutex<HashMap<String, Value>>,
    fail: bool,
}

impl MockPreferenceStore {
    pub fn with_value(key: &str, value: Value) -> Self {
        let store = Self::default();
        store.values.lock().unwrap().insert(key.to_string(), value);
        store
    }

    pub fn broken() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl PreferenceStore for MockPreferenceStore {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        if self.fail {
            return Err(OnboardError::storage("preferences unavailable"));
        }
        Ok(self.values.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<()> {
        self.values.lock().unwrap().insert(key.to_string(), value);
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingEventBus {
    pub events: Mutex<Vec<AppEvent>>,
}

impl RecordingEventBus {
    pub fn events(&self) -> Vec<AppEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl EventBus for RecordingEventBus {
    fn publish(&self, event: AppEvent) {
        self.events.lock().unwrap().push(event);
    }
}
