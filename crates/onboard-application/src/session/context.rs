use onboard_core::identity::Identity;
use serde_json::Value;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Lifecycle of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationState {
    Idle,
    Activating,
    Active,
}

struct SessionState {
    identity: Option<Identity>,
    state: ActivationState,
    file_cache_enabled: bool,
    /// Bumped by every activation; stale async steps compare against it.
    generation: u64,
    ephemeral: HashMap<String, Value>,
}

/// Session-scoped state shared with the rest of the application.
///
/// Readers use the public accessors. Writes that belong to the activation
/// sequence are crate-private and take the activation's generation, so a
/// superseded activation cannot overwrite a newer identity.
pub struct SessionContext {
    inner: RwLock<SessionState>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(SessionState {
                identity: None,
                state: ActivationState::Idle,
                file_cache_enabled: true,
                generation: 0,
                ephemeral: HashMap::new(),
            }),
        }
    }

    /// The current identity, visible as soon as activation has begun.
    pub async fn current_identity(&self) -> Option<Identity> {
        self.inner.read().await.identity.clone()
    }

    pub async fn state(&self) -> ActivationState {
        self.inner.read().await.state
    }

    pub async fn file_cache_enabled(&self) -> bool {
        self.inner.read().await.file_cache_enabled
    }

    /// Stores a value that lives until the next activation.
    pub async fn put_ephemeral(&self, key: impl Into<String>, value: Value) {
        self.inner.write().await.ephemeral.insert(key.into(), value);
    }

    pub async fn ephemeral(&self, key: &str) -> Option<Value> {
        self.inner.read().await.ephemeral.get(key).cloned()
    }

    /// Clears session-scoped data, installs `identity` and enters
    /// `Activating`. Returns the generation of this activation.
    pub(crate) async fn begin(&self, identity: Identity) -> u64 {
        let mut inner = self.inner.write().await;
        inner.ephemeral.clear();
        inner.file_cache_enabled = true;
        inner.identity = Some(identity);
        inner.state = ActivationState::Activating;
        inner.generation += 1;
        inner.generation
    }

    /// Returns false when `generation` has been superseded.
    pub(crate) async fn set_avatar_path(&self, generation: u64, avatar_path: String) -> bool {
        let mut inner = self.inner.write().await;
        if inner.generation != generation {
            return false;
        }
        if let Some(identity) = inner.identity.as_mut() {
            identity.avatar_path = Some(avatar_path);
        }
        true
    }

    pub(crate) async fn disable_file_cache(&self, generation: u64) -> bool {
        let mut inner = self.inner.write().await;
        if inner.generation != generation {
            return false;
        }
        inner.file_cache_enabled = false;
        true
    }

    pub(crate) async fn mark_active(&self, generation: u64) -> bool {
        let mut inner = self.inner.write().await;
        if inner.generation != generation {
            return false;
        }
        inner.state = ActivationState::Active;
        true
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}
