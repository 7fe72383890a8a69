use chrono::Utc;
use onboard_core::OnboardConfig;
use onboard_core::event::{AppEvent, EventBus, SessionActivatedEvent};
use onboard_core::identity::Identity;
use onboard_core::preference::{PreferenceFlag, PreferenceStore};
use std::sync::Arc;
use tokio::task::JoinHandle;
use uuid::Uuid;

use super::context::SessionContext;
use crate::avatar::AvatarResolver;
use crate::push_identity::{Dispatch, PushIdentityManager};

/// Result of [`SessionActivator::activate`].
///
/// By the time it is returned the session is active and the activation
/// event has been published. The preference query and push bindings may
/// still be in flight; [`Activation::settled`] waits for them.
#[derive(Debug)]
pub struct Activation {
    pub activation_id: Uuid,
    /// A newer activation started before this one completed.
    pub superseded: bool,
    /// The identity as published, avatar path resolved.
    pub identity: Identity,
    preference_query: JoinHandle<()>,
    push_bindings: Vec<Dispatch>,
}

impl Activation {
    pub async fn settled(self) -> Identity {
        if let Err(e) = self.preference_query.await {
            tracing::warn!("[SessionActivator] Preference query aborted: {}", e);
        }
        for dispatch in self.push_bindings {
            dispatch.settled().await;
        }
        self.identity
    }
}

/// Turns an authenticated identity into the active session.
///
/// Steps and whether they gate the activation event:
///
/// 1. clear session-scoped data (sync)
/// 2. install the identity as current (sync)
/// 3. query the file-cache preference (background, does not gate)
/// 4. resolve the avatar (gates)
/// 5. bind push tags and alias (background, does not gate)
/// 6. mark active and publish `SessionActivated`
///
/// Concurrent activations are not supported; the last one wins. A
/// superseded activation still publishes its own event, marked
/// `superseded`, but no longer writes to the context.
pub struct SessionActivator {
    context: Arc<SessionContext>,
    avatar_resolver: AvatarResolver,
    push_identity: Arc<PushIdentityManager>,
    preferences: Arc<dyn PreferenceStore>,
    event_bus: Arc<dyn EventBus>,
    config: Arc<OnboardConfig>,
}

impl SessionActivator {
    pub fn new(
        context: Arc<SessionContext>,
        avatar_resolver: AvatarResolver,
        push_identity: Arc<PushIdentityManager>,
        preferences: Arc<dyn PreferenceStore>,
        event_bus: Arc<dyn EventBus>,
        config: Arc<OnboardConfig>,
    ) -> Self {
        Self {
            context,
            avatar_resolver,
            push_identity,
            preferences,
            event_bus,
            config,
        }
    }

    pub fn context(&self) -> &Arc<SessionContext> {
        &self.context
    }

    /// Runs the activation sequence for `identity`. Never fails.
    ///
    /// Must be called from within a Tokio runtime.
    pub async fn activate(&self, mut identity: Identity) -> Activation {
        let activation_id = Uuid::new_v4();
        identity.avatar_path = None;
        tracing::info!(
            "[SessionActivator] Activating user {} (activation {})",
            identity.id,
            activation_id
        );

        let generation = self.context.begin(identity.clone()).await;

        let preference_query = self.spawn_preference_query(generation, &identity.id);

        let mut tags = self.config.push.extra_tags.clone();
        tags.retain(|tag| !tag.is_empty());
        let push_bindings = vec![
            self.push_identity.bind_tags(tags),
            self.push_identity.bind_alias(&identity.id),
        ];

        let avatar_path = self
            .avatar_resolver
            .resolve(identity.avatar_id.as_deref())
            .await;
        identity.avatar_path = Some(avatar_path.clone());

        let current = self.context.set_avatar_path(generation, avatar_path).await
            && self.context.mark_active(generation).await;
        let superseded = !current;
        if superseded {
            tracing::debug!(
                "[SessionActivator] Activation {} superseded before completion",
                activation_id
            );
        }

        self.event_bus
            .publish(AppEvent::SessionActivated(SessionActivatedEvent {
                activation_id,
                generation,
                superseded,
                identity: identity.clone(),
                activated_at: Utc::now(),
            }));
        tracing::info!(
            "[SessionActivator] User {} active (activation {})",
            identity.id,
            activation_id
        );

        Activation {
            activation_id,
            superseded,
            identity,
            preference_query,
            push_bindings,
        }
    }

    /// Applies an explicit `false` for the file-cache preference. Lookup
    /// errors count as unset.
    fn spawn_preference_query(&self, generation: u64, identity_id: &str) -> JoinHandle<()> {
        let key = self.config.file_cache_key(identity_id);
        let preferences = Arc::clone(&self.preferences);
        let context = Arc::clone(&self.context);

        tokio::spawn(async move {
            let flag = match preferences.get(&key).await {
                Ok(value) => PreferenceFlag::from_stored(value.as_ref()),
                Err(e) => {
                    tracing::warn!(
                        "[SessionActivator] Failed to read preference '{}', treating as unset: {}",
                        key,
                        e
                    );
                    PreferenceFlag::Unset
                }
            };

            if flag.is_enabled() {
                return;
            }
            if context.disable_file_cache(generation).await {
                tracing::info!("[SessionActivator] File cache disabled by preference '{}'", key);
            }
        })
    }
}
