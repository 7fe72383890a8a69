//! Avatar resolution.

use onboard_core::media::{MediaObject, MediaStore};
use std::sync::Arc;

/// Resolves an optional avatar media id to a display path.
///
/// Never fails: any lookup problem falls back to the default avatar.
/// Exactly one lookup is made per call and nothing is retried.
#[derive(Clone)]
pub struct AvatarResolver {
    media_store: Arc<dyn MediaStore>,
    default_avatar_path: String,
}

impl AvatarResolver {
    pub fn new(media_store: Arc<dyn MediaStore>, default_avatar_path: impl Into<String>) -> Self {
        Self {
            media_store,
            default_avatar_path: default_avatar_path.into(),
        }
    }

    pub fn default_avatar_path(&self) -> &str {
        &self.default_avatar_path
    }

    /// Returns the avatar's stored path, or the default path when there is
    /// no reference, the object has no usable path, or the lookup fails.
    pub async fn resolve(&self, avatar_id: Option<&str>) -> String {
        let Some(avatar_id) = avatar_id else {
            return self.default_avatar_path.clone();
        };

        match self.media_store.get_by_id(avatar_id).await {
            Ok(MediaObject {
                path: Some(path), ..
            }) if !path.trim().is_empty() => path,
            Ok(_) => {
                tracing::debug!(
                    "[AvatarResolver] Media '{}' has no path, using default avatar",
                    avatar_id
                );
                self.default_avatar_path.clone()
            }
            Err(e) => {
                tracing::warn!(
                    "[AvatarResolver] Lookup of '{}' failed, using default avatar: {}",
                    avatar_id,
                    e
                );
                self.default_avatar_path.clone()
            }
        }
    }
}
