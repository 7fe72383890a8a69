//! Identity domain model.

use serde::{Deserialize, Serialize};

/// An authenticated user as seen by the session layer.
///
/// `avatar_path` starts out unresolved (`None`) and is filled in exactly once
/// per activation, after the avatar reference has been resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Opaque unique user id. Also used as the push alias.
    pub id: String,
    /// Display name
    pub username: String,
    /// Media id of the avatar, if the user has uploaded one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_id: Option<String>,
    /// Display path of the avatar once resolved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_path: Option<String>,
}

impl Identity {
    /// Creates an identity without an avatar reference.
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            avatar_id: None,
            avatar_path: None,
        }
    }

    /// Sets the avatar media reference.
    pub fn with_avatar_id(mut self, avatar_id: impl Into<String>) -> Self {
        self.avatar_id = Some(avatar_id.into());
        self
    }
}
