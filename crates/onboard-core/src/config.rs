//! Configuration model.
//!
//! Loaded from `~/.config/onboard/config.toml` by the infrastructure layer.
//! Every field has a default so an empty or missing file is valid.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{OnboardError, Result};

pub const DEFAULT_AVATAR_PATH: &str = "assets/img/avatar.png";
pub const DEFAULT_FILE_CACHE_KEY_PREFIX: &str = "enabled-file-cache-";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OnboardConfig {
    /// Avatar shown whenever a user's own avatar cannot be resolved.
    pub default_avatar_path: String,
    /// Preference key prefix; the identity id is appended.
    pub file_cache_key_prefix: String,
    pub push: PushSettings,
    pub event_bus: EventBusSettings,
}

impl Default for OnboardConfig {
    fn default() -> Self {
        Self {
            default_avatar_path: DEFAULT_AVATAR_PATH.to_string(),
            file_cache_key_prefix: DEFAULT_FILE_CACHE_KEY_PREFIX.to_string(),
            push: PushSettings::default(),
            event_bus: EventBusSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PushSettings {
    /// Enables the native SDK's debug output.
    pub debug: bool,
    /// Tags bound on every activation in addition to the platform tag.
    pub extra_tags: Vec<String>,
    /// First sequence number handed out by the push command counter.
    pub initial_sequence: u64,
}

impl Default for PushSettings {
    fn default() -> Self {
        Self {
            debug: false,
            extra_tags: Vec::new(),
            initial_sequence: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventBusSettings {
    pub capacity: usize,
}

impl Default for EventBusSettings {
    fn default() -> Self {
        Self { capacity: 256 }
    }
}

impl OnboardConfig {
    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns a serialization error for invalid TOML and a config error for
    /// values that parse but cannot be used.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_avatar_path.trim().is_empty() {
            return Err(OnboardError::config("default_avatar_path must not be empty"));
        }
        if self.event_bus.capacity == 0 {
            return Err(OnboardError::config("event_bus.capacity must be at least 1"));
        }
        Ok(())
    }

    /// Preference key holding the file-cache flag for a user.
    pub fn file_cache_key(&self, identity_id: &str) -> String {
        format!("{}{}", self.file_cache_key_prefix, identity_id)
    }

    /// Default location of the config file, `<config_dir>/onboard/config.toml`.
    pub fn default_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("onboard").join("config.toml"))
            .ok_or_else(|| OnboardError::config("Cannot find config directory"))
    }
}
